pub mod calculator;
pub mod calendar;
pub mod ledger;
pub mod session;
