pub mod stats;
pub mod worked;
