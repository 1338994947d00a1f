pub mod initialize;
pub mod kv;
pub mod pool;

pub use kv::SqliteKv;
