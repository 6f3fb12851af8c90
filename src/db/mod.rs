pub mod initialize;
pub mod log;
pub mod pool;
