pub mod add;
pub mod aggregate;
pub mod del;
pub mod log;
