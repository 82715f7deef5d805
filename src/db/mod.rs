pub mod initialize;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod queries;
