pub mod aggregator;
pub mod config;
pub mod export;
pub mod leave;
pub mod log;
pub mod ports;
pub mod punch;
pub mod report;
pub mod validator;
