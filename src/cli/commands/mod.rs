pub mod amend;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod leave;
pub mod log;
pub mod punch;
pub mod report;
pub mod status;
