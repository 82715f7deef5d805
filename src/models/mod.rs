pub mod aggregate;
pub mod leave;
pub mod punch;
pub mod punch_kind;
pub mod window;
