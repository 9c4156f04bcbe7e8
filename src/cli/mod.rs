pub mod actions;
pub mod commands;
pub mod dispatch;
pub mod globals;
pub mod navigator;
pub mod telemetry;

mod start;
pub use self::start::start;
