//! Application services — use-case implementations over the ports.

pub mod power_service;

pub use power_service::PowerService;
