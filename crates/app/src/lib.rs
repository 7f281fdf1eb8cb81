//! Storefront application wiring: configuration and owned store state.

pub mod config;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use state::{AppError, AppState};
