//! Utility modules for resource-probe
//!
//! - Structured logging setup and configuration

pub mod logging;

pub use logging::{init_from_env, init_logging, LoggingConfig};
