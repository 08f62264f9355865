/// Core error and configuration types for the wrapper generator
pub mod config;
pub mod error;

pub use config::{ConfigError, Dialect, Framework, GeneratorConfig, OverloadPolicy};
pub use error::{Error, Result};
