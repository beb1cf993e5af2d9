// Library exports
pub mod config;
pub mod errors;
pub mod logger;

pub use config::LoggerConfig;
pub use errors::{Category, DecodeError, RestError};
pub use logger::{Field, LogSink, Logger, LoggerError};
