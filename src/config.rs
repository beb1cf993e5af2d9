use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Error,
}

impl LogLevel {
    /// Parse a level name; unknown or empty names fall back to `Info`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "debug" => Self::Debug,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Filter directive enabling this level and everything more severe
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogOutput {
    #[default]
    Stdout,
    Stderr,
    File(PathBuf),
}

impl LogOutput {
    /// "stdout", "stderr", or a file path; empty means stdout
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "stdout" => Self::Stdout,
            "stderr" => Self::Stderr,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Compact,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "compact" | "text" => Self::Compact,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub output: LogOutput,
    pub format: LogFormat,
    /// Optional `tracing_subscriber::EnvFilter` directive, overrides `level`
    pub filter: Option<String>,
}

impl LoggerConfig {
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_values(
            env::var("LOG_LEVEL").ok().as_deref(),
            env::var("LOG_OUTPUT").ok().as_deref(),
            env::var("LOG_FORMAT").ok().as_deref(),
        )
        .with_filter(env::var("LOG_FILTER").ok())
    }

    pub fn from_values(level: Option<&str>, output: Option<&str>, format: Option<&str>) -> Self {
        Self {
            level: level.map(LogLevel::parse).unwrap_or_default(),
            output: output.map(LogOutput::parse).unwrap_or_default(),
            format: format.map(LogFormat::parse).unwrap_or_default(),
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter.filter(|f| !f.trim().is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!(LogLevel::parse("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::parse("  ERROR "), LogLevel::Error);
        assert_eq!(LogLevel::parse("info"), LogLevel::Info);
        assert_eq!(LogLevel::parse("warn"), LogLevel::Info);
        assert_eq!(LogLevel::parse(""), LogLevel::Info);
    }

    #[test]
    fn test_output_parsing() {
        assert_eq!(LogOutput::parse(""), LogOutput::Stdout);
        assert_eq!(LogOutput::parse(" stdout "), LogOutput::Stdout);
        assert_eq!(LogOutput::parse("stderr"), LogOutput::Stderr);
        assert_eq!(
            LogOutput::parse("/var/log/users.log"),
            LogOutput::File(PathBuf::from("/var/log/users.log"))
        );
    }

    #[test]
    fn test_from_values_defaults() {
        let config = LoggerConfig::from_values(None, None, None);
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.output, LogOutput::Stdout);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.filter.is_none());
    }

    #[test]
    fn test_from_values() {
        let config = LoggerConfig::from_values(Some("debug"), Some("stderr"), Some("compact"))
            .with_filter(Some("info,bookstore_utils=debug".to_string()));
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.output, LogOutput::Stderr);
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.filter.as_deref(), Some("info,bookstore_utils=debug"));
    }

    #[test]
    fn test_blank_filter_is_ignored() {
        let config = LoggerConfig::default().with_filter(Some("  ".to_string()));
        assert!(config.filter.is_none());
    }
}
