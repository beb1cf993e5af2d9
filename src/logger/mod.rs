//! Structured logging handle built on `tracing`
//!
//! A [`Logger`] owns its own subscriber. Events go to that subscriber only,
//! so several loggers can coexist; [`Logger::install_global`] additionally
//! routes plain `tracing` macros through it.

pub mod fields;
pub mod sink;
pub mod writer;

pub use fields::Field;
pub use sink::{CaptureSink, LogSink, MultiSink};
pub use writer::BufferWriter;

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::dispatcher::{self, Dispatch, SetGlobalDefaultError};
use tracing::field::display;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{LogFormat, LoggerConfig};
use fields::Fields;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log output {}: {source}", path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid log filter {directive:?}: {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] SetGlobalDefaultError),
}

#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

fn new_fmt_layer<S, W>(format: LogFormat, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .with_target(false)
            .with_writer(writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_ansi(false)
            .with_target(false)
            .with_writer(writer)
            .boxed(),
    }
}

impl Logger {
    /// Build a logger writing to the configured output
    pub fn init(config: &LoggerConfig) -> Result<Self, LoggerError> {
        let writer = writer::make_writer(&config.output)?;
        Self::with_writer(config, writer)
    }

    /// Build a logger writing to `writer`, ignoring `config.output`
    pub fn with_writer<W>(config: &LoggerConfig, writer: W) -> Result<Self, LoggerError>
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let directive = config
            .filter
            .clone()
            .unwrap_or_else(|| config.level.as_directive().to_string());
        let filter = EnvFilter::try_new(&directive)
            .map_err(|source| LoggerError::InvalidFilter { directive, source })?;

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(new_fmt_layer(config.format, writer));

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
        })
    }

    /// Make this logger the process-wide default; call once at startup
    pub fn install_global(&self) -> Result<(), LoggerError> {
        dispatcher::set_global_default(self.dispatch.clone())?;
        Ok(())
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    pub fn debug(&self, message: &str, fields: &[Field]) {
        let fields = Fields::non_empty(fields).map(display);
        dispatcher::with_default(&self.dispatch, || {
            tracing::debug!(fields, "{}", message);
        });
    }

    pub fn info(&self, message: &str, fields: &[Field]) {
        let fields = Fields::non_empty(fields).map(display);
        dispatcher::with_default(&self.dispatch, || {
            tracing::info!(fields, "{}", message);
        });
    }

    /// Log at ERROR; `err` is recorded under the `error` key
    pub fn error(&self, message: &str, err: Option<&dyn StdError>, fields: &[Field]) {
        let error = err.map(display);
        let fields = Fields::non_empty(fields).map(display);
        dispatcher::with_default(&self.dispatch, || {
            tracing::error!(error, fields, "{}", message);
        });
    }
}
