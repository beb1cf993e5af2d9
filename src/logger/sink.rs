use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use super::Logger;

/// Minimal printf-style logging capability handed to code that only needs to emit lines
pub trait LogSink: Send + Sync {
    fn printf(&self, args: fmt::Arguments<'_>);

    fn print(&self, message: &str) {
        self.printf(format_args!("{}", message));
    }
}

impl LogSink for Logger {
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.info(&fmt::format(args), &[]);
    }
}

/// Records every line in memory
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LogSink for CaptureSink {
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(fmt::format(args));
    }
}

/// Forwards each line to every inner sink, in order
#[derive(Clone, Default)]
pub struct MultiSink {
    sinks: Vec<Arc<dyn LogSink>>,
}

impl MultiSink {
    pub fn new(sinks: Vec<Arc<dyn LogSink>>) -> Self {
        Self { sinks }
    }
}

impl LogSink for MultiSink {
    fn printf(&self, args: fmt::Arguments<'_>) {
        for sink in &self.sinks {
            sink.printf(args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_sink() {
        let sink = CaptureSink::new();
        sink.printf(format_args!("loaded {} users", 3));
        sink.print("done");
        assert_eq!(sink.lines(), vec!["loaded 3 users", "done"]);
    }

    #[test]
    fn test_multi_sink_fans_out() {
        let first = Arc::new(CaptureSink::new());
        let second = Arc::new(CaptureSink::new());
        let sinks: Vec<Arc<dyn LogSink>> = vec![first.clone(), second.clone()];
        let multi = MultiSink::new(sinks);

        multi.print("hello");

        assert_eq!(first.lines(), vec!["hello"]);
        assert_eq!(second.lines(), vec!["hello"]);
    }

    #[test]
    fn test_sink_as_trait_object() {
        let capture = Arc::new(CaptureSink::new());
        let sink: Arc<dyn LogSink> = capture.clone();
        sink.printf(format_args!("{}-{}", "a", 1));
        assert_eq!(capture.lines(), vec!["a-1"]);
    }
}
