//! Progress reporting for the provisioning pipeline
//!
//! The pipeline never prints directly; it hands leveled messages to a
//! [`Reporter`]. The CLI picks a console or cliclack sink, tests use
//! [`RecordingReporter`].

use colored::Colorize;
use std::sync::Mutex;

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    /// Long-running work begins (directory setup, downloads)
    Progress,
    Step,
    Success,
    Warning,
}

/// Sink for status messages
pub trait Reporter {
    fn report(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.report(Level::Info, message);
    }

    fn progress(&self, message: &str) {
        self.report(Level::Progress, message);
    }

    fn step(&self, message: &str) {
        self.report(Level::Step, message);
    }

    fn success(&self, message: &str) {
        self.report(Level::Success, message);
    }

    fn warning(&self, message: &str) {
        self.report(Level::Warning, message);
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, level: Level, message: &str) {
        (**self).report(level, message);
    }
}

/// Colored line output on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        match level {
            Level::Info | Level::Progress => println!("{}", message.cyan()),
            Level::Step => println!("{}", message),
            Level::Success => println!("{}", message.green()),
            Level::Warning => println!("{}", message.yellow()),
        }
    }
}

/// Keeps every message in order, for assertions
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Messages recorded at the given level
    pub fn at(&self, level: Level) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, level: Level, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((level, message.to_string()));
    }
}
