//! cliclack-backed prompter and reporter

use crate::prompt::{normalize_answer, Prompter};
use crate::report::{Level, Reporter};
use cliclack::ProgressBar;
use std::io;
use std::sync::Mutex;

/// Inline text prompts with the default pre-filled
#[derive(Debug, Clone, Copy, Default)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        let input: String = cliclack::input(question)
            .placeholder(default)
            .default_input(default)
            .required(false)
            .interact()?;

        Ok(normalize_answer(&input, default))
    }
}

/// Status messages rendered as cliclack log lines
///
/// A progress message spins until the next message arrives or the run ends.
#[derive(Default)]
pub struct ClackReporter {
    active: Mutex<Option<(ProgressBar, String)>>,
}

impl ClackReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settle a still-running spinner, marking it failed when the run failed
    pub fn finish(&self, succeeded: bool) {
        if let Some((spinner, message)) = self.take_active() {
            if succeeded {
                spinner.stop(message);
            } else {
                spinner.error(message);
            }
        }
    }

    fn take_active(&self) -> Option<(ProgressBar, String)> {
        self.active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl Reporter for ClackReporter {
    fn report(&self, level: Level, message: &str) {
        if let Some((spinner, previous)) = self.take_active() {
            spinner.stop(previous);
        }

        let _ = match level {
            Level::Progress => {
                let spinner = cliclack::spinner();
                spinner.start(message);
                *self
                    .active
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner()) =
                    Some((spinner, message.to_string()));
                Ok(())
            }
            Level::Info => cliclack::log::info(message),
            Level::Step => cliclack::log::step(message),
            Level::Success => cliclack::log::success(message),
            Level::Warning => cliclack::log::warning(message),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_active(reporter: &ClackReporter) -> bool {
        reporter.active.lock().unwrap().is_some()
    }

    #[test]
    fn test_next_message_settles_progress_spinner() {
        let reporter = ClackReporter::new();

        reporter.progress("Downloading React wrapper files...");
        assert!(has_active(&reporter));

        reporter.success("Downloaded react-wrapper.js");
        assert!(!has_active(&reporter));
    }

    #[test]
    fn test_finish_settles_pending_spinner() {
        let reporter = ClackReporter::new();

        reporter.progress("Creating project structure...");
        reporter.finish(false);
        assert!(!has_active(&reporter));

        // Nothing pending is a no-op
        reporter.finish(true);
        assert!(!has_active(&reporter));
    }
}
