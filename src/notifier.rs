//! Unified logging and progress UI.
//!
//! [`Notifier`] installs `env_logger` as the global `log` backend and owns an optional
//! `indicatif` spinner, both driven by one verbosity switch:
//! - [`VerbosityLevel::Quiet`] → warnings only; `info` messages drive a spinner on stderr
//!   while the engine is queried.
//! - [`VerbosityLevel::Info`]/[`VerbosityLevel::Debug`]/[`VerbosityLevel::Trace`] → plain
//!   text logs at that level.
//!
//! `RUST_LOG` is read as the base configuration; the verbosity level overrides its
//! default filter. Rendered output never goes through the notifier.

use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn, LevelFilter};
use std::cell::RefCell;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerbosityLevel {
    Quiet = 0, // Spinner, warnings only
    Info = 1,  // Text logs at info level
    Debug = 2, // Text logs at debug level
    Trace = 3, // Text logs at trace level
}

impl From<u8> for VerbosityLevel {
    fn from(level: u8) -> Self {
        match level {
            0 => VerbosityLevel::Quiet,
            1 => VerbosityLevel::Info,
            2 => VerbosityLevel::Debug,
            _ => VerbosityLevel::Trace,
        }
    }
}

impl VerbosityLevel {
    fn to_log_level(self) -> LevelFilter {
        match self {
            VerbosityLevel::Quiet => LevelFilter::Warn,
            VerbosityLevel::Info => LevelFilter::Info,
            VerbosityLevel::Debug => LevelFilter::Debug,
            VerbosityLevel::Trace => LevelFilter::Trace,
        }
    }
}

pub struct Notifier {
    verbosity: VerbosityLevel,
    spinner: RefCell<Option<ProgressBar>>,
}

impl Notifier {
    /// Creates a notifier and installs the global logger. A logger installed earlier
    /// (for example by a test harness) is left in place.
    pub fn new(verbosity_level: u8) -> Self {
        let verbosity = VerbosityLevel::from(verbosity_level);

        let _ = env_logger::Builder::from_env(Env::default())
            .filter_level(verbosity.to_log_level())
            .try_init();

        Self {
            verbosity,
            spinner: RefCell::new(None),
        }
    }

    pub fn info(&self, message: &str) {
        match self.verbosity {
            VerbosityLevel::Quiet => {
                let mut spinner = self.spinner.borrow_mut();
                spinner
                    .get_or_insert_with(Self::new_spinner)
                    .set_message(message.to_string());
            }
            _ => info!("{}", message),
        }
    }

    pub fn debug(&self, message: &str) {
        debug!("{}", message);
    }

    /// Logs a warning; shown at every verbosity level, so any spinner is cleared first.
    pub fn warn(&self, message: &str) {
        self.finish();
        warn!("{}", message);
    }

    /// Clears the spinner, if one is showing.
    pub fn finish(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }

    fn new_spinner() -> ProgressBar {
        let style = ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        self.finish();
    }
}
