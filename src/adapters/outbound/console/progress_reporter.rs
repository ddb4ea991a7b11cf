use crate::ports::outbound::{LookupStage, ProgressReporter};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Style};
use std::cell::RefCell;
use std::time::Duration;

pub const NETWORK_TROUBLE_MESSAGE: &str =
    "There appears to be trouble with your network connection. Retrying...";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, drawing a spinner
/// for each network attempt on stderr so it doesn't interfere with the
/// report on stdout. Uses indicatif for the spinner and owo-colors for
/// the success/failure decorations.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
    color: bool,
}

impl StderrProgressReporter {
    pub fn new(color: bool) -> Self {
        Self {
            spinner: RefCell::new(None),
            color,
        }
    }

    fn start_spinner(&self, message: String) {
        self.clear_spinner();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(message);
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn attempt_started(&self, stage: LookupStage, subject: &str, attempt: u32) {
        let message = if attempt > 1 {
            NETWORK_TROUBLE_MESSAGE.to_string()
        } else {
            stage.describe(subject)
        };
        self.start_spinner(self.paint(&message, Style::new().bright_black()));
    }

    fn attempt_succeeded(&self, _stage: LookupStage, message: &str) {
        self.clear_spinner();
        eprintln!("{} {}", self.paint("✔", Style::new().green()), message);
    }

    fn attempt_failed(&self, _stage: LookupStage, message: &str, will_retry: bool) {
        self.clear_spinner();
        eprintln!("{} {}", self.paint("✖", Style::new().red()), message);
        if will_retry {
            eprintln!("{}", self.paint("Load fail. Retrying...", Style::new().red()));
        }
    }

    fn report(&self, message: &str) {
        eprintln!(
            "{} {}",
            self.paint("info", Style::new().cyan()),
            self.paint(message, Style::new().blue())
        );
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", self.paint(message, Style::new().red()));
    }
}
