//! User-visible failure notifications

use colored::Colorize;

/// Tells the user a submission failed. Separate from logging: a failure is
/// always shown, whatever the log level.
pub trait Notifier {
    fn notify_failure(&self, message: &str);
}

/// Writes failures to stderr.
pub struct ConsoleNotifier {
    use_colors: bool,
}

impl ConsoleNotifier {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn format_failure(&self, message: &str) -> String {
        if self.use_colors {
            format!("{} {}", "❌".red().bold(), message.red())
        } else {
            format!("[!] {}", message)
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify_failure(&self, message: &str) {
        eprintln!("{}", self.format_failure(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_failure_format() {
        let notifier = ConsoleNotifier::new(false);
        assert_eq!(notifier.format_failure("too large"), "[!] too large");
    }
}
