//! Submission lifecycle: session state, the controller that drives it, and
//! user-facing failure notifications

pub mod controller;
pub mod notifier;
pub mod state;

pub use controller::SubmissionController;
pub use notifier::{ConsoleNotifier, Notifier};
pub use state::{Command, SessionEvent, SessionState, SubmissionPhase};
