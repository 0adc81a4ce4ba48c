//! Session state and its reducer
//!
//! `SessionState` is never mutated in place. Every user action or network
//! outcome is a `SessionEvent`, and `reduce` returns the next state plus the
//! side effect (if any) the caller must perform.

use crate::analysis::AnalysisReport;
use crate::client::encoder::{encode, MultipartPayload};
use crate::input::{is_eligible, ResumeFile, SubmissionInput};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed { message: String },
}

impl SubmissionPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting)
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            SubmissionPhase::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A file was picked or dropped; `None` clears the selection.
    FileSelected(Option<ResumeFile>),
    JobDescriptionChanged(String),
    SubmitRequested,
    SubmissionSucceeded(AnalysisReport),
    SubmissionFailed(String),
    /// The user has seen the outcome; return to `Idle`.
    Acknowledged,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Send(MultipartPayload),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    input: SubmissionInput,
    phase: SubmissionPhase,
    report: Option<AnalysisReport>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &SubmissionInput {
        &self.input
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// Most recent successful report; survives later failures.
    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// Whether a submit request would actually start a submission.
    pub fn can_submit(&self) -> bool {
        !self.phase.is_submitting() && is_eligible(&self.input)
    }

    pub fn reduce(self, event: SessionEvent) -> (Self, Option<Command>) {
        match event {
            SessionEvent::FileSelected(file) => (
                Self {
                    input: SubmissionInput {
                        resume_file: file,
                        ..self.input
                    },
                    ..self
                },
                None,
            ),

            SessionEvent::JobDescriptionChanged(text) => (
                Self {
                    input: SubmissionInput {
                        job_description: text,
                        ..self.input
                    },
                    ..self
                },
                None,
            ),

            SessionEvent::SubmitRequested => {
                if !self.can_submit() {
                    return (self, None);
                }
                let payload = encode(&self.input);
                (
                    Self {
                        phase: SubmissionPhase::Submitting,
                        ..self
                    },
                    Some(Command::Send(payload)),
                )
            }

            SessionEvent::SubmissionSucceeded(report) if self.phase.is_submitting() => (
                Self {
                    phase: SubmissionPhase::Succeeded,
                    report: Some(report),
                    ..self
                },
                None,
            ),

            SessionEvent::SubmissionFailed(message) if self.phase.is_submitting() => (
                Self {
                    phase: SubmissionPhase::Failed { message },
                    ..self
                },
                None,
            ),

            // Outcomes only land while a request is in flight.
            SessionEvent::SubmissionSucceeded(_) | SessionEvent::SubmissionFailed(_) => (self, None),

            SessionEvent::Acknowledged => match self.phase {
                SubmissionPhase::Succeeded | SubmissionPhase::Failed { .. } => (
                    Self {
                        phase: SubmissionPhase::Idle,
                        ..self
                    },
                    None,
                ),
                _ => (self, None),
            },
        }
    }
}
