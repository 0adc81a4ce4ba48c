//! Drives one submission at a time against an `AnalysisBackend`

use crate::analysis::{interpret_response, AnalysisReport};
use crate::client::api::AnalysisBackend;
use crate::error::SubmissionError;
use crate::input::ResumeFile;
use crate::submission::notifier::Notifier;
use crate::submission::state::{Command, SessionEvent, SessionState, SubmissionPhase};
use log::{debug, error, info};

pub struct SubmissionController<B, N> {
    backend: B,
    notifier: N,
    state: SessionState,
}

impl<B, N> SubmissionController<B, N>
where
    B: AnalysisBackend,
    N: Notifier,
{
    pub fn new(backend: B, notifier: N) -> Self {
        Self {
            backend,
            notifier,
            state: SessionState::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> &SubmissionPhase {
        self.state.phase()
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.state.report()
    }

    /// Mirrors the guard `submit` enforces, for enabling a submit affordance.
    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Single entry point for both file picks and drag-and-drop.
    pub fn on_file_selected(&mut self, file: Option<ResumeFile>) {
        self.dispatch(SessionEvent::FileSelected(file));
    }

    pub fn on_job_description_changed(&mut self, text: impl Into<String>) {
        self.dispatch(SessionEvent::JobDescriptionChanged(text.into()));
    }

    pub fn acknowledge(&mut self) {
        self.dispatch(SessionEvent::Acknowledged);
    }

    /// Replace the state with the reducer's output.
    fn dispatch(&mut self, event: SessionEvent) -> Option<Command> {
        let current = std::mem::take(&mut self.state);
        let (next, command) = current.reduce(event);
        self.state = next;
        command
    }

    /// Run a submission to completion. Ineligible or overlapping requests are
    /// ignored and leave the phase unchanged.
    pub async fn submit(&mut self) -> &SubmissionPhase {
        let payload = match self.dispatch(SessionEvent::SubmitRequested) {
            Some(Command::Send(payload)) => payload,
            None => {
                debug!("Submit ignored in phase {:?}", self.state.phase());
                return self.state.phase();
            }
        };

        if let Some(file) = &self.state.input().resume_file {
            info!("Starting resume analysis for {}", file.file_name);
        }
        info!(
            "Job description length: {} characters",
            self.state.input().job_description.len()
        );

        let outcome = match self.backend.send(payload).await {
            Ok(raw) => interpret_response(raw.status, &raw.body),
            Err(err) => Err(err),
        };

        self.complete(outcome)
    }

    /// Record the outcome of the in-flight request. Without one the outcome
    /// is dropped and nothing is notified.
    fn complete(&mut self, outcome: Result<AnalysisReport, SubmissionError>) -> &SubmissionPhase {
        if !self.state.phase().is_submitting() {
            debug!("Dropping outcome with no request in flight");
            return self.state.phase();
        }

        match outcome {
            Ok(report) => {
                info!("Analysis completed successfully (score {})", report.match_score);
                self.dispatch(SessionEvent::SubmissionSucceeded(report));
            }
            Err(err) => {
                error!("Error analyzing resume: {}", err);
                let message = err.user_message();
                self.notifier.notify_failure(&message);
                self.dispatch(SessionEvent::SubmissionFailed(message));
            }
        }
        self.state.phase()
    }
}
