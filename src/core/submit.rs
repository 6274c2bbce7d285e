use serde::Deserialize;
use thiserror::Error;

/// How a dispatched submission is judged.
///
/// `Optimistic` sends an opaque request and treats any completed dispatch
/// as success; the endpoint's own verdict is never visible. `ResponseConfirmed`
/// sends a CORS request and requires a 2xx status, which the endpoint must
/// allow. That request is kept "simple" (no preflight) so script endpoints
/// that never answer `OPTIONS` still work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPolicy {
    #[default]
    Optimistic,
    ResponseConfirmed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportMode {
    NoCors,
    Cors,
}

impl SubmissionPolicy {
    #[inline]
    pub fn transport_mode(&self) -> TransportMode {
        match self {
            SubmissionPolicy::Optimistic => TransportMode::NoCors,
            SubmissionPolicy::ResponseConfirmed => TransportMode::Cors,
        }
    }
}

impl TransportMode {
    /// `Content-Type` for the JSON body. A CORS request with
    /// `application/json` would be preflighted, so it goes out as plain text.
    #[inline]
    pub fn content_type(&self) -> &'static str {
        match self {
            TransportMode::NoCors => "application/json",
            TransportMode::Cors => "text/plain;charset=utf-8",
        }
    }
}

/// What the transport handed back for a completed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Opaque response: status and body are unreadable.
    Opaque,
    Status(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request left the page; the endpoint's verdict is unknown.
    Dispatched,
    Confirmed(u16),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("endpoint rejected the submission (status {0})")]
    Rejected(u16),
    #[error("endpoint response could not be read")]
    Unconfirmed,
    #[error("could not encode submission: {0}")]
    Encode(String),
}

pub fn interpret(
    policy: SubmissionPolicy,
    dispatch: Result<Dispatch, String>,
) -> Result<SubmitOutcome, SubmitError> {
    let dispatch = dispatch.map_err(SubmitError::Transport)?;
    match policy {
        SubmissionPolicy::Optimistic => Ok(SubmitOutcome::Dispatched),
        SubmissionPolicy::ResponseConfirmed => match dispatch {
            Dispatch::Status(code) if (200..300).contains(&code) => {
                Ok(SubmitOutcome::Confirmed(code))
            }
            Dispatch::Status(code) => Err(SubmitError::Rejected(code)),
            Dispatch::Opaque => Err(SubmitError::Unconfirmed),
        },
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded(SubmitOutcome),
    Failed(SubmitError),
}

/// Submission lifecycle for one form instance.
#[derive(Debug, Default)]
pub struct SubmitFlow {
    phase: SubmitPhase,
}

impl SubmitFlow {
    #[inline]
    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Refuses while a submission is in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        true
    }

    pub fn finish(&mut self, result: Result<SubmitOutcome, SubmitError>) {
        self.phase = match result {
            Ok(outcome) => SubmitPhase::Succeeded(outcome),
            Err(e) => SubmitPhase::Failed(e),
        };
    }

    pub fn reset(&mut self) {
        self.phase = SubmitPhase::Idle;
    }
}
