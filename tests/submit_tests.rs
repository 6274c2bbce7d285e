// Host-side tests for submission policy and lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod submit {
        include!("../src/core/submit.rs");
    }
}

use crate::core::submit::*;

#[test]
fn optimistic_accepts_any_completed_dispatch() {
    let p = SubmissionPolicy::Optimistic;
    assert_eq!(p.transport_mode(), TransportMode::NoCors);
    assert_eq!(interpret(p, Ok(Dispatch::Opaque)), Ok(SubmitOutcome::Dispatched));
    // a rejection the page can see is still indistinguishable under this policy
    assert_eq!(interpret(p, Ok(Dispatch::Status(500))), Ok(SubmitOutcome::Dispatched));
}

#[test]
fn response_confirmed_requires_2xx() {
    let p = SubmissionPolicy::ResponseConfirmed;
    assert_eq!(p.transport_mode(), TransportMode::Cors);
    assert_eq!(interpret(p, Ok(Dispatch::Status(200))), Ok(SubmitOutcome::Confirmed(200)));
    assert_eq!(interpret(p, Ok(Dispatch::Status(204))), Ok(SubmitOutcome::Confirmed(204)));
    assert_eq!(interpret(p, Ok(Dispatch::Status(302))), Err(SubmitError::Rejected(302)));
    assert_eq!(interpret(p, Ok(Dispatch::Status(403))), Err(SubmitError::Rejected(403)));
    assert_eq!(interpret(p, Ok(Dispatch::Opaque)), Err(SubmitError::Unconfirmed));
}

#[test]
fn transport_failure_fails_under_every_policy() {
    for p in [SubmissionPolicy::Optimistic, SubmissionPolicy::ResponseConfirmed] {
        assert_eq!(
            interpret(p, Err("TypeError: Failed to fetch".into())),
            Err(SubmitError::Transport("TypeError: Failed to fetch".into()))
        );
    }
}

#[test]
fn policy_deserializes_from_snake_case() {
    let p: SubmissionPolicy = serde_json::from_str(r#""response_confirmed""#).unwrap();
    assert_eq!(p, SubmissionPolicy::ResponseConfirmed);
    let p: SubmissionPolicy = serde_json::from_str(r#""optimistic""#).unwrap();
    assert_eq!(p, SubmissionPolicy::Optimistic);
    assert!(serde_json::from_str::<SubmissionPolicy>(r#""eventually""#).is_err());
    assert_eq!(SubmissionPolicy::default(), SubmissionPolicy::Optimistic);
}

#[test]
fn flow_refuses_double_submission() {
    let mut flow = SubmitFlow::default();
    assert_eq!(flow.phase(), &SubmitPhase::Idle);
    assert!(flow.begin());
    assert!(flow.is_busy());
    assert!(!flow.begin());
    flow.finish(Ok(SubmitOutcome::Dispatched));
    assert_eq!(flow.phase(), &SubmitPhase::Succeeded(SubmitOutcome::Dispatched));
    assert!(!flow.is_busy());
    // a new brief can be sent after the previous one settled
    assert!(flow.begin());
}

#[test]
fn flow_records_failures() {
    let mut flow = SubmitFlow::default();
    flow.begin();
    flow.finish(Err(SubmitError::Transport("offline".into())));
    assert_eq!(
        flow.phase(),
        &SubmitPhase::Failed(SubmitError::Transport("offline".into()))
    );
    flow.reset();
    assert_eq!(flow.phase(), &SubmitPhase::Idle);
}

#[test]
fn errors_render_for_logs() {
    assert_eq!(
        SubmitError::Rejected(500).to_string(),
        "endpoint rejected the submission (status 500)"
    );
    assert_eq!(
        SubmitError::Transport("offline".into()).to_string(),
        "transport failure: offline"
    );
}

#[test]
fn confirmed_requests_avoid_a_preflight() {
    // only CORS-safelisted content types skip the OPTIONS round trip
    let cors = SubmissionPolicy::ResponseConfirmed.transport_mode();
    assert!(cors.content_type().starts_with("text/plain"));
    assert_eq!(
        SubmissionPolicy::Optimistic.transport_mode().content_type(),
        "application/json"
    );
}
