//! Behavioural tests for the feedback submission flow.

#[path = "submission_flow_bdd/mod.rs"]
mod submission_flow_bdd_support;
mod support;

use std::sync::Arc;
use std::time::Duration;

use feedback_console::ApiError;
use feedback_console::api::InMemoryFeedbackGateway;
use feedback_console::tui::Route;
use feedback_console::tui::state::SubmissionPhase;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use submission_flow_bdd_support::FormState;
use support::console::{StepResult, drive, elapse, open_console, press_named};

#[fixture]
fn form_state() -> FormState {
    FormState::default()
}

// Given steps

#[given("a feedback backend replying {reply}")]
fn given_backend_replying(form_state: &FormState, reply: String) {
    let gateway = InMemoryFeedbackGateway::with_reply(reply.trim_matches('"'));
    form_state.gateway.set(Arc::new(gateway));
}

#[given("the backend rejects the next submission with {detail}")]
fn given_backend_rejects(form_state: &FormState, detail: String) -> StepResult {
    let gateway = form_state.gateway.get().ok_or("gateway must be initialised")?;
    gateway.fail_next_submit(ApiError::Request {
        status: 422,
        detail: Some(detail.trim_matches('"').to_owned()),
    });
    Ok(())
}

#[given("the console is open on the feedback form")]
fn given_console_on_form(form_state: &FormState) -> StepResult {
    open_console(
        &form_state.runtime,
        &form_state.gateway,
        &form_state.telemetry,
        &form_state.driver,
        Route::Feedback,
    )
}

// When steps

#[when("the user types {text}")]
fn when_user_types(form_state: &FormState, text: String) -> StepResult {
    drive(&form_state.runtime, &form_state.driver, |driver| {
        driver.type_text(text.trim_matches('"'));
    })
}

#[when("the user presses {key}")]
fn when_user_presses(form_state: &FormState, key: String) -> StepResult {
    press_named(&form_state.runtime, &form_state.driver, &key)
}

#[when("{seconds:u64} seconds elapse")]
fn when_seconds_elapse(form_state: &FormState, seconds: u64) -> StepResult {
    elapse(
        &form_state.runtime,
        &form_state.driver,
        Duration::from_secs(seconds),
    )
}

// Then steps

#[then("the form shows the reply {reply}")]
fn then_form_shows_reply(form_state: &FormState, reply: String) -> StepResult {
    let phase = form_state.phase().ok_or("console must be open")?;
    let expected = SubmissionPhase::Success {
        response: reply.trim_matches('"').to_owned(),
    };
    if phase != expected {
        return Err(format!("expected {expected:?}, got {phase:?}").into());
    }
    Ok(())
}

#[then("the form shows the error {message}")]
fn then_form_shows_error(form_state: &FormState, message: String) -> StepResult {
    let phase = form_state.phase().ok_or("console must be open")?;
    let expected = SubmissionPhase::Error {
        message: message.trim_matches('"').to_owned(),
    };
    if phase != expected {
        return Err(format!("expected {expected:?}, got {phase:?}").into());
    }
    Ok(())
}

#[then("the form is idle")]
fn then_form_is_idle(form_state: &FormState) -> StepResult {
    let phase = form_state.phase().ok_or("console must be open")?;
    if phase != SubmissionPhase::Idle {
        return Err(format!("expected the form to be idle, got {phase:?}").into());
    }
    Ok(())
}

#[then("the review box is empty")]
fn then_review_box_empty(form_state: &FormState) -> StepResult {
    let review = form_state.review().ok_or("console must be open")?;
    if !review.is_empty() {
        return Err(format!("expected an empty review, got '{review}'").into());
    }
    Ok(())
}

#[then("the review box contains {text}")]
fn then_review_box_contains(form_state: &FormState, text: String) -> StepResult {
    let review = form_state.review().ok_or("console must be open")?;
    let expected = text.trim_matches('"');
    if review != expected {
        return Err(format!("expected review '{expected}', got '{review}'").into());
    }
    Ok(())
}

#[then("the backend submit call count is {count:usize}")]
fn then_submit_call_count(form_state: &FormState, count: usize) -> StepResult {
    let gateway = form_state.gateway.get().ok_or("gateway must be initialised")?;
    assert_eq!(gateway.submit_calls(), count, "submit call count mismatch");
    Ok(())
}

#[then("the dashboard reports {total:u64} total submissions")]
fn then_dashboard_total(form_state: &FormState, total: u64) -> StepResult {
    let reported = form_state
        .driver
        .with_ref(|driver| {
            driver
                .app()
                .dashboard()
                .and_then(|dashboard| dashboard.stats())
                .map(|stats| stats.total_submissions)
        })
        .ok_or("console must be open")?;
    assert_eq!(reported, Some(total), "total submissions mismatch");
    Ok(())
}

#[then("the first row reads {text}")]
fn then_first_row_reads(form_state: &FormState, text: String) -> StepResult {
    let first = form_state
        .driver
        .with_ref(|driver| {
            driver
                .app()
                .dashboard()
                .and_then(|dashboard| dashboard.submissions().first())
                .map(|submission| submission.review.clone())
        })
        .ok_or("console must be open")?;
    assert_eq!(first.as_deref(), Some(text.trim_matches('"')));
    Ok(())
}

// Scenario bindings

#[scenario(path = "tests/features/submission_flow.feature", index = 0)]
fn successful_submission_resets(form_state: FormState) {
    let _ = form_state;
}

#[scenario(path = "tests/features/submission_flow.feature", index = 1)]
fn blank_review_is_rejected(form_state: FormState) {
    let _ = form_state;
}

#[scenario(path = "tests/features/submission_flow.feature", index = 2)]
fn rejected_submission_shows_detail(form_state: FormState) {
    let _ = form_state;
}

#[scenario(path = "tests/features/submission_flow.feature", index = 3)]
fn second_submission_postpones_reset(form_state: FormState) {
    let _ = form_state;
}

#[scenario(path = "tests/features/submission_flow.feature", index = 4)]
fn new_submission_is_listed_first(form_state: FormState) {
    let _ = form_state;
}
