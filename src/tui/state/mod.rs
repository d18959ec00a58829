//! State for the feedback console.
//!
//! Both components are pure state machines: they never perform I/O and are
//! driven entirely through method calls from the application model.

mod dashboard;
mod filter_state;
mod submission_flow;

pub use dashboard::{
    Dashboard, REFRESH_INTERVAL, RefreshOutcome, RefreshRequest, RefreshTrigger,
};
pub use filter_state::{CursorState, SubmissionFilter};
pub use submission_flow::{
    MAX_REVIEW_CHARS, RESET_DELAY, ReviewDraft, SUBMIT_FALLBACK_MESSAGE, SubmissionFlow,
    SubmissionPhase, SubmitOutcome, ValidationError,
};
