//! FAQ assistant core.
//!
//! This crate owns the question/answer lifecycle and how its result is
//! presented:
//! - `controller`: the query lifecycle state machine
//! - `citations`: deduplication and ordering of source URLs
//! - `examples`: canned example questions
//! - `view`: plain-text rendering of controller state

pub mod citations;
pub mod controller;
pub mod examples;
pub mod view;

pub use citations::rank;
pub use controller::{
    is_valid_question, ExchangeToken, PendingExchange, QueryController, RequestStatus,
    SubmitOutcome, DEFAULT_HEADING, MIN_QUESTION_CHARS, NON_FACTUAL_HEADING,
    TRANSPORT_ERROR_FALLBACK,
};
pub use examples::{example, EXAMPLE_QUESTIONS};
pub use view::render;
