//! Core types for the DealFlow signal matcher
//!
//! This crate defines the shared data structures used across the workspace:
//! government procurement signals, match results, outreach email drafts and
//! the request/response bodies exchanged with the API.

pub mod error;
pub mod matching;
pub mod signal;

pub use error::{DealflowError, DealflowResult, API_KEY_VAR};
pub use matching::{
    EmailDraft, EmailRequest, MatchRequest, MatchResponse, MatchResult, PREVIEW_NOTE,
};
pub use signal::{Signal, DEFAULT_RECIPIENT};
