//! Match results, email drafts and API request bodies

use serde::{Deserialize, Serialize};

use crate::Signal;

/// Note attached to every generated email draft
pub const PREVIEW_NOTE: &str = "This is a preview. Review and customize before sending.";

/// A signal whose combined score met the threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub signal: Signal,
    /// Weighted blend of semantic and keyword scores (not clamped)
    pub score: f64,
    /// Short generated justification, empty when generation is unavailable
    pub reasoning: String,
}

/// Outreach email for a chosen match
///
/// Always a draft for human review, never sent by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub to: String,
    pub body: String,
    pub preview_note: String,
}

/// Body of a match request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub startup_description: String,
}

/// Ranked matches, at most ten
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<MatchResult>,
}

/// Body of an email-draft request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRequest {
    pub startup_description: String,
    pub signal: Signal,
    pub match_score: f64,
}
