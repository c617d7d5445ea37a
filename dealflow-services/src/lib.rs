//! Matching and outreach services for the DealFlow signal matcher
//!
//! This crate provides the service layer: keyword scoring, score blending,
//! the signal matcher that ranks opportunities for a startup, and the
//! generation-backed reasoning and outreach drafting around it.

pub mod matcher;
pub mod outreach;
pub mod reasoning;
pub mod scoring;
pub mod signal_repository;

#[cfg(test)]
mod testing;

pub use matcher::{MatchingConfig, SignalMatcher, MAX_MATCHES};
pub use outreach::OutreachDrafter;
pub use reasoning::MatchExplainer;
pub use scoring::{keyword_overlap, ScoreWeights};
pub use signal_repository::SignalRepository;
