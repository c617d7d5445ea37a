//! Text Generation for Signal Matching
//!
//! This crate wraps an OpenAI-compatible chat endpoint (Gemini by default)
//! behind the `TextGenerator` trait and builds the prompts used for match
//! reasoning and outreach email drafts.

pub mod client;
pub mod prompts;

pub use client::{ChatClient, GenerationOptions, TextGenerator};
pub use prompts::{outreach_prompt, reasoning_prompt};
