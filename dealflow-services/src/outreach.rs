//! Outreach email drafting

use std::sync::Arc;

use dealflow_core::{DealflowError, DealflowResult, EmailDraft, Signal, PREVIEW_NOTE};
use dealflow_generation::{outreach_prompt, GenerationOptions, TextGenerator};
use tracing::{info, instrument};

/// Drafts an outreach email to a signal's primary stakeholder
///
/// Unlike match reasoning this requires a configured generator: a draft
/// without generated content is useless, so a missing credential is an error.
#[derive(Clone)]
pub struct OutreachDrafter {
    generator: Arc<dyn TextGenerator>,
    options: GenerationOptions,
}

impl OutreachDrafter {
    pub fn new(generator: Arc<dyn TextGenerator>, options: GenerationOptions) -> Self {
        Self { generator, options }
    }

    #[instrument(skip(self, description, signal), fields(title = %signal.title))]
    pub async fn draft(
        &self,
        description: &str,
        signal: &Signal,
        match_score: f64,
    ) -> DealflowResult<EmailDraft> {
        if !self.generator.is_configured() {
            return Err(DealflowError::missing_credential());
        }

        let prompt = outreach_prompt(description, signal, match_score);
        let body = self.generator.generate(&prompt, self.options).await?;

        let to = signal.primary_stakeholder().to_string();
        info!("Drafted outreach email to {}", to);

        Ok(EmailDraft {
            subject: subject_line(signal),
            to,
            body,
            preview_note: PREVIEW_NOTE.to_string(),
        })
    }
}

fn subject_line(signal: &Signal) -> String {
    let title = if signal.title.is_empty() {
        "Opportunity"
    } else {
        signal.title.as_str()
    };
    format!("Re: {} - Partnership Opportunity", title)
}
