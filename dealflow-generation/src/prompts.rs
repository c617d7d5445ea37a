//! Prompt builders for match reasoning and outreach drafts

use dealflow_core::Signal;

/// Prompt asking for a two-sentence justification of a match
pub fn reasoning_prompt(description: &str, signal: &Signal, score: f64) -> String {
    format!(
        r#"You are an expert at matching GovTech startups to government procurement opportunities.

STARTUP:
{}

GOVERNMENT SIGNAL:
- Category: {}
- Title: {}
- Description: {}
- Budget: {}
- Key Requirements: {}

Match Score: {}

Task: Write exactly 2 sentences explaining why this startup matches this opportunity.

Requirements:
- Sentence 1: State the specific startup capability that addresses the government need
- Sentence 2: Mention the budget, timeline, or a stakeholder to show you understand the context
- Be concrete and specific
- No fluff or generic statements
- Maximum 50 words total
"#,
        description,
        signal.category,
        signal.title,
        signal.description,
        format_budget(signal.budget),
        signal.keywords.join(", "),
        format_score(score),
    )
}

/// Prompt asking for a three-paragraph outreach email
pub fn outreach_prompt(description: &str, signal: &Signal, score: f64) -> String {
    format!(
        r#"Write a professional outreach email from a startup to a government contact.

FROM (Startup):
{}

TO (Government Contact):
{}

REGARDING (Opportunity):
- Title: {}
- Description: {}
- Budget: {}
- Timeline: {}
- Match Score: {}%

TASK: Write a concise 3-paragraph email:

Paragraph 1 (Introduction):
- Reference the specific government initiative
- Explain why you're reaching out
- Mention how you learned about this (council minutes, strategic plan, etc.)

Paragraph 2 (Value Proposition):
- Highlight 2-3 specific capabilities that address their needs
- Use concrete metrics if available
- Show you understand their requirements

Paragraph 3 (Call to Action):
- Request a 30-minute introductory call
- Suggest next steps
- Provide availability

REQUIREMENTS:
- Professional but not stiff
- Specific, not generic
- Under 200 words
- No marketing fluff
- Include actual contact info (their email address)
"#,
        description,
        signal.primary_stakeholder(),
        signal.title,
        signal.description,
        format_budget(signal.budget),
        signal.timeline,
        score,
    )
}

/// Format a budget as whole dollars with thousands separators
fn format_budget(budget: f64) -> String {
    let dollars = budget.round().abs() as u64;
    let digits = dollars.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if budget.round() < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a 0-1 score as a whole percentage
fn format_score(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traffic_signal() -> Signal {
        Signal {
            category: "Transportation".to_string(),
            title: "Smart Traffic Signals".to_string(),
            description: "Adaptive timing downtown".to_string(),
            budget: 1_250_000.0,
            timeline: "Q3 2025".to_string(),
            keywords: vec!["traffic".to_string(), "AI".to_string()],
            stakeholders: vec!["Director of Transportation".to_string()],
            embedding: None,
        }
    }

    #[test]
    fn test_format_budget() {
        assert_eq!(format_budget(0.0), "$0");
        assert_eq!(format_budget(950.0), "$950");
        assert_eq!(format_budget(1_000.0), "$1,000");
        assert_eq!(format_budget(1_250_000.0), "$1,250,000");
        assert_eq!(format_budget(-5_000.0), "-$5,000");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.734), "73%");
        assert_eq!(format_score(1.0), "100%");
    }

    #[test]
    fn test_reasoning_prompt_includes_signal() {
        let prompt = reasoning_prompt("We build traffic AI", &traffic_signal(), 0.81);
        assert!(prompt.contains("We build traffic AI"));
        assert!(prompt.contains("- Budget: $1,250,000"));
        assert!(prompt.contains("- Key Requirements: traffic, AI"));
        assert!(prompt.contains("Match Score: 81%"));
        assert!(prompt.contains("Maximum 50 words total"));
    }

    #[test]
    fn test_outreach_prompt_addresses_stakeholder() {
        let prompt = outreach_prompt("We build traffic AI", &traffic_signal(), 81.0);
        assert!(prompt.contains("TO (Government Contact):\nDirector of Transportation"));
        assert!(prompt.contains("- Timeline: Q3 2025"));
        assert!(prompt.contains("Under 200 words"));
    }

    #[test]
    fn test_outreach_prompt_without_stakeholders() {
        let signal = Signal {
            stakeholders: vec![],
            ..traffic_signal()
        };
        let prompt = outreach_prompt("We build traffic AI", &signal, 81.0);
        assert!(prompt.contains("TO (Government Contact):\nCity Official"));
    }
}
