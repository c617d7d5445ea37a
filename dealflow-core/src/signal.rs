//! Government procurement signal records

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Recipient used when a signal names no stakeholders
pub const DEFAULT_RECIPIENT: &str = "City Official";

/// A government procurement opportunity
///
/// Records come from an external dataset and are often incomplete, so every
/// field tolerates being absent, `null` or of the wrong type and falls back to
/// its default. Non-string entries in `keywords` and `stakeholders` are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Category (e.g., "Transportation", "Public Safety")
    #[serde(default, deserialize_with = "lenient")]
    pub category: String,

    /// Short title of the opportunity
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,

    /// Longer description of the need
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,

    /// Budget in dollars
    #[serde(default, deserialize_with = "lenient")]
    pub budget: f64,

    /// Free-text timeline (e.g., "Q3 2025")
    #[serde(default, deserialize_with = "lenient")]
    pub timeline: String,

    /// Key requirements used for lexical matching
    #[serde(default, deserialize_with = "lenient_strings")]
    pub keywords: Vec<String>,

    /// People or offices involved, first entry is the outreach contact
    #[serde(default, deserialize_with = "lenient_strings")]
    pub stakeholders: Vec<String>,

    /// Embedding shipped with the dataset, if any
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub embedding: Option<Vec<f32>>,
}

impl Signal {
    /// Text sent to the embedding provider for this signal
    pub fn embedding_text(&self) -> String {
        format!("{} {} {}", self.category, self.title, self.description)
    }

    /// Precomputed embedding from the dataset, ignoring empty vectors
    pub fn precomputed_embedding(&self) -> Option<&[f32]> {
        self.embedding
            .as_deref()
            .filter(|embedding| !embedding.is_empty())
    }

    /// Outreach recipient: the first stakeholder, or a generic placeholder
    pub fn primary_stakeholder(&self) -> &str {
        self.stakeholders
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_RECIPIENT)
    }
}

/// Any value that does not fit `T` (including `null`) becomes `T::default()`
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Keeps the string entries of an array; anything else is an empty list
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let strings = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(strings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_signal() {
        let json = r#"
        {
            "category": "Transportation",
            "title": "Smart Traffic Signals",
            "description": "Adaptive signal timing for downtown corridors",
            "budget": 1250000,
            "timeline": "Q2 2025",
            "keywords": ["traffic", "AI"],
            "stakeholders": ["Director of Transportation", "City Council"]
        }
        "#;

        let signal: Signal = serde_json::from_str(json).unwrap();
        assert_eq!(signal.category, "Transportation");
        assert_eq!(signal.budget, 1_250_000.0);
        assert_eq!(signal.keywords, vec!["traffic", "AI"]);
        assert_eq!(signal.primary_stakeholder(), "Director of Transportation");
        assert!(signal.embedding.is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let signal: Signal = serde_json::from_str(r#"{"title": "Permits"}"#).unwrap();
        assert_eq!(signal.title, "Permits");
        assert_eq!(signal.budget, 0.0);
        assert!(signal.keywords.is_empty());
        assert!(signal.stakeholders.is_empty());
    }

    #[test]
    fn test_null_fields_default() {
        let json = r#"{"title": null, "budget": null, "keywords": null, "stakeholders": null}"#;
        let signal: Signal = serde_json::from_str(json).unwrap();
        assert_eq!(signal.title, "");
        assert_eq!(signal.budget, 0.0);
        assert!(signal.keywords.is_empty());
    }

    #[test]
    fn test_wrong_typed_fields_default() {
        let json =
            r#"{"title": "Permits", "budget": "TBD", "timeline": 2025, "embedding": "none"}"#;
        let signal: Signal = serde_json::from_str(json).unwrap();
        assert_eq!(signal.title, "Permits");
        assert_eq!(signal.budget, 0.0);
        assert_eq!(signal.timeline, "");
        assert!(signal.embedding.is_none());
    }

    #[test]
    fn test_non_string_list_entries_dropped() {
        let json = r#"{"keywords": ["AI", null, 3, "permits"], "stakeholders": "Mayor"}"#;
        let signal: Signal = serde_json::from_str(json).unwrap();
        assert_eq!(signal.keywords, vec!["AI", "permits"]);
        assert!(signal.stakeholders.is_empty());
    }

    #[test]
    fn test_primary_stakeholder_fallback() {
        let signal = Signal::default();
        assert_eq!(signal.primary_stakeholder(), DEFAULT_RECIPIENT);
    }

    #[test]
    fn test_embedding_text() {
        let signal = Signal {
            category: "Health".to_string(),
            title: "Clinic Scheduling".to_string(),
            description: "Online booking".to_string(),
            ..Signal::default()
        };
        assert_eq!(signal.embedding_text(), "Health Clinic Scheduling Online booking");
    }

    #[test]
    fn test_empty_precomputed_embedding_ignored() {
        let signal = Signal {
            embedding: Some(vec![]),
            ..Signal::default()
        };
        assert!(signal.precomputed_embedding().is_none());

        let signal = Signal {
            embedding: Some(vec![0.5, 0.5]),
            ..Signal::default()
        };
        assert_eq!(signal.precomputed_embedding(), Some(&[0.5, 0.5][..]));
    }
}
