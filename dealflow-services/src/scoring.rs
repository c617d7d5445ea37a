//! Keyword overlap and score blending
//!
//! Tokenization is lower-case plus whitespace split only. No stemming,
//! punctuation stripping or stop words, so "AI," and "ai" are different tokens.

use std::collections::HashSet;

/// Fraction of the signal's keyword tokens that appear in the description
///
/// Keywords are joined with spaces before tokenizing, so multi-word keywords
/// contribute each of their words. Returns 0.0 when there are no keyword tokens.
pub fn keyword_overlap(description: &str, keywords: &[String]) -> f64 {
    let description = description.to_lowercase();
    let description_words: HashSet<&str> = description.split_whitespace().collect();

    let joined = keywords.join(" ").to_lowercase();
    let keyword_words: HashSet<&str> = joined.split_whitespace().collect();

    if keyword_words.is_empty() {
        return 0.0;
    }

    let matches = keyword_words
        .iter()
        .filter(|word| description_words.contains(*word))
        .count();

    matches as f64 / keyword_words.len() as f64
}

/// Weights for blending semantic and keyword scores
///
/// The weights are not required to sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub semantic: f64,
    pub keyword: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            semantic: 0.7,
            keyword: 0.3,
        }
    }
}

impl ScoreWeights {
    /// Weighted sum of the two scores, without clamping
    pub fn combine(&self, semantic: f64, keyword: f64) -> f64 {
        semantic * self.semantic + keyword * self.keyword
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_overlap_no_keywords() {
        assert_eq!(keyword_overlap("anything at all", &[]), 0.0);
        assert_eq!(keyword_overlap("anything", &keywords(&["", "   "])), 0.0);
    }

    #[test]
    fn test_overlap_full_match() {
        let score = keyword_overlap(
            "We build an AI procurement assistant",
            &keywords(&["AI", "procurement"]),
        );
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_overlap_partial_match() {
        let score = keyword_overlap(
            "traffic analytics platform",
            &keywords(&["traffic", "signals", "congestion", "analytics"]),
        );
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_overlap_case_and_order_insensitive() {
        let a = keyword_overlap("Foo Bar", &keywords(&["bar", "foo"]));
        let b = keyword_overlap("foo bar", &keywords(&["foo bar"]));
        assert_eq!(a, b);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_overlap_counts_unique_keyword_tokens() {
        // "smart" appears twice across keywords but is one token
        let score = keyword_overlap(
            "smart city",
            &keywords(&["smart parking", "smart lighting"]),
        );
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_keeps_punctuation() {
        let score = keyword_overlap("we do AI, and more", &keywords(&["ai"]));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_overlap_bounded() {
        let kws = keywords(&["permits", "zoning", "inspections"]);
        let descriptions = [
            "",
            "permits",
            "permits zoning inspections extra words",
            "PERMITS permits",
        ];
        for description in descriptions {
            let score = keyword_overlap(description, &kws);
            assert!((0.0..=1.0).contains(&score), "{description:?} gave {score}");
        }
    }

    #[test]
    fn test_combine_defaults() {
        let weights = ScoreWeights::default();
        assert!((weights.combine(1.0, 1.0) - 1.0).abs() < 1e-9);
        assert_eq!(weights.combine(0.0, 0.0), 0.0);
        assert!((weights.combine(0.5, 1.0) - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_combine_not_clamped() {
        let weights = ScoreWeights::default();
        assert!(weights.combine(-1.0, 0.0) < 0.0);

        let heavy = ScoreWeights {
            semantic: 1.0,
            keyword: 1.0,
        };
        assert_eq!(heavy.combine(1.0, 1.0), 2.0);
    }
}
