use serde::{Serialize, Deserialize};
use log::debug;
use std::collections::HashSet;

use super::normalizer::normalize;
use crate::settings;

/// Similarity score at or above which two answers count as "the same answer".
/// Subject to product calibration; override via `PAIRMATE_MATCH_THRESHOLD`.
pub const MATCH_THRESHOLD: f64 = 0.6;
/// Blend weight for the word-set Jaccard signal.
pub const TOKEN_OVERLAP_WEIGHT: f64 = 0.5;
/// Blend weight for the normalized Levenshtein signal.
pub const EDIT_PROXIMITY_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Similarity {
    pub score: f64, // in [0, 1]
    pub is_match: bool,
}

/// Free-text answer comparator. Token overlap rewards the same words in a
/// different order ("pizza night" vs "night, pizza"); edit proximity rewards
/// near-identical short answers with typos. Both signals alone are too
/// brittle across short single-word answers and longer phrases.
#[derive(Debug, Clone)]
pub struct Matcher {
    match_threshold: f64,
    token_overlap_weight: f64,
    edit_proximity_weight: f64,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            match_threshold: MATCH_THRESHOLD,
            token_overlap_weight: TOKEN_OVERLAP_WEIGHT,
            edit_proximity_weight: EDIT_PROXIMITY_WEIGHT,
        }
    }
}

impl Matcher {
    /// Matcher using the process-wide policy from the settings layer.
    pub fn from_settings() -> Self {
        let policy = settings::matcher_settings();
        Self {
            match_threshold: policy.match_threshold,
            token_overlap_weight: policy.token_overlap_weight,
            edit_proximity_weight: policy.edit_proximity_weight,
        }
    }

    pub fn score(&self, a: &str, b: &str) -> f64 {
        let a = normalize(a);
        let b = normalize(b);

        // Two blank answers are trivially identical; one blank answer
        // cannot match anything.
        if a.is_empty() && b.is_empty() {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let overlap = token_overlap(&a, &b);
        let proximity = edit_proximity(&a, &b);
        let blended = self.token_overlap_weight * overlap + self.edit_proximity_weight * proximity;
        let score = blended.clamp(0.0, 1.0);

        debug!(
            "similarity: overlap={:.3} proximity={:.3} score={:.3} ({:?} vs {:?})",
            overlap, proximity, score, a, b
        );

        score
    }

    pub fn is_match(&self, a: &str, b: &str) -> bool {
        self.score(a, b) >= self.match_threshold
    }

    pub fn similarity(&self, a: &str, b: &str) -> Similarity {
        let score = self.score(a, b);
        Similarity {
            score,
            is_match: score >= self.match_threshold,
        }
    }
}

/// Compare two free-text answers under the process-wide matcher policy.
pub fn similarity(a: &str, b: &str) -> Similarity {
    Matcher::from_settings().similarity(a, b)
}

/// Jaccard similarity of the word sets of two normalized strings.
fn token_overlap(a: &str, b: &str) -> f64 {
    let tokens_a: HashSet<&str> = a.split_whitespace().collect();
    let tokens_b: HashSet<&str> = b.split_whitespace().collect();

    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.union(&tokens_b).count();

    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// 1 − levenshtein(a, b) / max(len(a), len(b)), over normalized strings.
fn edit_proximity(a: &str, b: &str) -> f64 {
    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();
    let longest = chars_a.len().max(chars_b.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&chars_a, &chars_b) as f64 / longest as f64
}

/// Standard two-row Levenshtein dynamic program.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        let chars = |s: &str| s.chars().collect::<Vec<char>>();
        assert_eq!(levenshtein(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(levenshtein(&chars("abc"), &chars("abc")), 0);
        assert_eq!(levenshtein(&chars(""), &chars("abc")), 3);
    }

    #[test]
    fn test_blank_answers() {
        let result = similarity("", "");
        assert_eq!(result.score, 1.0);
        assert!(result.is_match);

        let result = similarity("", "pizza");
        assert_eq!(result.score, 0.0);
        assert!(!result.is_match);

        // Whitespace-only normalizes to empty and behaves the same.
        let result = similarity("   ", "\t");
        assert_eq!(result.score, 1.0);
        assert!(result.is_match);
    }

    #[test]
    fn test_identical_answers() {
        let result = similarity("Coffee in bed", "coffee in bed!");
        assert_eq!(result.score, 1.0);
        assert!(result.is_match);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("pizza night", "night pizza"),
            ("a quiet walk on the beach", "quiet beach walk"),
            ("lasagna", "lasagne"),
            ("", "anything"),
        ];
        for (a, b) in pairs {
            let ab = similarity(a, b);
            let ba = similarity(b, a);
            assert_eq!(ab.score, ba.score, "asymmetric for {:?} / {:?}", a, b);
            assert_eq!(ab.is_match, ba.is_match);
        }
    }

    #[test]
    fn test_reordered_words_match() {
        // Same word set, comma and order differences only: token overlap is
        // 1.0 and positional alignment bounds the edit distance at 8 of 11,
        // so the blend clears the threshold.
        let result = similarity("pizza night", "night, pizza");
        assert!(result.score >= MATCH_THRESHOLD, "score {}", result.score);
        assert!(result.is_match);
    }

    #[test]
    fn test_partial_phrase_overlap() {
        // Shared words "quiet", "walk", "beach" out of six unique words
        // across both answers: token overlap 0.5, and the length gap keeps
        // edit proximity low enough that the blend stays under threshold.
        let result = similarity("a quiet walk on the beach", "quiet beach walk");
        assert!(result.score > 0.0);
        assert!(result.score < MATCH_THRESHOLD, "score {}", result.score);
        assert!(!result.is_match);
    }

    #[test]
    fn test_trailing_typo_matches() {
        let result = similarity("quiet beach walk", "quiet beach walks");
        assert!(result.is_match, "score {}", result.score);
    }

    #[test]
    fn test_score_clamped() {
        let custom = Matcher {
            match_threshold: 0.5,
            token_overlap_weight: 0.9,
            edit_proximity_weight: 0.9,
        };
        let score = custom.score("same answer", "same answer");
        assert!(score <= 1.0);
    }
}
