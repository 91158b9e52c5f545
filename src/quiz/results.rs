use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One scored question from a completed partner-knowledge session. The
/// truth text is the partner's own answer; the guess is what this
/// respondent predicted. Produced exactly once at session completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub question_id: String,
    pub truth_text: String,
    pub guess_text: String,
    pub score: f64, // in [0, 1]
    pub is_match: bool,
}

/// Finalized output of a two-phase quiz session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub pair_id: Uuid,
    pub respondent_id: Uuid,
    pub results: Vec<MatchResult>,
    pub score: u8, // 0-100
    pub completed_at: DateTime<Utc>,
}

/// round(100 × matches / total), 0 for an empty result set.
pub(crate) fn aggregate_score(results: &[MatchResult]) -> u8 {
    if results.is_empty() {
        return 0;
    }
    let matches = results.iter().filter(|r| r.is_match).count();
    (100.0 * matches as f64 / results.len() as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(is_match: bool) -> MatchResult {
        MatchResult {
            question_id: "know-01".to_string(),
            truth_text: String::new(),
            guess_text: String::new(),
            score: if is_match { 1.0 } else { 0.0 },
            is_match,
        }
    }

    #[test]
    fn test_aggregate_score_rounds() {
        let results = vec![result(true), result(true), result(false)];
        assert_eq!(aggregate_score(&results), 67); // round(200 / 3)

        let results = vec![result(true), result(false), result(false)];
        assert_eq!(aggregate_score(&results), 33);

        assert_eq!(aggregate_score(&[]), 0);
    }

    #[test]
    fn test_aggregate_score_extremes() {
        let all: Vec<MatchResult> = (0..5).map(|_| result(true)).collect();
        assert_eq!(aggregate_score(&all), 100);
        let none: Vec<MatchResult> = (0..5).map(|_| result(false)).collect();
        assert_eq!(aggregate_score(&none), 0);
    }
}
