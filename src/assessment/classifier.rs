use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use log::info;
use std::collections::HashMap;
use uuid::Uuid;

use super::answers::{Answer, AnswerValue};
use super::questions::QuestionKind;
use super::typology::{typology_definition, TypologyDefinition, TypologyId};
use super::{AssessmentError, Result};

/// Per-category tallies in typology priority order. Recomputed wholesale
/// from a complete answer set, never updated incrementally.
pub type ScoreVector = IndexMap<String, u32>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub respondent_id: Uuid,
    pub typology: TypologyId,
    pub scores: ScoreVector,
    pub primary: String,
    pub secondary: String,
    pub computed_at: DateTime<Utc>,
}

/// Tally a complete forced-choice/Likert answer set into a classification.
/// Binary choices add 1 to the chosen option's category; Likert answers add
/// the 1-5 rating to the question's category. Ties resolve by the
/// typology's fixed priority list, so identical input always produces the
/// same primary and secondary.
pub fn classify(answers: &[Answer], typology: TypologyId) -> Result<ClassificationResult> {
    let definition = typology_definition(typology);

    let respondent_id = match answers.first() {
        Some(answer) => answer.respondent_id,
        None => {
            return Err(AssessmentError::IncompleteAnswerSet {
                typology,
                missing: definition.questions.iter().map(|q| q.id.clone()).collect(),
            })
        }
    };

    let mut by_question: HashMap<&str, &Answer> = HashMap::new();
    for answer in answers {
        if answer.respondent_id != respondent_id {
            return Err(AssessmentError::MixedRespondents);
        }
        if definition.question(&answer.question_id).is_none() {
            return Err(AssessmentError::UnknownQuestion {
                question_id: answer.question_id.clone(),
            });
        }
        if by_question.insert(answer.question_id.as_str(), answer).is_some() {
            return Err(AssessmentError::DuplicateAnswer {
                question_id: answer.question_id.clone(),
            });
        }
    }

    let missing: Vec<String> = definition
        .questions
        .iter()
        .filter(|q| !by_question.contains_key(q.id.as_str()))
        .map(|q| q.id.clone())
        .collect();
    if !missing.is_empty() {
        return Err(AssessmentError::IncompleteAnswerSet { typology, missing });
    }

    let mut scores: ScoreVector = definition
        .categories
        .iter()
        .map(|category| (category.clone(), 0u32))
        .collect();

    for question in &definition.questions {
        let answer = by_question[question.id.as_str()];
        match (&question.kind, &answer.value) {
            (QuestionKind::ForcedChoice { options }, AnswerValue::Choice(tag)) => {
                if !options.iter().any(|option| &option.category == tag) {
                    return Err(AssessmentError::InvalidValue {
                        question_id: question.id.clone(),
                        reason: format!("'{}' is not one of this question's options", tag),
                    });
                }
                if let Some(tally) = scores.get_mut(tag) {
                    *tally += 1;
                }
            }
            (QuestionKind::Likert { category }, AnswerValue::Scale(rating)) => {
                if !(1..=5).contains(rating) {
                    return Err(AssessmentError::InvalidValue {
                        question_id: question.id.clone(),
                        reason: format!("rating {} outside 1-5", rating),
                    });
                }
                if let Some(tally) = scores.get_mut(category) {
                    *tally += u32::from(*rating);
                }
            }
            _ => {
                return Err(AssessmentError::InvalidValue {
                    question_id: question.id.clone(),
                    reason: "answer shape does not match the question".to_string(),
                });
            }
        }
    }

    let primary = dominant_category(definition, &scores, None);
    let secondary = dominant_category(definition, &scores, Some(&primary));

    info!(
        "Classified respondent {} on {}: primary={} secondary={}",
        respondent_id, typology, primary, secondary
    );

    Ok(ClassificationResult {
        respondent_id,
        typology,
        scores,
        primary,
        secondary,
        computed_at: Utc::now(),
    })
}

/// Highest-tally category, walking the priority list in order so that on a
/// tie the earlier category wins. `exclude` skips the already-resolved
/// primary when picking the secondary.
fn dominant_category(
    definition: &TypologyDefinition,
    scores: &ScoreVector,
    exclude: Option<&str>,
) -> String {
    let mut best: Option<(&str, u32)> = None;
    for category in &definition.categories {
        if exclude == Some(category.as_str()) {
            continue;
        }
        let tally = scores.get(category).copied().unwrap_or(0);
        match best {
            Some((_, top)) if tally <= top => {}
            _ => best = Some((category, tally)),
        }
    }
    best.map(|(category, _)| category.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::questions::QuestionKind;

    fn respondent() -> Uuid {
        Uuid::new_v4()
    }

    /// Answer every love-language question, preferring categories in the
    /// order given (earlier in `preferences` beats later).
    fn love_answers(respondent_id: Uuid, preferences: &[&str]) -> Vec<Answer> {
        let definition = typology_definition(TypologyId::LoveLanguage);
        definition
            .questions
            .iter()
            .map(|question| {
                let options = match &question.kind {
                    QuestionKind::ForcedChoice { options } => options,
                    _ => unreachable!(),
                };
                let rank = |category: &str| {
                    preferences
                        .iter()
                        .position(|p| *p == category)
                        .unwrap_or(preferences.len())
                };
                let chosen = if rank(&options[0].category) <= rank(&options[1].category) {
                    &options[0].category
                } else {
                    &options[1].category
                };
                Answer::choice(&question.id, respondent_id, chosen)
            })
            .collect()
    }

    #[test]
    fn test_binary_tally_and_primary() {
        let id = respondent();
        let answers = love_answers(
            id,
            &["words_of_affirmation", "quality_time", "acts_of_service", "receiving_gifts"],
        );
        let result = classify(&answers, TypologyId::LoveLanguage).unwrap();

        // Each language sits in four pairings; preferring words everywhere
        // gives it all four of its questions.
        assert_eq!(result.primary, "words_of_affirmation");
        assert_eq!(result.secondary, "quality_time");
        assert_eq!(result.scores["words_of_affirmation"], 4);
        assert_eq!(result.scores["quality_time"], 3);
        assert_eq!(result.scores["acts_of_service"], 2);
        assert_eq!(result.scores["receiving_gifts"], 1);
        assert_eq!(result.scores["physical_touch"], 0);
        assert_eq!(result.respondent_id, id);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let id = respondent();
        let answers = love_answers(id, &["physical_touch", "receiving_gifts"]);
        let first = classify(&answers, TypologyId::LoveLanguage).unwrap();
        let second = classify(&answers, TypologyId::LoveLanguage).unwrap();
        assert_eq!(first.primary, second.primary);
        assert_eq!(first.secondary, second.secondary);
        assert_eq!(first.scores, second.scores);
    }

    #[test]
    fn test_tie_breaks_by_priority_order() {
        let id = respondent();
        let definition = typology_definition(TypologyId::LoveLanguage);
        // Hand-picked choices producing words=3, quality=3: the earlier
        // category in the priority list must win the tie.
        let picks = [
            ("love-01", "quality_time"),
            ("love-02", "words_of_affirmation"),
            ("love-03", "words_of_affirmation"),
            ("love-04", "words_of_affirmation"),
            ("love-05", "quality_time"),
            ("love-06", "quality_time"),
            ("love-07", "physical_touch"),
            ("love-08", "receiving_gifts"),
            ("love-09", "acts_of_service"),
            ("love-10", "receiving_gifts"),
        ];
        let answers: Vec<Answer> = picks
            .iter()
            .map(|(question_id, category)| Answer::choice(question_id, id, category))
            .collect();
        assert_eq!(answers.len(), definition.questions.len());

        let result = classify(&answers, TypologyId::LoveLanguage).unwrap();
        assert_eq!(result.scores["words_of_affirmation"], 3);
        assert_eq!(result.scores["quality_time"], 3);
        assert_eq!(result.primary, "words_of_affirmation");
        assert_eq!(result.secondary, "quality_time");
    }

    #[test]
    fn test_likert_scoring() {
        let id = respondent();
        let definition = typology_definition(TypologyId::Attachment);
        let answers: Vec<Answer> = definition
            .questions
            .iter()
            .map(|question| {
                let rating = match &question.kind {
                    QuestionKind::Likert { category } if category == "secure" => 5,
                    _ => 1,
                };
                Answer::scale(&question.id, id, rating)
            })
            .collect();

        let result = classify(&answers, TypologyId::Attachment).unwrap();
        assert_eq!(result.scores["secure"], 15);
        assert_eq!(result.scores["anxious"], 3);
        assert_eq!(result.primary, "secure");
        // Three-way tie below the primary: first in priority order wins.
        assert_eq!(result.secondary, "anxious");
    }

    #[test]
    fn test_incomplete_answer_set_names_missing() {
        let id = respondent();
        let mut answers = love_answers(id, &["quality_time"]);
        answers.retain(|a| a.question_id != "love-07");

        match classify(&answers, TypologyId::LoveLanguage) {
            Err(AssessmentError::IncompleteAnswerSet { missing, .. }) => {
                assert_eq!(missing, vec!["love-07".to_string()]);
            }
            other => panic!("expected IncompleteAnswerSet, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_answer_rejected() {
        let id = respondent();
        let mut answers = love_answers(id, &["quality_time"]);
        answers.push(Answer::choice("love-01", id, "words_of_affirmation"));

        match classify(&answers, TypologyId::LoveLanguage) {
            Err(AssessmentError::DuplicateAnswer { question_id }) => {
                assert_eq!(question_id, "love-01");
            }
            other => panic!("expected DuplicateAnswer, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_values_rejected() {
        let id = respondent();
        let mut answers = love_answers(id, &["quality_time"]);
        answers.retain(|a| a.question_id != "love-01");
        answers.push(Answer::choice("love-01", id, "acts_of_service")); // not an option on love-01
        assert!(matches!(
            classify(&answers, TypologyId::LoveLanguage),
            Err(AssessmentError::InvalidValue { .. })
        ));

        let definition = typology_definition(TypologyId::Attachment);
        let mut answers: Vec<Answer> = definition
            .questions
            .iter()
            .map(|q| Answer::scale(&q.id, id, 3))
            .collect();
        answers[0].value = AnswerValue::Scale(6);
        assert!(matches!(
            classify(&answers, TypologyId::Attachment),
            Err(AssessmentError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_mixed_respondents_rejected() {
        let answers_a = love_answers(respondent(), &["quality_time"]);
        let mut mixed = answers_a;
        mixed.last_mut().unwrap().respondent_id = respondent();
        assert!(matches!(
            classify(&mixed, TypologyId::LoveLanguage),
            Err(AssessmentError::MixedRespondents)
        ));
    }

    #[test]
    fn test_empty_answer_set() {
        match classify(&[], TypologyId::Enneagram) {
            Err(AssessmentError::IncompleteAnswerSet { missing, .. }) => {
                assert_eq!(missing.len(), 18);
            }
            other => panic!("expected IncompleteAnswerSet, got {:?}", other),
        }
    }
}
