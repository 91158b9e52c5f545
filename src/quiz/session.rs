use serde::{Serialize, Deserialize};
use chrono::Utc;
use log::info;
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::assessment::{Answer, AnswerValue, Question};
use crate::matching::Matcher;

use super::results::{aggregate_score, MatchResult, SessionReport};
use super::{QuizError, Result};

/// Phases of the "truths then guesses" protocol. Transitions only move
/// forward; no phase is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    CollectingTruths,
    CollectingGuesses,
    Completed,
}

/// One respondent's side of a partner-knowledge quiz. The respondent first
/// answers every question about themselves (truths), then predicts their
/// partner's answers (guesses). Completion scores each guess against the
/// partner's truth for the same question.
///
/// Every transition validates fully before touching state, so a failed call
/// leaves the session exactly as it was.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub pair_id: Uuid,
    pub respondent_id: Uuid,
    questions: Vec<Question>,
    phase: QuizPhase,
    truths: Vec<Answer>,
    guesses: Vec<Answer>,
}

impl QuizSession {
    /// New session over the standard partner-knowledge question bank.
    pub fn new(pair_id: Uuid, respondent_id: Uuid) -> Self {
        Self::with_questions(pair_id, respondent_id, partner_quiz_questions().to_vec())
    }

    pub fn with_questions(pair_id: Uuid, respondent_id: Uuid, questions: Vec<Question>) -> Self {
        Self {
            pair_id,
            respondent_id,
            questions,
            phase: QuizPhase::CollectingTruths,
            truths: Vec::new(),
            guesses: Vec::new(),
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn truths(&self) -> &[Answer] {
        &self.truths
    }

    pub fn guesses(&self) -> &[Answer] {
        &self.guesses
    }

    /// Record the respondent's own answer to one question. First answer
    /// stands; a second submission for the same question is rejected.
    pub fn submit_truth(&mut self, answer: Answer) -> Result<()> {
        if self.phase != QuizPhase::CollectingTruths {
            return Err(QuizError::WrongPhase {
                phase: self.phase,
                action: "submit a truth answer",
            });
        }
        self.validate_submission(&answer, &self.truths)?;
        self.truths.push(answer);
        Ok(())
    }

    /// Record the respondent's prediction of their partner's answer.
    pub fn submit_guess(&mut self, answer: Answer) -> Result<()> {
        if self.phase != QuizPhase::CollectingGuesses {
            return Err(QuizError::WrongPhase {
                phase: self.phase,
                action: "submit a guess answer",
            });
        }
        self.validate_submission(&answer, &self.guesses)?;
        self.guesses.push(answer);
        Ok(())
    }

    /// `collecting_truths → collecting_guesses`, permitted only once every
    /// question has exactly one truth answer.
    pub fn start_guess_phase(&mut self) -> Result<()> {
        if self.phase != QuizPhase::CollectingTruths {
            return Err(QuizError::WrongPhase {
                phase: self.phase,
                action: "start the guess phase",
            });
        }
        let missing = self.missing_from(&self.truths);
        if !missing.is_empty() {
            return Err(QuizError::IncompleteAnswerSet { missing });
        }

        self.phase = QuizPhase::CollectingGuesses;
        info!(
            "Session {}: respondent {} finished truths, collecting guesses",
            self.pair_id, self.respondent_id
        );
        Ok(())
    }

    /// `collecting_guesses → completed`. Scores every guess against the
    /// partner's truth for the same question and freezes the session.
    ///
    /// Partner completeness is checked here, at the instant of completion,
    /// not earlier: if the partner is still mid-truths this fails with
    /// `PartnerNotReady`, the recorded guesses stay put, and the caller
    /// simply retries once the partner finishes.
    pub fn complete(&mut self, partner_truths: &[Answer]) -> Result<SessionReport> {
        if self.phase != QuizPhase::CollectingGuesses {
            return Err(QuizError::WrongPhase {
                phase: self.phase,
                action: "complete the session",
            });
        }

        let missing = self.missing_from(&self.guesses);
        if !missing.is_empty() {
            return Err(QuizError::IncompleteAnswerSet { missing });
        }

        let missing_partner: Vec<String> = self
            .questions
            .iter()
            .filter(|q| !partner_truths.iter().any(|a| a.question_id == q.id))
            .map(|q| q.id.clone())
            .collect();
        if !missing_partner.is_empty() {
            return Err(QuizError::PartnerNotReady {
                missing: missing_partner,
            });
        }

        // Partner truths must be free text too; a non-text value would
        // otherwise score as an empty answer instead of being rejected.
        for question in &self.questions {
            let valid = partner_truths
                .iter()
                .filter(|a| a.question_id == question.id)
                .all(|a| matches!(a.value, AnswerValue::Text(_)));
            if !valid {
                return Err(QuizError::InvalidValue {
                    question_id: question.id.clone(),
                });
            }
        }

        let matcher = Matcher::from_settings();
        let results: Vec<MatchResult> = self
            .questions
            .iter()
            .map(|question| {
                // Both lookups are covered by the completeness checks above.
                let truth = partner_truths
                    .iter()
                    .find(|a| a.question_id == question.id)
                    .map(Answer::text_value)
                    .unwrap_or_default();
                let guess = self
                    .guesses
                    .iter()
                    .find(|a| a.question_id == question.id)
                    .map(Answer::text_value)
                    .unwrap_or_default();
                let similarity = matcher.similarity(truth, guess);
                MatchResult {
                    question_id: question.id.clone(),
                    truth_text: truth.to_string(),
                    guess_text: guess.to_string(),
                    score: similarity.score,
                    is_match: similarity.is_match,
                }
            })
            .collect();

        let score = aggregate_score(&results);
        self.phase = QuizPhase::Completed;

        info!(
            "✅ Session {} completed for respondent {}: {}/{} matches, score {}",
            self.pair_id,
            self.respondent_id,
            results.iter().filter(|r| r.is_match).count(),
            results.len(),
            score
        );

        Ok(SessionReport {
            pair_id: self.pair_id,
            respondent_id: self.respondent_id,
            results,
            score,
            completed_at: Utc::now(),
        })
    }

    fn validate_submission(&self, answer: &Answer, recorded: &[Answer]) -> Result<()> {
        if !self.questions.iter().any(|q| q.id == answer.question_id) {
            return Err(QuizError::UnknownQuestion {
                question_id: answer.question_id.clone(),
            });
        }
        if !matches!(answer.value, AnswerValue::Text(_)) {
            return Err(QuizError::InvalidValue {
                question_id: answer.question_id.clone(),
            });
        }
        if recorded.iter().any(|a| a.question_id == answer.question_id) {
            return Err(QuizError::DuplicateAnswer {
                question_id: answer.question_id.clone(),
            });
        }
        Ok(())
    }

    fn missing_from(&self, answers: &[Answer]) -> Vec<String> {
        self.questions
            .iter()
            .filter(|q| !answers.iter().any(|a| a.question_id == q.id))
            .map(|q| q.id.clone())
            .collect()
    }
}

/// Move a session from collecting truths to collecting guesses.
pub fn start_guess_phase(session: &mut QuizSession) -> Result<()> {
    session.start_guess_phase()
}

/// Finalize a session against the partner's completed truth answers.
pub fn complete_session(
    session: &mut QuizSession,
    partner_truths: &[Answer],
) -> Result<SessionReport> {
    session.complete(partner_truths)
}

static PARTNER_QUIZ: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        Question::free_text("know-01", "What's your partner's idea of a perfect evening?"),
        Question::free_text("know-02", "What meal would your partner pick for their last dinner?"),
        Question::free_text("know-03", "What small thing reliably makes your partner laugh?"),
        Question::free_text("know-04", "Where would your partner go if they could travel anywhere tomorrow?"),
        Question::free_text("know-05", "What's your partner's go-to way to unwind after a stressful day?"),
        Question::free_text("know-06", "Which song would your partner put on for a long drive?"),
        Question::free_text("know-07", "What childhood memory does your partner bring up most often?"),
        Question::free_text("know-08", "What's one habit your partner is secretly proud of?"),
    ]
});

/// The standard partner-knowledge question bank.
pub fn partner_quiz_questions() -> &'static [Question] {
    &PARTNER_QUIZ
}
