use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One submitted answer. Immutable once created; the engine never mutates
/// caller-supplied answers in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub respondent_id: Uuid,
    pub value: AnswerValue,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum AnswerValue {
    /// Category tag of the chosen option on a forced-choice question.
    Choice(String),
    /// Likert agreement, 1-5.
    Scale(u8),
    /// Free text, possibly empty.
    Text(String),
}

impl Answer {
    pub fn choice(question_id: &str, respondent_id: Uuid, category: &str) -> Self {
        Self {
            question_id: question_id.to_string(),
            respondent_id,
            value: AnswerValue::Choice(category.to_string()),
            submitted_at: Utc::now(),
        }
    }

    pub fn scale(question_id: &str, respondent_id: Uuid, rating: u8) -> Self {
        Self {
            question_id: question_id.to_string(),
            respondent_id,
            value: AnswerValue::Scale(rating),
            submitted_at: Utc::now(),
        }
    }

    pub fn text(question_id: &str, respondent_id: Uuid, text: &str) -> Self {
        Self {
            question_id: question_id.to_string(),
            respondent_id,
            value: AnswerValue::Text(text.to_string()),
            submitted_at: Utc::now(),
        }
    }

    /// The free-text body of this answer, empty for non-text values.
    pub fn text_value(&self) -> &str {
        match &self.value {
            AnswerValue::Text(text) => text,
            _ => "",
        }
    }
}
