pub mod results;
pub mod session;
pub mod store;

pub use results::*;
pub use session::*;
pub use store::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Incomplete answer set: missing questions {missing:?}")]
    IncompleteAnswerSet { missing: Vec<String> },
    #[error("Duplicate answer for question {question_id}")]
    DuplicateAnswer { question_id: String },
    #[error("Partner's truth phase is not complete: missing {missing:?}")]
    PartnerNotReady { missing: Vec<String> },
    #[error("Unknown question {question_id}")]
    UnknownQuestion { question_id: String },
    #[error("Invalid value for question {question_id}: expected free text")]
    InvalidValue { question_id: String },
    #[error("Session is in the {phase:?} phase; cannot {action}")]
    WrongPhase { phase: QuizPhase, action: &'static str },
}

pub type Result<T> = std::result::Result<T, QuizError>;
