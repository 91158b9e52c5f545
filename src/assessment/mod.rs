pub mod answers;
pub mod classifier;
pub mod questions;
pub mod typology;

pub use answers::*;
pub use classifier::*;
pub use questions::*;
pub use typology::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("Incomplete answer set for {typology}: missing questions {missing:?}")]
    IncompleteAnswerSet {
        typology: TypologyId,
        missing: Vec<String>,
    },
    #[error("Duplicate answer for question {question_id}")]
    DuplicateAnswer { question_id: String },
    #[error("Unknown question {question_id}")]
    UnknownQuestion { question_id: String },
    #[error("Invalid value for question {question_id}: {reason}")]
    InvalidValue { question_id: String, reason: String },
    #[error("Answer set spans more than one respondent")]
    MixedRespondents,
}

pub type Result<T> = std::result::Result<T, AssessmentError>;
