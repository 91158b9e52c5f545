use log::info;

pub mod assessment;
pub mod matching;
pub mod pairing;
pub mod quiz;
pub mod settings;

pub use assessment::{
    classify, typology_definition, Answer, AnswerValue, AssessmentError, ChoiceOption,
    ClassificationResult, Question, QuestionKind, ScoreVector, TypologyDefinition, TypologyId,
};
pub use matching::{normalize, similarity, Matcher, Similarity};
pub use pairing::{resolve_pairing, PairingError, PairingInsight};
pub use quiz::{
    complete_session, partner_quiz_questions, start_guess_phase, MatchResult, QuizError,
    QuizPhase, QuizSession, SessionReport,
};

/// Logs the engine version and the active matcher policy. Hosts call this
/// once at startup; everything else is lazy.
pub fn log_engine_info() {
    let policy = settings::matcher_settings();
    info!(
        "PairMate engine v{} ready (match threshold {:.2}, weights {:.2}/{:.2})",
        env!("CARGO_PKG_VERSION"),
        policy.match_threshold,
        policy.token_overlap_weight,
        policy.edit_proximity_weight
    );
}
