use serde::{Serialize, Deserialize};
use once_cell::sync::Lazy;
use std::fmt;

use super::questions::Question;

/// One fixed classification scheme with its own category set and question
/// bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypologyId {
    LoveLanguage,
    Attachment,
    Enneagram,
}

impl fmt::Display for TypologyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypologyId::LoveLanguage => "love_language",
            TypologyId::Attachment => "attachment",
            TypologyId::Enneagram => "enneagram",
        };
        write!(f, "{}", name)
    }
}

/// Static reference data for one typology, loaded once at first use. The
/// `categories` list doubles as the tie-break priority table: when two
/// categories tie, the one earlier in this list wins.
#[derive(Debug, Clone)]
pub struct TypologyDefinition {
    pub id: TypologyId,
    pub version: u32,
    pub categories: Vec<String>,
    pub questions: Vec<Question>,
}

impl TypologyDefinition {
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Position in the fixed priority list; lower wins ties.
    pub fn category_priority(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

pub fn typology_definition(id: TypologyId) -> &'static TypologyDefinition {
    match id {
        TypologyId::LoveLanguage => &LOVE_LANGUAGE,
        TypologyId::Attachment => &ATTACHMENT,
        TypologyId::Enneagram => &ENNEAGRAM,
    }
}

static LOVE_LANGUAGE: Lazy<TypologyDefinition> = Lazy::new(|| TypologyDefinition {
    id: TypologyId::LoveLanguage,
    version: 1,
    categories: vec![
        "words_of_affirmation".to_string(),
        "quality_time".to_string(),
        "acts_of_service".to_string(),
        "receiving_gifts".to_string(),
        "physical_touch".to_string(),
    ],
    // One binary question per unordered pair of languages, so every
    // language appears in exactly four questions.
    questions: vec![
        Question::forced_choice(
            "love-01",
            "At the end of a hard day, what helps most?",
            ("Hearing my partner say they're proud of me", "words_of_affirmation"),
            ("An evening together with phones away", "quality_time"),
        ),
        Question::forced_choice(
            "love-02",
            "Which gesture would land better this week?",
            ("A note telling me what I mean to them", "words_of_affirmation"),
            ("My partner quietly taking a chore off my plate", "acts_of_service"),
        ),
        Question::forced_choice(
            "love-03",
            "What would make an ordinary Tuesday feel special?",
            ("An unexpected compliment in front of friends", "words_of_affirmation"),
            ("A small surprise waiting on my desk", "receiving_gifts"),
        ),
        Question::forced_choice(
            "love-04",
            "When we reunite after time apart, I most want...",
            ("To hear how much I was missed", "words_of_affirmation"),
            ("A long hug before anything else", "physical_touch"),
        ),
        Question::forced_choice(
            "love-05",
            "A free Saturday afternoon is best spent...",
            ("On a walk together, just the two of us", "quality_time"),
            ("With my partner fixing that thing I never get to", "acts_of_service"),
        ),
        Question::forced_choice(
            "love-06",
            "Which anniversary would mean more?",
            ("A whole day of undivided attention", "quality_time"),
            ("A gift they clearly planned for months", "receiving_gifts"),
        ),
        Question::forced_choice(
            "love-07",
            "During a movie at home, I'd rather...",
            ("Talk it over together afterwards", "quality_time"),
            ("Sit close, shoulder to shoulder", "physical_touch"),
        ),
        Question::forced_choice(
            "love-08",
            "I feel most cared for when my partner...",
            ("Handles dinner without being asked", "acts_of_service"),
            ("Brings me something small from their trip", "receiving_gifts"),
        ),
        Question::forced_choice(
            "love-09",
            "After an argument, what repairs things faster?",
            ("My partner doing something concrete to make it right", "acts_of_service"),
            ("Holding hands until it feels okay again", "physical_touch"),
        ),
        Question::forced_choice(
            "love-10",
            "On my birthday, what matters more?",
            ("A thoughtful present, however small", "receiving_gifts"),
            ("Being wrapped in a hug at midnight", "physical_touch"),
        ),
    ],
});

static ATTACHMENT: Lazy<TypologyDefinition> = Lazy::new(|| TypologyDefinition {
    id: TypologyId::Attachment,
    version: 1,
    categories: vec![
        "secure".to_string(),
        "anxious".to_string(),
        "avoidant".to_string(),
        "fearful".to_string(),
    ],
    questions: vec![
        Question::likert("attach-01", "I find it easy to depend on my partner and have them depend on me.", "secure"),
        Question::likert("attach-02", "Disagreements feel workable rather than threatening.", "secure"),
        Question::likert("attach-03", "I can ask for comfort directly when I need it.", "secure"),
        Question::likert("attach-04", "I worry that my partner doesn't care as much as I do.", "anxious"),
        Question::likert("attach-05", "When my partner is distant, I need reassurance quickly.", "anxious"),
        Question::likert("attach-06", "An unanswered message can occupy my mind for hours.", "anxious"),
        Question::likert("attach-07", "I prefer to work through problems on my own before talking.", "avoidant"),
        Question::likert("attach-08", "Too much closeness can feel suffocating to me.", "avoidant"),
        Question::likert("attach-09", "I keep parts of my life separate from my relationship.", "avoidant"),
        Question::likert("attach-10", "I want closeness but pull away when I actually get it.", "fearful"),
        Question::likert("attach-11", "Trusting a partner completely feels risky to me.", "fearful"),
        Question::likert("attach-12", "My feelings about intimacy swing between craving and dread.", "fearful"),
    ],
});

static ENNEAGRAM: Lazy<TypologyDefinition> = Lazy::new(|| TypologyDefinition {
    id: TypologyId::Enneagram,
    version: 1,
    categories: vec![
        "type_1".to_string(),
        "type_2".to_string(),
        "type_3".to_string(),
        "type_4".to_string(),
        "type_5".to_string(),
        "type_6".to_string(),
        "type_7".to_string(),
        "type_8".to_string(),
        "type_9".to_string(),
    ],
    questions: vec![
        Question::likert("ennea-01", "I notice what's wrong or out of place before anything else.", "type_1"),
        Question::likert("ennea-02", "I hold myself to standards most people would find strict.", "type_1"),
        Question::likert("ennea-03", "I sense what others need before they say it.", "type_2"),
        Question::likert("ennea-04", "Being needed is one of the best feelings I know.", "type_2"),
        Question::likert("ennea-05", "I adapt how I come across to win the room.", "type_3"),
        Question::likert("ennea-06", "Accomplishment is how I measure my worth.", "type_3"),
        Question::likert("ennea-07", "I feel different from other people in a way that's hard to name.", "type_4"),
        Question::likert("ennea-08", "Ordinary life often feels like something is missing.", "type_4"),
        Question::likert("ennea-09", "I need time alone to recharge and think things through.", "type_5"),
        Question::likert("ennea-10", "I'd rather observe and understand than jump in.", "type_5"),
        Question::likert("ennea-11", "I rehearse worst-case scenarios so I'm never caught off guard.", "type_6"),
        Question::likert("ennea-12", "Loyalty matters to me more than almost anything.", "type_6"),
        Question::likert("ennea-13", "I keep my options open; committing to one plan feels limiting.", "type_7"),
        Question::likert("ennea-14", "When things get heavy, I look for the next fun thing.", "type_7"),
        Question::likert("ennea-15", "I say what others are afraid to say.", "type_8"),
        Question::likert("ennea-16", "Being controlled by someone else is intolerable to me.", "type_8"),
        Question::likert("ennea-17", "I go along to keep the peace, even when I disagree.", "type_9"),
        Question::likert("ennea-18", "I lose track of my own preferences in a relationship.", "type_9"),
    ],
});
