use serde::{Serialize, Deserialize};

/// One quiz question. Defined in the static banks at build time and never
/// mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum QuestionKind {
    /// Pick one of two options, each tagged with a category.
    ForcedChoice { options: [ChoiceOption; 2] },
    /// Agreement on a 1-5 scale; the whole question is tagged with a category.
    Likert { category: String },
    /// Free text, no category.
    FreeText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub category: String,
}

impl Question {
    pub fn forced_choice(
        id: &str,
        prompt: &str,
        first: (&str, &str),  // (label, category)
        second: (&str, &str),
    ) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            kind: QuestionKind::ForcedChoice {
                options: [
                    ChoiceOption {
                        label: first.0.to_string(),
                        category: first.1.to_string(),
                    },
                    ChoiceOption {
                        label: second.0.to_string(),
                        category: second.1.to_string(),
                    },
                ],
            },
        }
    }

    pub fn likert(id: &str, prompt: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            kind: QuestionKind::Likert {
                category: category.to_string(),
            },
        }
    }

    pub fn free_text(id: &str, prompt: &str) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            kind: QuestionKind::FreeText,
        }
    }
}
