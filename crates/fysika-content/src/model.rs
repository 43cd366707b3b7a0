//! Typed question-bank model.

use fysika_core::{AnswerSpec, Language};
use serde::{Deserialize, Serialize};

use crate::topics::TopicId;

/// Difficulty levels, serialized as 1/2/3 in bank files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Difficulty::Basic),
            2 => Ok(Difficulty::Intermediate),
            3 => Ok(Difficulty::Advanced),
            other => Err(format!("difficulty must be 1, 2, or 3, got {other}")),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Basic => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }
}

impl Difficulty {
    /// Localized display label.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Difficulty::Basic, Language::En) => "Basic",
            (Difficulty::Intermediate, Language::En) => "Intermediate",
            (Difficulty::Advanced, Language::En) => "Advanced",
            (Difficulty::Basic, Language::Nl) => "Basis",
            (Difficulty::Intermediate, Language::Nl) => "Gemiddeld",
            (Difficulty::Advanced, Language::Nl) => "Gevorderd",
        }
    }
}

/// Text that is either plain (English-only) or authored in both languages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalisedText {
    Plain(String),
    Bilingual { en: String, nl: String },
}

impl LocalisedText {
    /// The text for a language, falling back to English.
    pub fn get(&self, language: Language) -> &str {
        match self {
            LocalisedText::Plain(text) => text,
            LocalisedText::Bilingual { en, nl } => match language {
                Language::En => en,
                Language::Nl => {
                    if nl.is_empty() {
                        en
                    } else {
                        nl
                    }
                }
            },
        }
    }
}

impl From<&str> for LocalisedText {
    fn from(value: &str) -> Self {
        LocalisedText::Plain(value.to_string())
    }
}

/// A practice question: prompt and learning support around an answer key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub topic: TopicId,
    pub difficulty: Difficulty,
    pub prompt: LocalisedText,
    /// The answer key graded by `fysika-core`.
    pub answer: AnswerSpec,
    /// Progressive hints, at most three.
    #[serde(default)]
    pub hints: Vec<LocalisedText>,
    /// Step-by-step worked solution.
    #[serde(default)]
    pub solution_steps: Vec<LocalisedText>,
    /// Mistakes students commonly make on this question.
    #[serde(default)]
    pub common_mistakes: Vec<LocalisedText>,
}

/// A collection of questions loaded from one bank file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub version: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Questions belonging to a topic, in authored order.
    pub fn questions_for_topic(&self, topic: TopicId) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.topic == topic)
    }

    /// Look a question up by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_round_trip() {
        for n in 1u8..=3 {
            let d = Difficulty::try_from(n).unwrap();
            assert_eq!(u8::from(d), n);
        }
        assert!(Difficulty::try_from(0).is_err());
        assert!(Difficulty::try_from(4).is_err());
    }

    #[test]
    fn difficulty_labels() {
        assert_eq!(Difficulty::Basic.label(Language::En), "Basic");
        assert_eq!(Difficulty::Advanced.label(Language::Nl), "Gevorderd");
    }

    #[test]
    fn localised_text_fallback() {
        let plain: LocalisedText = "only english".into();
        assert_eq!(plain.get(Language::Nl), "only english");

        let bilingual = LocalisedText::Bilingual {
            en: "force".into(),
            nl: "kracht".into(),
        };
        assert_eq!(bilingual.get(Language::En), "force");
        assert_eq!(bilingual.get(Language::Nl), "kracht");

        let empty_nl = LocalisedText::Bilingual {
            en: "force".into(),
            nl: String::new(),
        };
        assert_eq!(empty_nl.get(Language::Nl), "force");
    }
}
