use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lesson::model::{
    Letter, WordRecord, field, letters, text_field, text_list, word_records,
};
use crate::lesson::normalize::{LessonType, NormalizedLesson};

/// How the popular-words lesson is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopularWordsVariant {
    /// Numbered card grid over `content.practice_words` only.
    #[default]
    CardGrid,
    /// Generic word list over the normalized words.
    WordList,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VariantConfig {
    pub popular_words: PopularWordsVariant,
}

/// A presentation variant together with the fields it consumes.
#[derive(Clone, Debug, PartialEq)]
pub enum Variant {
    Alphabet {
        introduction: Option<String>,
        description: Option<String>,
        letters: Vec<Letter>,
    },
    Greetings {
        introduction: Option<String>,
        description: Option<String>,
        greetings: Vec<WordRecord>,
        situations: Vec<String>,
    },
    SpacedRepetition {
        cards: Vec<WordRecord>,
    },
    Mnemonics {
        description: Option<String>,
        words: Vec<WordRecord>,
    },
    Visual {
        tips: Vec<String>,
        words: Vec<WordRecord>,
    },
    Contextual {
        words: Vec<WordRecord>,
    },
    PopularWords {
        words: Vec<WordRecord>,
    },
    WordList {
        words: Vec<WordRecord>,
    },
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Alphabet { .. } => "alphabet",
            Variant::Greetings { .. } => "greetings",
            Variant::SpacedRepetition { .. } => "spaced_repetition",
            Variant::Mnemonics { .. } => "mnemonics",
            Variant::Visual { .. } => "visual",
            Variant::Contextual { .. } => "contextual",
            Variant::PopularWords { .. } => "popular_words",
            Variant::WordList { .. } => "word_list",
        }
    }

    /// Number of items the variant's cursor walks over.
    pub fn item_count(&self) -> usize {
        match self {
            Variant::Alphabet { letters, .. } => letters.len(),
            Variant::Greetings { greetings, .. } => greetings.len(),
            Variant::SpacedRepetition { cards } => cards.len(),
            Variant::Mnemonics { words, .. }
            | Variant::Visual { words, .. }
            | Variant::Contextual { words }
            | Variant::PopularWords { words }
            | Variant::WordList { words } => words.len(),
        }
    }
}

pub fn dispatch(lesson: &NormalizedLesson, config: &VariantConfig) -> Variant {
    let content = &lesson.content;
    match lesson.lesson_type {
        LessonType::Alphabet => Variant::Alphabet {
            introduction: text_field(content, "introduction"),
            description: text_field(content, "description"),
            letters: letters(content),
        },
        LessonType::Greetings => {
            let greetings = if lesson.words.is_empty() {
                field(content, "greetings").map(word_records).unwrap_or_default()
            } else {
                lesson.words.clone()
            };
            Variant::Greetings {
                introduction: text_field(content, "introduction"),
                description: text_field(content, "description"),
                greetings,
                situations: text_list(content, "example_situations"),
            }
        }
        LessonType::SpacedRepetition => Variant::SpacedRepetition {
            cards: lesson.words.clone(),
        },
        LessonType::Mnemonics => Variant::Mnemonics {
            description: text_field(content, "description"),
            words: lesson.words.clone(),
        },
        LessonType::Visual => Variant::Visual {
            tips: text_list(content, "visualization_tips"),
            words: lesson.words.clone(),
        },
        LessonType::Contextual => Variant::Contextual {
            words: lesson.words.clone(),
        },
        LessonType::Other
            if lesson.popular_words && config.popular_words == PopularWordsVariant::CardGrid =>
        {
            Variant::PopularWords {
                words: practice_word_records(content),
            }
        }
        LessonType::Other => Variant::WordList {
            words: lesson.words.clone(),
        },
    }
}

fn practice_word_records(content: &Value) -> Vec<WordRecord> {
    field(content, "practice_words")
        .map(word_records)
        .unwrap_or_default()
}

/// Text sections shared by every lesson, shown beneath the variant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonOverview {
    pub introduction: Option<String>,
    pub description: Option<String>,
    pub benefits: Option<String>,
    pub example: Option<String>,
    pub activities: Vec<String>,
    pub situations: Vec<String>,
    /// `content.practice_words`, listed under `practice_title`.
    pub practice_words: Vec<WordRecord>,
    pub practice_title: &'static str,
}

impl LessonOverview {
    pub fn from_content(content: &Value) -> Self {
        Self {
            introduction: text_field(content, "introduction"),
            description: text_field(content, "description"),
            benefits: text_field(content, "benefits"),
            example: text_field(content, "example"),
            activities: text_list(content, "activities"),
            situations: text_list(content, "example_situations"),
            practice_words: Vec::new(),
            practice_title: "",
        }
    }

    /// Sections plus the practice word list. Spaced repetition already
    /// drills its words as cards, so it gets no list.
    pub fn for_lesson(lesson: &NormalizedLesson) -> Self {
        let mut overview = Self::from_content(&lesson.content);
        match lesson.lesson_type {
            LessonType::SpacedRepetition => {}
            LessonType::Mnemonics => {
                overview.practice_words = practice_word_records(&lesson.content);
                overview.practice_title = "Mnemonic Devices";
            }
            _ => {
                overview.practice_words = practice_word_records(&lesson.content);
                overview.practice_title = "Words to Learn";
            }
        }
        overview
    }

    pub fn is_empty(&self) -> bool {
        self.introduction.is_none()
            && self.description.is_none()
            && self.benefits.is_none()
            && self.example.is_none()
            && self.activities.is_empty()
            && self.situations.is_empty()
            && self.practice_words.is_empty()
    }
}
