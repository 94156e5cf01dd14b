use serde_json::Value;

use crate::lesson::model::{RawLessonDetail, WordRecord, field, word_records};

pub const NO_EXPLANATION: &str = "No explanation available";
pub const POPULAR_WORDS_TITLE: &str = "100 Most Popular Greek Words";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LessonType {
    Alphabet,
    Greetings,
    SpacedRepetition,
    Mnemonics,
    Visual,
    Contextual,
    Other,
}

impl LessonType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "alphabet" => LessonType::Alphabet,
            "greetings" => LessonType::Greetings,
            "spaced_repetition" => LessonType::SpacedRepetition,
            "mnemonics" => LessonType::Mnemonics,
            "visual" => LessonType::Visual,
            "contextual" => LessonType::Contextual,
            _ => LessonType::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LessonType::Alphabet => "alphabet",
            LessonType::Greetings => "greetings",
            LessonType::SpacedRepetition => "spaced_repetition",
            LessonType::Mnemonics => "mnemonics",
            LessonType::Visual => "visual",
            LessonType::Contextual => "contextual",
            LessonType::Other => "other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            LessonType::Alphabet => "🔤",
            LessonType::Greetings => "👋",
            LessonType::SpacedRepetition => "🔄",
            LessonType::Mnemonics => "🧠",
            LessonType::Visual => "👁",
            LessonType::Contextual => "💭",
            LessonType::Other => "📚",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TitleRoute {
    Typed(LessonType),
    PopularWords,
}

// Migration shim: older lessons are only recognizable by their display title.
// New lessons should rely on the server-supplied `lesson_type`.
const TITLE_ROUTES: &[(&str, TitleRoute)] = &[
    ("Greek Alphabet", TitleRoute::Typed(LessonType::Alphabet)),
    (
        "Spaced Repetition Practice",
        TitleRoute::Typed(LessonType::SpacedRepetition),
    ),
    (
        "Mnemonic Devices for Greek",
        TitleRoute::Typed(LessonType::Mnemonics),
    ),
    (
        "Basic Greetings and Farewells",
        TitleRoute::Typed(LessonType::Greetings),
    ),
    ("Contextual Learning", TitleRoute::Typed(LessonType::Contextual)),
    (
        "Visual Association Learning",
        TitleRoute::Typed(LessonType::Visual),
    ),
    (POPULAR_WORDS_TITLE, TitleRoute::PopularWords),
];

fn route_for_title(title: &str) -> Option<TitleRoute> {
    TITLE_ROUTES
        .iter()
        .find(|(known, _)| *known == title)
        .map(|(_, route)| *route)
}

#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedLesson {
    pub id: String,
    pub title: String,
    pub level: String,
    pub lesson_type: LessonType,
    /// Server-supplied type name, verbatim.
    pub raw_lesson_type: String,
    pub content: Value,
    pub words: Vec<WordRecord>,
    pub popular_words: bool,
}

/// Maps a raw lesson onto its canonical shape. Never fails: missing pieces
/// become empty values.
pub fn normalize(raw: RawLessonDetail) -> NormalizedLesson {
    let (lesson_type, popular_words) = match route_for_title(&raw.title) {
        Some(TitleRoute::Typed(lesson_type)) => (lesson_type, false),
        Some(TitleRoute::PopularWords) => (LessonType::Other, true),
        None => (LessonType::from_name(&raw.lesson_type), false),
    };
    let words = extract_words(&raw.content);

    NormalizedLesson {
        id: raw.id,
        title: raw.title,
        level: raw.level,
        lesson_type,
        raw_lesson_type: raw.lesson_type,
        content: raw.content,
        words,
        popular_words,
    }
}

/// `content.words`, else `content.practice_words`, else nothing. A present
/// `words` wins even when it is empty.
pub fn extract_words(content: &Value) -> Vec<WordRecord> {
    match field(content, "words").or_else(|| field(content, "practice_words")) {
        Some(Value::String(joined)) => parse_practice_string(joined),
        Some(value) => word_records(value),
        None => Vec::new(),
    }
}

/// Parses the legacy `word:explanation;word:explanation` format.
pub fn parse_practice_string(joined: &str) -> Vec<WordRecord> {
    joined
        .split(';')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| {
            let mut parts = pair.split(':');
            let word = parts.next().unwrap_or_default().trim();
            let explanation = parts
                .next()
                .map(str::trim)
                .filter(|explanation| !explanation.is_empty())
                .unwrap_or(NO_EXPLANATION);
            WordRecord {
                word: word.to_string(),
                explanation: Some(explanation.to_string()),
                ..WordRecord::default()
            }
        })
        .collect()
}
