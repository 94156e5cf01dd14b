use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Language {
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub native_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub flag: String,
}

impl Language {
    pub fn label(&self) -> String {
        let mut label = String::new();
        if !self.flag.is_empty() {
            label.push_str(&self.flag);
            label.push(' ');
        }
        label.push_str(&self.name);
        if !self.native_name.is_empty() {
            label.push_str(&format!(" ({})", self.native_name));
        }
        label
    }
}

/// Catalog entry as returned by the lesson listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawLesson {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub level: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lesson_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

/// Full lesson payload. `content` is kept untyped: its shape depends on the
/// lesson and is only interpreted by the normalizer and the dispatcher.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawLessonDetail {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub level: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lesson_type: String,
    #[serde(default)]
    pub content: Value,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub transliteration: String,
    pub translation: String,
    pub pronunciation: Option<String>,
    pub example: Option<String>,
    pub context: Option<String>,
    pub mnemonic: Option<String>,
    pub visual: Option<String>,
    pub visual_hint: Option<String>,
    pub visualization_text: Option<String>,
    pub category: Option<String>,
    pub explanation: Option<String>,
}

impl WordRecord {
    /// Objects are read field by field; a bare string is taken as the word
    /// itself. Anything else is not a word.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(word) => Some(Self {
                word: word.clone(),
                ..Self::default()
            }),
            Value::Object(_) => Some(Self {
                word: text_field(value, "word").unwrap_or_default(),
                transliteration: text_field(value, "transliteration").unwrap_or_default(),
                translation: text_field(value, "translation").unwrap_or_default(),
                pronunciation: text_field(value, "pronunciation"),
                example: text_field(value, "example"),
                context: text_field(value, "context"),
                mnemonic: text_field(value, "mnemonic"),
                visual: text_field(value, "visual"),
                visual_hint: text_field(value, "visual_hint"),
                visualization_text: text_field(value, "visualization_text"),
                category: text_field(value, "category"),
                explanation: text_field(value, "explanation"),
            }),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Letter {
    pub letter: String,
    pub name: String,
    pub transliteration: String,
    pub pronunciation: String,
    pub example: String,
}

impl Letter {
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Some(Self {
            letter: text_field(value, "letter").unwrap_or_default(),
            name: text_field(value, "name").unwrap_or_default(),
            transliteration: text_field(value, "transliteration").unwrap_or_default(),
            pronunciation: text_field(value, "pronunciation").unwrap_or_default(),
            example: text_field(value, "example")
                .or_else(|| text_field(value, "example_word"))
                .unwrap_or_default(),
        })
    }
}

/// Returns the field when it is present and not `null`.
pub fn field<'a>(content: &'a Value, key: &str) -> Option<&'a Value> {
    content.get(key).filter(|value| !value.is_null())
}

/// Non-empty scalar field rendered as text.
pub fn text_field(content: &Value, key: &str) -> Option<String> {
    field(content, key)
        .map(scalar_to_string)
        .filter(|text| !text.is_empty())
}

/// String entries of an array field; a lone string counts as one entry.
pub fn text_list(content: &Value, key: &str) -> Vec<String> {
    match field(content, key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(scalar_to_string)
            .filter(|text| !text.is_empty())
            .collect(),
        Some(Value::String(text)) if !text.is_empty() => vec![text.clone()],
        _ => Vec::new(),
    }
}

pub fn word_records(value: &Value) -> Vec<WordRecord> {
    match value {
        Value::Array(items) => items.iter().filter_map(WordRecord::from_value).collect(),
        _ => Vec::new(),
    }
}

pub fn letters(content: &Value) -> Vec<Letter> {
    match field(content, "letters") {
        Some(Value::Array(items)) => items.iter().filter_map(Letter::from_value).collect(),
        _ => Vec::new(),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

// The backend sends integer ids, string level codes and explicit nulls.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}
