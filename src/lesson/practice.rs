use serde_json::Value;

use crate::error::LessonError;
use crate::lesson::model::{WordRecord, field};
use crate::lesson::normalize::{NO_EXPLANATION, parse_practice_string};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticePhrase {
    pub word: String,
    pub explanation: String,
}

impl PracticePhrase {
    fn from_record(record: WordRecord) -> Self {
        let explanation = record
            .mnemonic
            .or(record.context)
            .or_else(|| Some(record.translation).filter(|t| !t.is_empty()))
            .or(record.explanation)
            .unwrap_or_else(|| NO_EXPLANATION.to_string());
        Self {
            word: record.word,
            explanation,
        }
    }
}

/// Collects `content.practice_words` as phrases. Fails when the lesson has no
/// content or no practice words at all.
pub fn practice_phrases(content: &Value) -> Result<Vec<PracticePhrase>, LessonError> {
    if !content.is_object() {
        return Err(LessonError::missing("No content found in lesson"));
    }

    let phrases: Vec<PracticePhrase> = match field(content, "practice_words") {
        Some(Value::String(joined)) => parse_practice_string(joined)
            .into_iter()
            .map(PracticePhrase::from_record)
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(WordRecord::from_value)
            .map(PracticePhrase::from_record)
            .collect(),
        _ => Vec::new(),
    };

    if phrases.is_empty() {
        return Err(LessonError::missing(
            "No practice words found in lesson content",
        ));
    }
    Ok(phrases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_explanation_priority() {
        let content = json!({"practice_words": [
            {"word": "a", "mnemonic": "m", "context": "c", "translation": "t"},
            {"word": "b", "context": "c", "translation": "t"},
            {"word": "c", "translation": "t", "explanation": "e"},
            {"word": "d", "explanation": "e"},
            {"word": "e"},
            "f"
        ]});
        let phrases = practice_phrases(&content).unwrap();
        let explanations: Vec<&str> = phrases.iter().map(|p| p.explanation.as_str()).collect();
        assert_eq!(
            explanations,
            vec!["m", "c", "t", "e", NO_EXPLANATION, NO_EXPLANATION]
        );
        assert_eq!(phrases[5].word, "f");
    }

    #[test]
    fn test_string_format() {
        let phrases = practice_phrases(&json!({"practice_words": "a:1;b"})).unwrap();
        assert_eq!(
            phrases,
            vec![
                PracticePhrase {
                    word: "a".to_string(),
                    explanation: "1".to_string()
                },
                PracticePhrase {
                    word: "b".to_string(),
                    explanation: NO_EXPLANATION.to_string()
                },
            ]
        );
    }

    #[test]
    fn test_missing_content() {
        let err = practice_phrases(&Value::Null).unwrap_err();
        assert_eq!(err, LessonError::missing("No content found in lesson"));
    }

    #[test]
    fn test_no_practice_words() {
        let err = practice_phrases(&json!({"words": [{"word": "a"}]})).unwrap_err();
        assert!(matches!(err, LessonError::MissingContent(_)));
        assert!(practice_phrases(&json!({"practice_words": []})).is_err());
        assert!(practice_phrases(&json!({"practice_words": ""})).is_err());
    }
}
