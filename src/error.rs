use thiserror::Error;

/// Failures surfaced to the user from a fetch boundary or from content that
/// lacks what a view needs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LessonError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },
    #[error("{0}")]
    MissingContent(String),
}

impl LessonError {
    pub fn network(url: &str, reason: impl ToString) -> Self {
        LessonError::Network {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn missing(what: &str) -> Self {
        LessonError::MissingContent(what.to_string())
    }
}
