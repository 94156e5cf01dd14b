use serde::de::DeserializeOwned;

use crate::error::LessonError;
use crate::lesson::model::{Language, RawLesson, RawLessonDetail};

/// Read-only access to the lesson catalog.
pub trait LessonSource: Send + Sync {
    fn languages(&self) -> Result<Vec<Language>, LessonError>;

    fn lessons(&self, language_code: &str) -> Result<Vec<RawLesson>, LessonError>;

    fn lesson_detail(
        &self,
        language_code: &str,
        lesson_id: &str,
    ) -> Result<RawLessonDetail, LessonError>;
}

pub struct HttpLessonSource {
    base_url: String,
    #[cfg(feature = "network")]
    client: reqwest::blocking::Client,
}

impl HttpLessonSource {
    #[cfg(feature = "network")]
    pub fn new(base_url: &str) -> Result<Self, LessonError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|err| LessonError::network(base_url, err))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    #[cfg(not(feature = "network"))]
    pub fn new(base_url: &str) -> Result<Self, LessonError> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[cfg(feature = "network")]
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LessonError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|err| LessonError::network(&url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LessonError::network(&url, format!("HTTP {status}")));
        }

        let body = response
            .text()
            .map_err(|err| LessonError::network(&url, err))?;
        serde_json::from_str(&body)
            .map_err(|err| LessonError::network(&url, format!("invalid response body: {err}")))
    }

    #[cfg(not(feature = "network"))]
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LessonError> {
        Err(LessonError::network(
            &self.url(path),
            "built without network support",
        ))
    }
}

impl LessonSource for HttpLessonSource {
    fn languages(&self) -> Result<Vec<Language>, LessonError> {
        self.get_json("/languages")
    }

    fn lessons(&self, language_code: &str) -> Result<Vec<RawLesson>, LessonError> {
        self.get_json(&format!("/lessons/{language_code}"))
    }

    fn lesson_detail(
        &self,
        language_code: &str,
        lesson_id: &str,
    ) -> Result<RawLessonDetail, LessonError> {
        self.get_json(&format!("/lessons/{language_code}/{lesson_id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let source = HttpLessonSource::new("http://localhost:8000/").unwrap();
        assert_eq!(source.base_url(), "http://localhost:8000");
        assert_eq!(source.url("/languages"), "http://localhost:8000/languages");
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let base_url = format!("http://127.0.0.1:{port}");
        let source = HttpLessonSource::new(&base_url).unwrap();
        match source.lessons("el").unwrap_err() {
            LessonError::Network { url, .. } => {
                assert_eq!(url, format!("{base_url}/lessons/el"));
            }
            other => panic!("expected network error, got {other:?}"),
        }
    }
}
