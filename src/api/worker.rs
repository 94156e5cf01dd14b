use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use crate::api::client::LessonSource;
use crate::error::LessonError;
use crate::event::AppEvent;
use crate::lesson::model::{Language, RawLesson, RawLessonDetail};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchChannel {
    Languages,
    Lessons,
    Detail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchRequest {
    Languages,
    Lessons {
        language_code: String,
    },
    Detail {
        language_code: String,
        lesson_id: String,
    },
}

impl FetchRequest {
    pub fn channel(&self) -> FetchChannel {
        match self {
            FetchRequest::Languages => FetchChannel::Languages,
            FetchRequest::Lessons { .. } => FetchChannel::Lessons,
            FetchRequest::Detail { .. } => FetchChannel::Detail,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchPayload {
    Languages(Vec<Language>),
    Lessons(Vec<RawLesson>),
    Detail(RawLessonDetail),
}

pub struct FetchResponse {
    pub channel: FetchChannel,
    pub generation: u64,
    pub result: Result<FetchPayload, LessonError>,
}

/// Latest issued generation per channel. Only a response carrying the
/// latest generation of its channel may be applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generations {
    languages: u64,
    lessons: u64,
    detail: u64,
}

impl Generations {
    fn slot(&mut self, channel: FetchChannel) -> &mut u64 {
        match channel {
            FetchChannel::Languages => &mut self.languages,
            FetchChannel::Lessons => &mut self.lessons,
            FetchChannel::Detail => &mut self.detail,
        }
    }

    pub fn begin(&mut self, channel: FetchChannel) -> u64 {
        let slot = self.slot(channel);
        *slot += 1;
        *slot
    }

    pub fn latest(&self, channel: FetchChannel) -> u64 {
        match channel {
            FetchChannel::Languages => self.languages,
            FetchChannel::Lessons => self.lessons,
            FetchChannel::Detail => self.detail,
        }
    }

    pub fn is_current(&self, channel: FetchChannel, generation: u64) -> bool {
        self.latest(channel) == generation
    }
}

/// Runs each request on its own thread and posts the outcome back as an
/// [`AppEvent::Fetched`].
pub struct FetchWorker {
    source: Arc<dyn LessonSource>,
    tx: mpsc::Sender<AppEvent>,
    generations: Generations,
}

impl FetchWorker {
    pub fn new(source: Arc<dyn LessonSource>, tx: mpsc::Sender<AppEvent>) -> Self {
        Self {
            source,
            tx,
            generations: Generations::default(),
        }
    }

    pub fn submit(&mut self, request: FetchRequest) -> u64 {
        let channel = request.channel();
        let generation = self.generations.begin(channel);
        tracing::debug!(?request, generation, "fetch started");

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = execute(source.as_ref(), &request);
            let _ = tx.send(AppEvent::Fetched(FetchResponse {
                channel,
                generation,
                result,
            }));
        });
        generation
    }

    /// Whether a completed response is still the latest for its channel.
    pub fn accepts(&self, response: &FetchResponse) -> bool {
        self.generations
            .is_current(response.channel, response.generation)
    }

    /// Makes every in-flight request on `channel` stale.
    pub fn cancel(&mut self, channel: FetchChannel) {
        self.generations.begin(channel);
    }
}

fn execute(
    source: &dyn LessonSource,
    request: &FetchRequest,
) -> Result<FetchPayload, LessonError> {
    match request {
        FetchRequest::Languages => source.languages().map(FetchPayload::Languages),
        FetchRequest::Lessons { language_code } => {
            source.lessons(language_code).map(FetchPayload::Lessons)
        }
        FetchRequest::Detail {
            language_code,
            lesson_id,
        } => source
            .lesson_detail(language_code, lesson_id)
            .map(FetchPayload::Detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct StaticSource;

    impl LessonSource for StaticSource {
        fn languages(&self) -> Result<Vec<Language>, LessonError> {
            Ok(Vec::new())
        }

        fn lessons(&self, language_code: &str) -> Result<Vec<RawLesson>, LessonError> {
            Ok(vec![RawLesson {
                id: "1".to_string(),
                title: format!("lesson for {language_code}"),
                ..RawLesson::default()
            }])
        }

        fn lesson_detail(
            &self,
            _language_code: &str,
            lesson_id: &str,
        ) -> Result<RawLessonDetail, LessonError> {
            Err(LessonError::network(&format!("/x/{lesson_id}"), "HTTP 404"))
        }
    }

    fn recv_fetched(rx: &mpsc::Receiver<AppEvent>) -> FetchResponse {
        match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::Fetched(response)) => response,
            Ok(_) => panic!("unexpected event"),
            Err(err) => panic!("no response: {err}"),
        }
    }

    #[test]
    fn test_generations_are_per_channel() {
        let mut generations = Generations::default();
        assert_eq!(generations.begin(FetchChannel::Lessons), 1);
        assert_eq!(generations.begin(FetchChannel::Lessons), 2);
        assert_eq!(generations.begin(FetchChannel::Detail), 1);
        assert!(generations.is_current(FetchChannel::Lessons, 2));
        assert!(!generations.is_current(FetchChannel::Lessons, 1));
        assert!(generations.is_current(FetchChannel::Detail, 1));
    }

    #[test]
    fn test_only_latest_response_is_accepted() {
        let (tx, rx) = mpsc::channel();
        let mut worker = FetchWorker::new(Arc::new(StaticSource), tx);
        let first = worker.submit(FetchRequest::Lessons {
            language_code: "el".to_string(),
        });
        let second = worker.submit(FetchRequest::Lessons {
            language_code: "fr".to_string(),
        });
        assert!(second > first);

        let responses = [recv_fetched(&rx), recv_fetched(&rx)];
        let accepted: Vec<&FetchResponse> =
            responses.iter().filter(|r| worker.accepts(r)).collect();
        assert_eq!(accepted.len(), 1);
        match &accepted[0].result {
            Ok(FetchPayload::Lessons(lessons)) => assert_eq!(lessons[0].title, "lesson for fr"),
            _ => panic!("expected lessons payload"),
        }
    }

    #[test]
    fn test_cancel_makes_in_flight_stale() {
        let (tx, rx) = mpsc::channel();
        let mut worker = FetchWorker::new(Arc::new(StaticSource), tx);
        worker.submit(FetchRequest::Detail {
            language_code: "el".to_string(),
            lesson_id: "3".to_string(),
        });
        worker.cancel(FetchChannel::Detail);
        let response = recv_fetched(&rx);
        assert!(!worker.accepts(&response));
        assert!(matches!(response.result, Err(LessonError::Network { .. })));
    }
}
