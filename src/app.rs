use std::collections::HashSet;
use std::sync::Arc;
use std::sync::mpsc;

use tracing::{info, warn};

use crate::api::client::LessonSource;
use crate::api::worker::{FetchChannel, FetchPayload, FetchRequest, FetchResponse, FetchWorker};
use crate::config::Config;
use crate::error::LessonError;
use crate::event::AppEvent;
use crate::lesson::cursor::Cursor;
use crate::lesson::model::{Language, RawLesson, RawLessonDetail};
use crate::session::viewer::{LessonView, PracticeView};
use crate::store::selection::{Selection, SelectionStore};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Catalog,
    Lesson,
    Practice,
}

/// Which view the pending lesson detail is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailTarget {
    Viewer,
    Practice,
}

pub struct App {
    pub screen: AppScreen,
    pub config: Config,
    pub theme: &'static Theme,
    pub languages: Vec<Language>,
    pub language_code: String,
    pub lessons: Vec<RawLesson>,
    pub catalog: Cursor,
    pub lesson_view: Option<LessonView>,
    pub practice: Option<PracticeView>,
    pub loading: HashSet<FetchChannel>,
    pub status: Option<String>,
    pub selection_store: Option<SelectionStore>,
    pub should_quit: bool,
    worker: FetchWorker,
    detail_target: DetailTarget,
}

impl App {
    pub fn new(
        config: Config,
        theme: Theme,
        source: Arc<dyn LessonSource>,
        tx: mpsc::Sender<AppEvent>,
        selection_store: Option<SelectionStore>,
    ) -> Self {
        let theme: &'static Theme = Box::leak(Box::new(theme));
        let language_code = config.language.clone();
        Self {
            screen: AppScreen::Catalog,
            config,
            theme,
            languages: Vec::new(),
            language_code,
            lessons: Vec::new(),
            catalog: Cursor::new(0),
            lesson_view: None,
            practice: None,
            loading: HashSet::new(),
            status: None,
            selection_store,
            should_quit: false,
            worker: FetchWorker::new(source, tx),
            detail_target: DetailTarget::Viewer,
        }
    }

    pub fn is_loading(&self, channel: FetchChannel) -> bool {
        self.loading.contains(&channel)
    }

    fn request(&mut self, request: FetchRequest) {
        self.loading.insert(request.channel());
        self.worker.submit(request);
    }

    pub fn refresh_languages(&mut self) {
        self.request(FetchRequest::Languages);
    }

    /// Clears the catalog and any earlier error, then fetches the lessons of
    /// the current language.
    pub fn load_lessons(&mut self) {
        self.status = None;
        self.lessons.clear();
        self.catalog = Cursor::new(0);
        self.request(FetchRequest::Lessons {
            language_code: self.language_code.clone(),
        });
    }

    /// Reloads languages and the lesson catalog.
    pub fn refresh(&mut self) {
        self.refresh_languages();
        self.load_lessons();
    }

    pub fn select_language(&mut self, code: &str) {
        if code == self.language_code {
            return;
        }
        info!(language = code, "language selected");
        self.language_code = code.to_string();
        self.config.language = code.to_string();
        self.load_lessons();
    }

    /// Moves to the neighbouring language of the fetched list.
    pub fn cycle_language(&mut self, forward: bool) {
        if self.languages.is_empty() {
            return;
        }
        let len = self.languages.len();
        let next = match self
            .languages
            .iter()
            .position(|language| language.code == self.language_code)
        {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        let code = self.languages[next].code.clone();
        self.select_language(&code);
    }

    pub fn language_label(&self) -> String {
        self.languages
            .iter()
            .find(|language| language.code == self.language_code)
            .map(Language::label)
            .unwrap_or_else(|| self.language_code.clone())
    }

    pub fn selected_lesson(&self) -> Option<&RawLesson> {
        self.catalog.current(&self.lessons)
    }

    /// Opens the lesson under the catalog cursor and remembers it as the
    /// current selection.
    pub fn start_lesson(&mut self) {
        let Some(lesson) = self.selected_lesson().cloned() else {
            return;
        };
        self.remember(&Selection::new(&self.language_code, &lesson.id, &lesson.title));

        self.status = None;
        self.lesson_view = None;
        self.screen = AppScreen::Lesson;
        self.detail_target = DetailTarget::Viewer;
        self.request(FetchRequest::Detail {
            language_code: self.language_code.clone(),
            lesson_id: lesson.id,
        });
    }

    fn remember(&self, selection: &Selection) {
        if let Some(store) = &self.selection_store {
            if let Err(err) = store.save(selection) {
                warn!(error = %err, "could not store lesson selection");
            }
        }
    }

    /// Practice view for the lesson under the catalog cursor, falling back to
    /// the last stored selection.
    pub fn open_practice(&mut self) {
        let selection = match self.selected_lesson() {
            Some(lesson) => Some(Selection::new(&self.language_code, &lesson.id, &lesson.title)),
            None => self.selection_store.as_ref().and_then(SelectionStore::load),
        };
        match selection {
            Some(selection) => {
                self.remember(&selection);
                self.open_practice_for(&selection);
            }
            None => self.fail(LessonError::missing("No lesson selected")),
        }
    }

    pub fn open_practice_for(&mut self, selection: &Selection) {
        self.status = None;
        self.practice = Some(PracticeView::loading(&selection.lesson_title));
        self.screen = AppScreen::Practice;
        self.detail_target = DetailTarget::Practice;
        self.request(FetchRequest::Detail {
            language_code: selection.language_code.clone(),
            lesson_id: selection.lesson_id.clone(),
        });
    }

    /// Leaves the lesson or practice view. A detail still in flight is
    /// discarded when it arrives.
    pub fn close_lesson(&mut self) {
        self.worker.cancel(FetchChannel::Detail);
        self.loading.remove(&FetchChannel::Detail);
        self.lesson_view = None;
        self.practice = None;
        self.screen = AppScreen::Catalog;
    }

    pub fn handle_fetch(&mut self, response: FetchResponse) {
        if !self.worker.accepts(&response) {
            warn!(
                channel = ?response.channel,
                generation = response.generation,
                "discarding stale response"
            );
            return;
        }
        self.loading.remove(&response.channel);

        match response.result {
            Ok(FetchPayload::Languages(languages)) => self.languages = languages,
            Ok(FetchPayload::Lessons(lessons)) => {
                self.catalog = Cursor::new(lessons.len());
                self.lessons = lessons;
            }
            Ok(FetchPayload::Detail(detail)) => self.apply_detail(detail),
            Err(err) => self.fail(err),
        }
    }

    fn apply_detail(&mut self, detail: RawLessonDetail) {
        match self.detail_target {
            DetailTarget::Viewer => {
                let config = self.config.variant_config();
                self.lesson_view = Some(LessonView::from_detail(detail, &config));
            }
            DetailTarget::Practice => match PracticeView::from_detail(&detail) {
                Ok(practice) => self.practice = Some(practice),
                Err(err) => {
                    if let Some(practice) = self.practice.as_mut() {
                        practice.loading = false;
                    }
                    self.fail(err);
                }
            },
        }
    }

    fn fail(&mut self, err: LessonError) {
        warn!(error = %err, "lesson request failed");
        self.status = Some(err.to_string());
    }
}
