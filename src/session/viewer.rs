use tracing::debug;

use crate::error::LessonError;
use crate::lesson::cursor::Cursor;
use crate::lesson::dispatch::{LessonOverview, Variant, VariantConfig, dispatch};
use crate::lesson::model::RawLessonDetail;
use crate::lesson::normalize::{NormalizedLesson, normalize};
use crate::lesson::practice::{PracticePhrase, practice_phrases};

/// An opened lesson: its dispatched variant plus the cursor that variant
/// walks. Re-created from scratch whenever a lesson is opened.
pub struct LessonView {
    pub lesson: NormalizedLesson,
    pub variant: Variant,
    pub overview: LessonOverview,
    pub cursor: Cursor,
}

impl LessonView {
    pub fn open(lesson: NormalizedLesson, config: &VariantConfig) -> Self {
        let variant = dispatch(&lesson, config);
        debug!(
            lesson_id = %lesson.id,
            title = %lesson.title,
            variant = variant.name(),
            items = variant.item_count(),
            "dispatched lesson"
        );
        let overview = LessonOverview::for_lesson(&lesson);
        let cursor = Cursor::new(variant.item_count());
        Self {
            lesson,
            variant,
            overview,
            cursor,
        }
    }

    pub fn from_detail(detail: RawLessonDetail, config: &VariantConfig) -> Self {
        Self::open(normalize(detail), config)
    }

    pub fn next(&mut self) {
        self.cursor.next();
    }

    pub fn previous(&mut self) {
        self.cursor.previous();
    }

    pub fn toggle_reveal(&mut self) {
        self.cursor.toggle_reveal();
    }
}

/// Practice phrases of one lesson, walked with a cursor.
pub struct PracticeView {
    pub title: String,
    pub phrases: Vec<PracticePhrase>,
    pub cursor: Cursor,
    pub loading: bool,
}

impl PracticeView {
    pub fn loading(title: &str) -> Self {
        Self {
            title: title.to_string(),
            phrases: Vec::new(),
            cursor: Cursor::new(0),
            loading: true,
        }
    }

    pub fn from_detail(detail: &RawLessonDetail) -> Result<Self, LessonError> {
        let phrases = practice_phrases(&detail.content)?;
        Ok(Self {
            title: detail.title.clone(),
            cursor: Cursor::new(phrases.len()),
            phrases,
            loading: false,
        })
    }

    pub fn next(&mut self) {
        self.cursor.next();
    }

    pub fn previous(&mut self) {
        self.cursor.previous();
    }
}
