use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use serde_json::json;

use glossa::api::client::LessonSource;
use glossa::app::{App, AppScreen};
use glossa::config::Config;
use glossa::error::LessonError;
use glossa::event::AppEvent;
use glossa::lesson::model::{Language, RawLesson, RawLessonDetail};
use glossa::lesson::normalize::LessonType;
use glossa::ui::components::lesson_viewer::LessonViewer;
use glossa::ui::theme::Theme;

struct GreekServer;

impl LessonSource for GreekServer {
    fn languages(&self) -> Result<Vec<Language>, LessonError> {
        Ok(vec![Language {
            code: "el".to_string(),
            name: "Greek".to_string(),
            native_name: "Ελληνικά".to_string(),
            flag: String::new(),
        }])
    }

    fn lessons(&self, language_code: &str) -> Result<Vec<RawLesson>, LessonError> {
        assert_eq!(language_code, "el");
        Ok(vec![RawLesson {
            id: "3".to_string(),
            title: "Basic Greetings and Farewells".to_string(),
            level: "1".to_string(),
            category: "Basics".to_string(),
            lesson_type: "vocabulary".to_string(),
            description: "Say hello and goodbye".to_string(),
        }])
    }

    fn lesson_detail(
        &self,
        language_code: &str,
        lesson_id: &str,
    ) -> Result<RawLessonDetail, LessonError> {
        assert_eq!((language_code, lesson_id), ("el", "3"));
        Ok(RawLessonDetail {
            id: "3".to_string(),
            title: "Basic Greetings and Farewells".to_string(),
            level: "1".to_string(),
            lesson_type: "vocabulary".to_string(),
            content: json!({"words": [{"word": "Γειά", "translation": "Hello"}]}),
        })
    }
}

fn pump(app: &mut App, rx: &mpsc::Receiver<AppEvent>, count: usize) {
    for _ in 0..count {
        match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::Fetched(response)) => app.handle_fetch(response),
            Ok(_) => panic!("unexpected event"),
            Err(err) => panic!("no response: {err}"),
        }
    }
}

fn screen_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn make_app() -> (App, mpsc::Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let config = Config {
        language: "el".to_string(),
        ..Config::default()
    };
    let app = App::new(config, Theme::default(), Arc::new(GreekServer), tx, None);
    (app, rx)
}

#[test]
fn greetings_lesson_renders_from_catalog() {
    let (mut app, rx) = make_app();
    app.refresh();
    pump(&mut app, &rx, 2);
    assert_eq!(app.language_label(), "Greek (Ελληνικά)");
    assert_eq!(app.lessons.len(), 1);

    app.start_lesson();
    pump(&mut app, &rx, 1);
    assert_eq!(app.screen, AppScreen::Lesson);

    let view = app.lesson_view.as_ref().expect("lesson opened");
    assert_eq!(view.lesson.lesson_type, LessonType::Greetings);
    assert_eq!(view.lesson.raw_lesson_type, "vocabulary");
    assert_eq!(view.lesson.words.len(), 1);

    let area = Rect::new(0, 0, 80, 16);
    let mut buf = Buffer::empty(area);
    LessonViewer {
        view,
        theme: app.theme,
    }
    .render(area, &mut buf);
    let text = screen_text(&buf);
    assert!(text.contains("Γειά"));
    assert!(text.contains("Hello"));
}

#[test]
fn closing_before_detail_arrives_keeps_catalog() {
    let (mut app, rx) = make_app();
    app.load_lessons();
    pump(&mut app, &rx, 1);

    app.start_lesson();
    app.close_lesson();
    pump(&mut app, &rx, 1);

    assert_eq!(app.screen, AppScreen::Catalog);
    assert!(app.lesson_view.is_none());
    assert!(app.status.is_none());
}
