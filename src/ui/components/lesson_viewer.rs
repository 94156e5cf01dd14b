use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::lesson::dispatch::Variant;
use crate::session::viewer::LessonView;
use crate::ui::components::alphabet::AlphabetView;
use crate::ui::components::contextual::ContextualView;
use crate::ui::components::greetings::GreetingsView;
use crate::ui::components::mnemonics::MnemonicsView;
use crate::ui::components::popular_words::PopularWordsView;
use crate::ui::components::spaced_repetition::SpacedRepetitionView;
use crate::ui::components::visual::VisualView;
use crate::ui::components::word_list::WordListView;
use crate::ui::theme::Theme;

/// Draws the opened lesson with the renderer its variant selects.
pub struct LessonViewer<'a> {
    pub view: &'a LessonView,
    pub theme: &'a Theme,
}

impl Widget for LessonViewer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cursor = &self.view.cursor;
        let theme = self.theme;
        match &self.view.variant {
            Variant::Alphabet {
                introduction,
                description,
                letters,
            } => AlphabetView {
                introduction: introduction.as_deref(),
                description: description.as_deref(),
                letters,
                cursor,
                theme,
            }
            .render(area, buf),
            Variant::Greetings {
                introduction,
                description,
                greetings,
                situations,
            } => GreetingsView {
                introduction: introduction.as_deref(),
                description: description.as_deref(),
                greetings,
                situations,
                cursor,
                theme,
            }
            .render(area, buf),
            Variant::SpacedRepetition { cards } => SpacedRepetitionView {
                cards,
                cursor,
                theme,
            }
            .render(area, buf),
            Variant::Mnemonics { description, words } => MnemonicsView {
                description: description.as_deref(),
                words,
                cursor,
                theme,
            }
            .render(area, buf),
            Variant::Visual { tips, words } => VisualView {
                tips,
                words,
                cursor,
                theme,
            }
            .render(area, buf),
            Variant::Contextual { words } => ContextualView {
                words,
                cursor,
                theme,
            }
            .render(area, buf),
            Variant::PopularWords { words } => PopularWordsView {
                words,
                cursor,
                theme,
            }
            .render(area, buf),
            Variant::WordList { words } => WordListView {
                words,
                cursor,
                theme,
            }
            .render(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::lesson::dispatch::{PopularWordsVariant, VariantConfig};
    use crate::lesson::model::RawLessonDetail;
    use crate::lesson::normalize::POPULAR_WORDS_TITLE;
    use crate::ui::components::buffer_text;

    fn render(view: &LessonView) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);
        LessonViewer { view, theme: &theme }.render(area, &mut buf);
        buffer_text(&buf)
    }

    fn open(title: &str, lesson_type: &str, config: VariantConfig) -> LessonView {
        LessonView::from_detail(
            RawLessonDetail {
                id: "1".to_string(),
                title: title.to_string(),
                level: "1".to_string(),
                lesson_type: lesson_type.to_string(),
                content: json!({
                    "words": [{"word": "λέξη", "translation": "word"}],
                    "practice_words": [{"word": "και", "translation": "and"}]
                }),
            },
            &config,
        )
    }

    #[test]
    fn test_popular_words_follow_config() {
        let grid = open(POPULAR_WORDS_TITLE, "", VariantConfig::default());
        let text = render(&grid);
        assert!(text.contains("Most Common Greek Words"));
        assert!(text.contains("και"));

        let list = open(
            POPULAR_WORDS_TITLE,
            "",
            VariantConfig {
                popular_words: PopularWordsVariant::WordList,
            },
        );
        let text = render(&list);
        assert!(text.contains("Words to Learn (1 words)"));
        assert!(text.contains("λέξη"));
    }

    #[test]
    fn test_unknown_type_falls_back_to_word_list() {
        let view = open("Food Vocabulary", "cooking", VariantConfig::default());
        assert!(render(&view).contains("Words to Learn"));
    }

    #[test]
    fn test_spaced_repetition_dispatch() {
        let view = open("Spaced Repetition Practice", "", VariantConfig::default());
        let text = render(&view);
        assert!(text.contains("Card 1 of 1"));
        assert!(text.contains("λέξη"));
    }
}
