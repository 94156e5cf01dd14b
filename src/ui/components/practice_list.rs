use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use crate::lesson::cursor::Cursor;
use crate::lesson::practice::PracticePhrase;
use crate::ui::components::{placeholder, render_lines, visible_range};
use crate::ui::theme::Theme;

/// Phrases of the selected lesson with their explanations.
pub struct PracticeList<'a> {
    pub title: &'a str,
    pub phrases: &'a [PracticePhrase],
    pub cursor: &'a Cursor,
    pub loading: bool,
    pub theme: &'a Theme,
}

impl Widget for PracticeList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border()))
            .title(Span::styled(
                " Practice Mode ",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);
        render_lines(
            vec![Line::from(Span::styled(
                self.title,
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            ))],
            layout[0],
            buf,
        );

        if self.phrases.is_empty() {
            let message = if self.loading {
                "Loading practice words..."
            } else {
                "No practice words to show"
            };
            placeholder(message, self.theme, layout[1], buf);
            return;
        }

        let selected = self.cursor.index();
        let rows = (layout[1].height as usize / 2).max(1);
        let mut lines = Vec::new();
        for i in visible_range(selected, self.phrases.len(), rows) {
            let phrase = &self.phrases[i];
            let (marker, style) = if i == selected {
                (
                    " > ",
                    Style::default()
                        .fg(colors.accent())
                        .bg(colors.selected_bg())
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("   ", Style::default().fg(colors.fg()))
            };
            lines.push(Line::from(Span::styled(
                format!("{marker}{}", phrase.word),
                style,
            )));
            lines.push(Line::from(Span::styled(
                format!("     {}", phrase.explanation),
                Style::default().fg(colors.text_muted()),
            )));
        }
        render_lines(lines, layout[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    #[test]
    fn test_renders_phrases_with_explanations() {
        let phrases = vec![
            PracticePhrase {
                word: "ευχαριστώ".to_string(),
                explanation: "thank you".to_string(),
            },
            PracticePhrase {
                word: "παρακαλώ".to_string(),
                explanation: "please".to_string(),
            },
        ];
        let cursor = Cursor::new(phrases.len());
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        PracticeList {
            title: "Everyday Phrases",
            phrases: &phrases,
            cursor: &cursor,
            loading: false,
            theme: &theme,
        }
        .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Practice Mode"));
        assert!(text.contains("Everyday Phrases"));
        assert!(text.contains(" > ευχαριστώ"));
        assert!(text.contains("please"));
    }

    #[test]
    fn test_loading_state() {
        let cursor = Cursor::new(0);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        PracticeList {
            title: "",
            phrases: &[],
            cursor: &cursor,
            loading: true,
            theme: &theme,
        }
        .render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Loading practice words..."));
    }
}
