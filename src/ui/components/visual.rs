use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use crate::lesson::cursor::Cursor;
use crate::lesson::model::WordRecord;
use crate::ui::components::{bullets, labeled, placeholder, render_lines, word_heading};
use crate::ui::theme::Theme;

pub struct VisualView<'a> {
    pub tips: &'a [String],
    pub words: &'a [WordRecord],
    pub cursor: &'a Cursor,
    pub theme: &'a Theme,
}

impl Widget for VisualView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let tips_height = if self.tips.is_empty() {
            0
        } else {
            self.tips.len() as u16 + 2
        };
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(tips_height), Constraint::Min(4)])
            .split(area);

        if !self.tips.is_empty() {
            let mut lines = vec![Line::from(Span::styled(
                "Visualization Tips",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ))];
            lines.extend(bullets(self.tips, self.theme));
            render_lines(lines, layout[0], buf);
        }

        let Some(word) = self.cursor.current(self.words) else {
            placeholder("No visual words available", self.theme, layout[1], buf);
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border_focused()))
            .title(Span::styled(
                format!(
                    " Word {} ",
                    self.cursor.position_label().unwrap_or_default()
                ),
                Style::default().fg(colors.header_fg()),
            ));
        let inner = block.inner(layout[1]);
        block.render(layout[1], buf);

        let mut lines = word_heading(word, self.theme);
        lines.push(Line::from(""));
        if let Some(visual) = word.visual.as_deref() {
            lines.push(Line::from(Span::styled(
                visual,
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        if let Some(hint) = word.visual_hint.as_deref() {
            lines.push(labeled("Visual Hint:", hint, colors.hint()));
        }
        match (self.cursor.revealed(), word.visualization_text.as_deref()) {
            (true, Some(detail)) => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Detailed Visualization:",
                    Style::default()
                        .fg(colors.answer())
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    detail,
                    Style::default().fg(colors.fg()),
                )));
            }
            (false, Some(_)) => lines.push(Line::from(Span::styled(
                "[space] Show detailed visualization",
                Style::default().fg(colors.text_muted()),
            ))),
            (_, None) => {}
        }
        render_lines(lines, inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    fn render(tips: &[String], words: &[WordRecord], cursor: &Cursor) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        VisualView {
            tips,
            words,
            cursor,
            theme: &theme,
        }
        .render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_visualization_behind_reveal() {
        let tips = vec!["Picture the object vividly".to_string()];
        let words = vec![WordRecord {
            word: "μήλο".to_string(),
            translation: "apple".to_string(),
            visual: Some("🍎".to_string()),
            visual_hint: Some("A red apple on a white plate".to_string()),
            visualization_text: Some("Imagine biting into a crisp apple".to_string()),
            ..WordRecord::default()
        }];
        let mut cursor = Cursor::new(words.len());

        let text = render(&tips, &words, &cursor);
        assert!(text.contains("Visualization Tips"));
        assert!(text.contains("Picture the object vividly"));
        assert!(text.contains("Visual Hint: A red apple"));
        assert!(!text.contains("Detailed Visualization:"));

        cursor.toggle_reveal();
        let text = render(&tips, &words, &cursor);
        assert!(text.contains("Detailed Visualization:"));
        assert!(text.contains("crisp apple"));
    }

    #[test]
    fn test_no_words_keeps_tips() {
        let tips = vec!["Use color".to_string()];
        let cursor = Cursor::new(0);
        let text = render(&tips, &[], &cursor);
        assert!(text.contains("Use color"));
        assert!(text.contains("No visual words available"));
    }
}
