use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::lesson::cursor::Cursor;
use crate::lesson::model::WordRecord;
use crate::ui::components::{labeled, placeholder};
use crate::ui::theme::Theme;

/// Flashcard: the word on the front, the answer behind the reveal flag.
pub struct SpacedRepetitionView<'a> {
    pub cards: &'a [WordRecord],
    pub cursor: &'a Cursor,
    pub theme: &'a Theme,
}

impl Widget for SpacedRepetitionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let Some(card) = self.cursor.current(self.cards) else {
            placeholder("No practice content available", self.theme, area, buf);
            return;
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(7),
                Constraint::Length(1),
            ])
            .split(area);

        let position = self.cursor.position_label().unwrap_or_default();
        Paragraph::new(Line::from(vec![
            Span::styled(
                "Spaced Repetition Practice",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   Card {position}"),
                Style::default().fg(colors.text_muted()),
            ),
        ]))
        .render(layout[0], buf);

        let border = if self.cursor.revealed() {
            colors.answer()
        } else {
            colors.border_focused()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(layout[1]);
        block.render(layout[1], buf);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                card.word.as_str(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if self.cursor.revealed() {
            lines.push(Line::from(Span::styled(
                card.translation.as_str(),
                Style::default()
                    .fg(colors.answer())
                    .add_modifier(Modifier::BOLD),
            )));
            if !card.transliteration.is_empty() {
                lines.push(Line::from(Span::styled(
                    card.transliteration.as_str(),
                    Style::default().fg(colors.text_muted()),
                )));
            }
            if let Some(pronunciation) = card.pronunciation.as_deref() {
                lines.push(labeled("Pronunciation:", pronunciation, colors.fg()));
            }
            if let Some(example) = card.example.as_deref() {
                lines.push(labeled("Example:", example, colors.fg()));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "?",
                Style::default().fg(colors.text_muted()),
            )));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        let hint = if self.cursor.revealed() {
            "[space] Hide Answer  [h] Previous  [l] Next"
        } else {
            "[space] Show Answer  [h] Previous  [l] Next"
        };
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(colors.hint()),
        )))
        .alignment(Alignment::Center)
        .render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    fn cards() -> Vec<WordRecord> {
        vec![
            WordRecord {
                word: "σπίτι".to_string(),
                transliteration: "spíti".to_string(),
                translation: "house".to_string(),
                pronunciation: Some("SPEE-tee".to_string()),
                example: Some("Το σπίτι μου".to_string()),
                ..WordRecord::default()
            },
            WordRecord {
                word: "δρόμος".to_string(),
                translation: "road".to_string(),
                ..WordRecord::default()
            },
        ]
    }

    fn render(cards: &[WordRecord], cursor: &Cursor) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 70, 16);
        let mut buf = Buffer::empty(area);
        SpacedRepetitionView {
            cards,
            cursor,
            theme: &theme,
        }
        .render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_front_hides_answer() {
        let cards = cards();
        let cursor = Cursor::new(cards.len());
        let text = render(&cards, &cursor);
        assert!(text.contains("Spaced Repetition Practice"));
        assert!(text.contains("Card 1 of 2"));
        assert!(text.contains("σπίτι"));
        assert!(!text.contains("house"));
        assert!(text.contains("Show Answer"));
    }

    #[test]
    fn test_reveal_shows_answer() {
        let cards = cards();
        let mut cursor = Cursor::new(cards.len());
        cursor.toggle_reveal();
        let text = render(&cards, &cursor);
        assert!(text.contains("house"));
        assert!(text.contains("spíti"));
        assert!(text.contains("SPEE-tee"));
        assert!(text.contains("Hide Answer"));
    }

    #[test]
    fn test_next_card_starts_hidden() {
        let cards = cards();
        let mut cursor = Cursor::new(cards.len());
        cursor.toggle_reveal();
        cursor.next();
        let text = render(&cards, &cursor);
        assert!(text.contains("Card 2 of 2"));
        assert!(text.contains("δρόμος"));
        assert!(!text.contains("road"));
    }

    #[test]
    fn test_empty_renders_placeholder() {
        let cursor = Cursor::new(0);
        assert!(render(&[], &cursor).contains("No practice content available"));
    }
}
