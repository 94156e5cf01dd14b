use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::lesson::cursor::Cursor;
use crate::lesson::model::WordRecord;
use crate::ui::components::{labeled, placeholder, render_lines, word_heading};
use crate::ui::theme::Theme;

pub struct MnemonicsView<'a> {
    pub description: Option<&'a str>,
    pub words: &'a [WordRecord],
    pub cursor: &'a Cursor,
    pub theme: &'a Theme,
}

impl Widget for MnemonicsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let Some(word) = self.cursor.current(self.words) else {
            placeholder("No mnemonic words available", self.theme, area, buf);
            return;
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(area);

        render_lines(
            vec![
                Line::from(Span::styled(
                    "Mnemonic Devices",
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    self.description
                        .unwrap_or("Memory aids that tie each word to something you know."),
                    Style::default().fg(colors.text_muted()),
                )),
            ],
            layout[0],
            buf,
        );

        render_lines(word_heading(word, self.theme), layout[1], buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.hint()))
            .title(Span::styled(" Memory Aid ", Style::default().fg(colors.hint())));
        let inner = block.inner(layout[2]);
        block.render(layout[2], buf);

        let mut aid = vec![Line::from(Span::styled(
            word.mnemonic.as_deref().unwrap_or("No mnemonic for this word yet"),
            Style::default().fg(colors.fg()).add_modifier(Modifier::ITALIC),
        ))];
        if self.cursor.revealed() {
            aid.push(Line::from(""));
            if let Some(pronunciation) = word.pronunciation.as_deref() {
                aid.push(labeled("Pronunciation:", pronunciation, colors.answer()));
            }
            if let Some(example) = word.example.as_deref() {
                aid.push(labeled("Example:", example, colors.answer()));
            }
        }
        render_lines(aid, inner, buf);

        render_lines(
            vec![Line::from(Span::styled(
                format!(
                    "Word {}",
                    self.cursor.position_label().unwrap_or_default()
                ),
                Style::default().fg(colors.text_muted()),
            ))],
            layout[3],
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    #[test]
    fn test_renders_mnemonic_and_position() {
        let words = vec![
            WordRecord {
                word: "θάλασσα".to_string(),
                translation: "sea".to_string(),
                mnemonic: Some("Thalassa sounds like 'the lasso' thrown into the sea".to_string()),
                example: Some("Η θάλασσα είναι γαλάζια".to_string()),
                ..WordRecord::default()
            },
            WordRecord {
                word: "ήλιος".to_string(),
                ..WordRecord::default()
            },
        ];
        let mut cursor = Cursor::new(words.len());
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 16);

        let mut buf = Buffer::empty(area);
        MnemonicsView {
            description: None,
            words: &words,
            cursor: &cursor,
            theme: &theme,
        }
        .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("θάλασσα"));
        assert!(text.contains("the lasso"));
        assert!(text.contains("Word 1 of 2"));
        assert!(!text.contains("Example:"));

        cursor.toggle_reveal();
        let mut buf = Buffer::empty(area);
        MnemonicsView {
            description: None,
            words: &words,
            cursor: &cursor,
            theme: &theme,
        }
        .render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Example: Η θάλασσα"));
    }

    #[test]
    fn test_empty_renders_placeholder() {
        let cursor = Cursor::new(0);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        MnemonicsView {
            description: None,
            words: &[],
            cursor: &cursor,
            theme: &theme,
        }
        .render(area, &mut buf);
        assert!(buffer_text(&buf).contains("No mnemonic words available"));
    }
}
