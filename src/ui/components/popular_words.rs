use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use crate::lesson::cursor::Cursor;
use crate::lesson::model::WordRecord;
use crate::ui::components::{placeholder, render_lines, visible_range, word_heading};
use crate::ui::theme::Theme;

const COLUMNS: usize = 3;
const CARD_HEIGHT: u16 = 6;

/// Numbered card grid, three cards per row, scrolled to keep the selection
/// on screen.
pub struct PopularWordsView<'a> {
    pub words: &'a [WordRecord],
    pub cursor: &'a Cursor,
    pub theme: &'a Theme,
}

impl Widget for PopularWordsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(CARD_HEIGHT)])
            .split(area);

        render_lines(
            vec![Line::from(Span::styled(
                "Most Common Greek Words",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ))],
            layout[0],
            buf,
        );

        if self.words.is_empty() {
            placeholder("No popular words available", self.theme, layout[1], buf);
            return;
        }

        let grid = layout[1];
        let selected = self.cursor.index();
        let row_count = self.words.len().div_ceil(COLUMNS);
        let visible_rows = ((grid.height / CARD_HEIGHT) as usize).max(1);
        let rows = visible_range(selected / COLUMNS, row_count, visible_rows);

        for (slot, row) in rows.enumerate() {
            let row_area = Rect::new(
                grid.x,
                grid.y + slot as u16 * CARD_HEIGHT,
                grid.width,
                CARD_HEIGHT.min(grid.height.saturating_sub(slot as u16 * CARD_HEIGHT)),
            );
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .split(row_area);

            for (col, cell) in cells.iter().enumerate() {
                let index = row * COLUMNS + col;
                let Some(word) = self.words.get(index) else {
                    break;
                };
                let border = if index == selected {
                    colors.border_focused()
                } else {
                    colors.border()
                };
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border));
                let inner = block.inner(*cell);
                block.render(*cell, buf);

                let mut lines = word_heading(word, self.theme);
                lines.push(Line::from(Span::styled(
                    format!("Word #{}", index + 1),
                    Style::default().fg(colors.text_muted()),
                )));
                render_lines(lines, inner, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    fn words(count: usize) -> Vec<WordRecord> {
        (0..count)
            .map(|i| WordRecord {
                word: format!("w{i}"),
                transliteration: format!("t{i}"),
                translation: format!("tr{i}"),
                ..WordRecord::default()
            })
            .collect()
    }

    fn render(words: &[WordRecord], cursor: &Cursor) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 90, 14);
        let mut buf = Buffer::empty(area);
        PopularWordsView {
            words,
            cursor,
            theme: &theme,
        }
        .render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_cards_are_numbered() {
        let words = words(4);
        let cursor = Cursor::new(words.len());
        let text = render(&words, &cursor);
        assert!(text.contains("Most Common Greek Words"));
        assert!(text.contains("Word #1"));
        assert!(text.contains("Word #4"));
        assert!(text.contains("tr2"));
    }

    #[test]
    fn test_grid_scrolls_to_selection() {
        let words = words(12);
        let mut cursor = Cursor::new(words.len());
        cursor.previous();
        let text = render(&words, &cursor);
        assert!(text.contains("Word #12"));
        assert!(!text.contains("Word #1 "));
    }

    #[test]
    fn test_empty_renders_placeholder() {
        let cursor = Cursor::new(0);
        assert!(render(&[], &cursor).contains("No popular words available"));
    }
}
