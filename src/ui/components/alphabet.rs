use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::lesson::cursor::Cursor;
use crate::lesson::model::Letter;
use crate::ui::components::{placeholder, render_lines};
use crate::ui::theme::Theme;

pub const ROW_LEN: usize = 6;
const CELL_WIDTH: usize = 9;

/// Groups letters into grid rows; the last row may be short.
pub fn letter_rows(letters: &[Letter]) -> Vec<&[Letter]> {
    letters.chunks(ROW_LEN).collect()
}

pub struct AlphabetView<'a> {
    pub introduction: Option<&'a str>,
    pub description: Option<&'a str>,
    pub letters: &'a [Letter],
    pub cursor: &'a Cursor,
    pub theme: &'a Theme,
}

impl Widget for AlphabetView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        if self.letters.is_empty() {
            placeholder("No alphabet content available", self.theme, area, buf);
            return;
        }

        let rows = letter_rows(self.letters);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(rows.len() as u16 * 2),
                Constraint::Min(0),
            ])
            .split(area);

        render_lines(
            vec![
                Line::from(Span::styled(
                    self.introduction.unwrap_or("Greek Alphabet"),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    self.description
                        .unwrap_or("Learn the Greek alphabet and its pronunciation."),
                    Style::default().fg(colors.fg()),
                )),
            ],
            layout[0],
            buf,
        );

        let selected = self.cursor.index();
        let mut grid: Vec<Line> = Vec::with_capacity(rows.len() * 2);
        for (row_idx, row) in rows.iter().enumerate() {
            let glyphs = row
                .iter()
                .enumerate()
                .map(|(col, letter)| {
                    let style = if row_idx * ROW_LEN + col == selected {
                        Style::default()
                            .fg(colors.accent())
                            .bg(colors.selected_bg())
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD)
                    };
                    Span::styled(format!("{:^CELL_WIDTH$}", letter.letter), style)
                })
                .collect::<Vec<_>>();
            let names = row
                .iter()
                .map(|letter| {
                    Span::styled(
                        format!("{:^CELL_WIDTH$}", letter.name),
                        Style::default().fg(colors.text_muted()),
                    )
                })
                .collect::<Vec<_>>();
            grid.push(Line::from(glyphs));
            grid.push(Line::from(names));
        }
        render_lines(grid, layout[1], buf);

        if let Some(letter) = self.cursor.current(self.letters) {
            let mut detail = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{}  {}", letter.letter, letter.name),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Transliteration: {}", letter.transliteration)),
            ];
            if self.cursor.revealed() {
                detail.push(Line::from(format!("Pronunciation: {}", letter.pronunciation)));
                detail.push(Line::from(Span::styled(
                    format!("Example: {}", letter.example),
                    Style::default().fg(colors.text_muted()),
                )));
            } else {
                detail.push(Line::from(Span::styled(
                    "[space] Pronunciation and example",
                    Style::default().fg(colors.hint()),
                )));
            }
            render_lines(detail, layout[2], buf);
        }
    }
}
