use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use crate::lesson::cursor::Cursor;
use crate::lesson::model::WordRecord;
use crate::ui::components::{
    bullets, labeled, list_row, placeholder, render_lines, visible_range, word_heading,
};
use crate::ui::theme::Theme;

pub struct GreetingsView<'a> {
    pub introduction: Option<&'a str>,
    pub description: Option<&'a str>,
    pub greetings: &'a [WordRecord],
    pub situations: &'a [String],
    pub cursor: &'a Cursor,
    pub theme: &'a Theme,
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Widget for GreetingsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        if self.greetings.is_empty() {
            placeholder("No greetings available", self.theme, area, buf);
            return;
        }

        let mut header = vec![Line::from(Span::styled(
            self.introduction.unwrap_or("Greetings and Farewells"),
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(description) = self.description {
            header.push(Line::from(Span::styled(
                description,
                Style::default().fg(colors.fg()),
            )));
        }
        let header_height = header.len() as u16 + 1;
        let situations_height = if self.situations.is_empty() {
            0
        } else {
            self.situations.len() as u16 + 2
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(4),
                Constraint::Length(situations_height),
            ])
            .split(area);
        render_lines(header, layout[0], buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(layout[1]);

        let list_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border()))
            .title(Span::styled(
                format!(
                    " Greeting {} ",
                    self.cursor.position_label().unwrap_or_default()
                ),
                Style::default().fg(colors.header_fg()),
            ));
        let list_inner = list_block.inner(columns[0]);
        list_block.render(columns[0], buf);

        let selected = self.cursor.index();
        let rows = visible_range(selected, self.greetings.len(), list_inner.height as usize);
        let lines: Vec<Line> = rows
            .map(|i| {
                let greeting = &self.greetings[i];
                list_row(
                    i == selected,
                    greeting.word.clone(),
                    &greeting.translation,
                    self.theme,
                )
            })
            .collect();
        render_lines(lines, list_inner, buf);

        let detail_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border_focused()));
        let detail_inner = detail_block.inner(columns[1]);
        detail_block.render(columns[1], buf);

        if let Some(greeting) = self.cursor.current(self.greetings) {
            let mut detail = word_heading(greeting, self.theme);
            if let Some(pronunciation) = greeting.pronunciation.as_deref() {
                detail.push(labeled("Pronunciation:", pronunciation, colors.text_muted()));
            }
            detail.push(Line::from(""));
            if self.cursor.revealed() {
                if let Some(category) = greeting.category.as_deref() {
                    detail.push(Line::from(Span::styled(
                        capitalize(category),
                        Style::default()
                            .fg(colors.hint())
                            .add_modifier(Modifier::BOLD),
                    )));
                }
                match greeting.context.as_deref() {
                    Some(context) => detail.push(labeled("Usage:", context, colors.answer())),
                    None => detail.push(Line::from(Span::styled(
                        "No usage notes for this greeting",
                        Style::default().fg(colors.text_muted()),
                    ))),
                }
            } else {
                detail.push(Line::from(Span::styled(
                    "[space] Show usage",
                    Style::default().fg(colors.hint()),
                )));
            }
            render_lines(detail, detail_inner, buf);
        }

        if !self.situations.is_empty() {
            let mut lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Practice Scenarios",
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
            ];
            lines.extend(bullets(self.situations, self.theme));
            render_lines(lines, layout[2], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    fn render(view: GreetingsView, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        buffer_text(&buf)
    }

    fn hello() -> WordRecord {
        WordRecord {
            word: "Γειά".to_string(),
            translation: "Hello".to_string(),
            context: Some("Informal, any time of day".to_string()),
            category: Some("informal".to_string()),
            ..WordRecord::default()
        }
    }

    #[test]
    fn test_renders_word_and_translation() {
        let greetings = vec![hello()];
        let cursor = Cursor::new(1);
        let theme = Theme::default();
        let text = render(
            GreetingsView {
                introduction: None,
                description: None,
                greetings: &greetings,
                situations: &[],
                cursor: &cursor,
                theme: &theme,
            },
            80,
            12,
        );
        assert!(text.contains("Γειά"));
        assert!(text.contains("Hello"));
        assert!(text.contains("Greeting 1 of 1"));
        assert!(!text.contains("Informal, any time"));
    }

    #[test]
    fn test_reveal_shows_category_and_context() {
        let greetings = vec![hello()];
        let mut cursor = Cursor::new(1);
        cursor.toggle_reveal();
        let theme = Theme::default();
        let situations = vec!["Meeting a neighbour".to_string()];
        let text = render(
            GreetingsView {
                introduction: Some("Say hello"),
                description: None,
                greetings: &greetings,
                situations: &situations,
                cursor: &cursor,
                theme: &theme,
            },
            100,
            16,
        );
        assert!(text.contains("Informal"));
        assert!(text.contains("Informal, any time of day"));
        assert!(text.contains("Practice Scenarios"));
        assert!(text.contains("Meeting a neighbour"));
    }

    #[test]
    fn test_empty_renders_placeholder() {
        let cursor = Cursor::new(0);
        let theme = Theme::default();
        let text = render(
            GreetingsView {
                introduction: None,
                description: None,
                greetings: &[],
                situations: &[],
                cursor: &cursor,
                theme: &theme,
            },
            40,
            4,
        );
        assert!(text.contains("No greetings available"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("formal"), "Formal");
        assert_eq!(capitalize(""), "");
    }
}
