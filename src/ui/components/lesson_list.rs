use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::lesson::cursor::Cursor;
use crate::lesson::model::RawLesson;
use crate::lesson::normalize::LessonType;
use crate::ui::components::{placeholder, visible_range};
use crate::ui::theme::Theme;

const ITEM_HEIGHT: u16 = 3;

/// Lesson catalog for the selected language.
pub struct LessonList<'a> {
    pub language: &'a str,
    pub lessons: &'a [RawLesson],
    pub cursor: &'a Cursor,
    pub loading: bool,
    pub theme: &'a Theme,
}

impl Widget for &LessonList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(inner);

        let title_lines = vec![
            Line::from(Span::styled(
                "glossa",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Lessons · {}", self.language),
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
        ];
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        if self.lessons.is_empty() {
            let message = if self.loading {
                "Loading lessons..."
            } else {
                "No lessons available for this language"
            };
            placeholder(message, self.theme, layout[1], buf);
            return;
        }

        let list_area = layout[1];
        let rows = (list_area.height / ITEM_HEIGHT) as usize;
        let selected = self.cursor.index();

        for (slot, i) in visible_range(selected, self.lessons.len(), rows).enumerate() {
            let lesson = &self.lessons[i];
            let is_selected = i == selected;
            let indicator = if is_selected { ">" } else { " " };
            let icon = LessonType::from_name(&lesson.lesson_type).icon();

            let mut meta = Vec::new();
            if !lesson.level.is_empty() {
                meta.push(format!("Level {}", lesson.level));
            }
            if !lesson.category.is_empty() {
                meta.push(lesson.category.clone());
            }

            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {indicator} {icon} {}", lesson.title),
                        Style::default()
                            .fg(if is_selected {
                                colors.accent()
                            } else {
                                colors.fg()
                            })
                            .add_modifier(if is_selected {
                                Modifier::BOLD
                            } else {
                                Modifier::empty()
                            }),
                    ),
                    Span::styled(
                        format!("  {}", meta.join(" · ")),
                        Style::default().fg(colors.text_muted()),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("     {}", lesson.description),
                    Style::default().fg(colors.text_muted()),
                )),
            ];

            let item_area = Rect::new(
                list_area.x,
                list_area.y + slot as u16 * ITEM_HEIGHT,
                list_area.width,
                ITEM_HEIGHT,
            );
            Paragraph::new(lines).render(item_area, buf);
        }
    }
}
