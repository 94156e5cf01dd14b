use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use crate::lesson::cursor::Cursor;
use crate::lesson::model::WordRecord;
use crate::ui::components::{
    labeled, list_row, placeholder, render_lines, visible_range, word_heading,
};
use crate::ui::theme::Theme;

/// Fallback presentation for lessons of an unknown type.
pub struct WordListView<'a> {
    pub words: &'a [WordRecord],
    pub cursor: &'a Cursor,
    pub theme: &'a Theme,
}

fn notes<'a>(word: &'a WordRecord, theme: &Theme) -> Vec<Line<'a>> {
    let colors = &theme.colors;
    let mut lines = Vec::new();
    if let Some(mnemonic) = word.mnemonic.as_deref() {
        lines.push(labeled("Remember it:", mnemonic, colors.hint()));
    }
    if let Some(context) = word.context.as_deref() {
        lines.push(labeled("Usage Context:", context, colors.hint()));
    }
    if let Some(visual) = word.visual.as_deref() {
        lines.push(labeled("Visualize it:", visual, colors.hint()));
    }
    if let Some(explanation) = word.explanation.as_deref() {
        lines.push(Line::from(Span::styled(
            explanation,
            Style::default().fg(colors.fg()),
        )));
    }
    lines
}

impl Widget for WordListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(4)])
            .split(area);

        render_lines(
            vec![Line::from(Span::styled(
                format!("Words to Learn ({} words)", self.words.len()),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ))],
            layout[0],
            buf,
        );

        if self.words.is_empty() {
            placeholder("No words in this lesson", self.theme, layout[1], buf);
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(layout[1]);

        let selected = self.cursor.index();
        let lines: Vec<Line> = visible_range(selected, self.words.len(), columns[0].height as usize)
            .map(|i| {
                let word = &self.words[i];
                list_row(i == selected, word.word.clone(), &word.translation, self.theme)
            })
            .collect();
        render_lines(lines, columns[0], buf);

        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(columns[1]);
        block.render(columns[1], buf);

        if let Some(word) = self.cursor.current(self.words) {
            let mut detail = word_heading(word, self.theme);
            detail.push(Line::from(""));
            detail.extend(notes(word, self.theme));
            render_lines(detail, inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    #[test]
    fn test_renders_count_and_notes() {
        let words = vec![
            WordRecord {
                word: "ψωμί".to_string(),
                translation: "bread".to_string(),
                context: Some("At the bakery".to_string()),
                ..WordRecord::default()
            },
            WordRecord {
                word: "τυρί".to_string(),
                translation: "cheese".to_string(),
                ..WordRecord::default()
            },
        ];
        let cursor = Cursor::new(words.len());
        let theme = Theme::default();
        let area = Rect::new(0, 0, 90, 10);
        let mut buf = Buffer::empty(area);
        WordListView {
            words: &words,
            cursor: &cursor,
            theme: &theme,
        }
        .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Words to Learn (2 words)"));
        assert!(text.contains("τυρί"));
        assert!(text.contains("Usage Context: At the bakery"));
    }

    #[test]
    fn test_empty_renders_placeholder() {
        let cursor = Cursor::new(0);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        WordListView {
            words: &[],
            cursor: &cursor,
            theme: &theme,
        }
        .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Words to Learn (0 words)"));
        assert!(text.contains("No words in this lesson"));
    }
}
