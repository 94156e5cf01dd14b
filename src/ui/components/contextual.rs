use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use crate::lesson::cursor::Cursor;
use crate::lesson::model::WordRecord;
use crate::ui::components::{labeled, placeholder, render_lines, visible_range};
use crate::ui::theme::Theme;

/// Word list where the selected entry expands into its usage context.
pub struct ContextualView<'a> {
    pub words: &'a [WordRecord],
    pub cursor: &'a Cursor,
    pub theme: &'a Theme,
}

impl Widget for ContextualView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border()))
            .title(Span::styled(
                " Contextual Learning Words ",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.words.is_empty() {
            placeholder("No contextual words available", self.theme, inner, buf);
            return;
        }

        let selected = self.cursor.index();
        // Each entry takes two rows, the selected one up to two more.
        let rows = (inner.height as usize).saturating_sub(2) / 2;
        let mut lines: Vec<Line> = Vec::new();
        for i in visible_range(selected, self.words.len(), rows.max(1)) {
            let word = &self.words[i];
            let is_selected = i == selected;
            let marker = if is_selected { " > " } else { "   " };
            let word_style = if is_selected {
                Style::default()
                    .fg(colors.accent())
                    .bg(colors.selected_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD)
            };
            let mut heading = vec![Span::styled(format!("{marker}{}", word.word), word_style)];
            if !word.transliteration.is_empty() {
                heading.push(Span::styled(
                    format!(" ({})", word.transliteration),
                    Style::default().fg(colors.text_muted()),
                ));
            }
            lines.push(Line::from(heading));
            lines.push(Line::from(Span::styled(
                format!("     {}", word.translation),
                Style::default().fg(colors.fg()),
            )));

            if is_selected && self.cursor.revealed() {
                match word.context.as_deref() {
                    Some(context) => {
                        let mut line = labeled("Context:", context, colors.answer());
                        line.spans.insert(0, Span::raw("     "));
                        lines.push(line);
                    }
                    None => lines.push(Line::from(Span::styled(
                        "     No context provided",
                        Style::default().fg(colors.text_muted()),
                    ))),
                }
            }
        }
        render_lines(lines, inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    fn words() -> Vec<WordRecord> {
        vec![
            WordRecord {
                word: "καφές".to_string(),
                transliteration: "kafés".to_string(),
                translation: "coffee".to_string(),
                context: Some("Θα ήθελα έναν καφέ".to_string()),
                ..WordRecord::default()
            },
            WordRecord {
                word: "νερό".to_string(),
                translation: "water".to_string(),
                ..WordRecord::default()
            },
        ]
    }

    fn render(words: &[WordRecord], cursor: &Cursor) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        ContextualView {
            words,
            cursor,
            theme: &theme,
        }
        .render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_context_hidden_until_revealed() {
        let words = words();
        let mut cursor = Cursor::new(words.len());
        let text = render(&words, &cursor);
        assert!(text.contains("Contextual Learning Words"));
        assert!(text.contains("καφές"));
        assert!(text.contains("water"));
        assert!(!text.contains("Context:"));

        cursor.toggle_reveal();
        let text = render(&words, &cursor);
        assert!(text.contains("Context: Θα ήθελα έναν καφέ"));
    }

    #[test]
    fn test_reveal_without_context() {
        let words = words();
        let mut cursor = Cursor::new(words.len());
        cursor.next();
        cursor.toggle_reveal();
        assert!(render(&words, &cursor).contains("No context provided"));
    }

    #[test]
    fn test_empty_renders_placeholder() {
        let cursor = Cursor::new(0);
        assert!(render(&[], &cursor).contains("No contextual words available"));
    }
}
