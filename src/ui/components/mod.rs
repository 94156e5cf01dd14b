pub mod alphabet;
pub mod contextual;
pub mod greetings;
pub mod lesson_list;
pub mod lesson_viewer;
pub mod mnemonics;
pub mod overview;
pub mod popular_words;
pub mod practice_list;
pub mod spaced_repetition;
pub mod visual;
pub mod word_list;

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::lesson::model::WordRecord;
use crate::ui::theme::Theme;

pub(crate) fn placeholder(message: &str, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let colors = &theme.colors;
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(colors.text_muted()),
        )),
    ])
    .alignment(Alignment::Center)
    .render(area, buf);
}

/// Word, transliteration and translation, one per line.
pub(crate) fn word_heading<'a>(word: &'a WordRecord, theme: &Theme) -> Vec<Line<'a>> {
    let colors = &theme.colors;
    let mut lines = vec![Line::from(Span::styled(
        word.word.as_str(),
        Style::default()
            .fg(colors.accent())
            .add_modifier(Modifier::BOLD),
    ))];
    if !word.transliteration.is_empty() {
        lines.push(Line::from(Span::styled(
            word.transliteration.as_str(),
            Style::default().fg(colors.text_muted()),
        )));
    }
    if !word.translation.is_empty() {
        lines.push(Line::from(Span::styled(
            word.translation.as_str(),
            Style::default().fg(colors.fg()),
        )));
    }
    lines
}

pub(crate) fn labeled<'a>(label: &'a str, text: &'a str, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(" ", Style::default()),
        Span::styled(text, Style::default().fg(color).add_modifier(Modifier::ITALIC)),
    ])
}

pub(crate) fn bullets<'a>(items: &'a [String], theme: &Theme) -> Vec<Line<'a>> {
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme.colors.accent())),
                Span::styled(item.as_str(), Style::default().fg(theme.colors.fg())),
            ])
        })
        .collect()
}

pub(crate) fn render_lines(lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

/// Rows of a list to draw so that `selected` stays visible.
pub(crate) fn visible_range(selected: usize, len: usize, rows: usize) -> Range<usize> {
    if rows == 0 || len == 0 {
        return 0..0;
    }
    let start = if selected >= rows { selected + 1 - rows } else { 0 };
    start..(start + rows).min(len)
}

/// One selectable row of a list: indicator, word and translation.
pub(crate) fn list_row<'a>(
    indicator_selected: bool,
    label: String,
    detail: &'a str,
    theme: &Theme,
) -> Line<'a> {
    let colors = &theme.colors;
    let indicator = if indicator_selected { " > " } else { "   " };
    let label_style = if indicator_selected {
        Style::default()
            .fg(colors.accent())
            .bg(colors.selected_bg())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.fg())
    };
    let mut spans = vec![Span::styled(format!("{indicator}{label}"), label_style)];
    if !detail.is_empty() {
        spans.push(Span::styled(
            format!("  {detail}"),
            Style::default().fg(colors.text_muted()),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
