use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use crate::lesson::dispatch::LessonOverview;
use crate::ui::components::{bullets, labeled, placeholder, render_lines, word_heading};
use crate::ui::theme::Theme;

pub struct OverviewPanel<'a> {
    pub overview: &'a LessonOverview,
    pub theme: &'a Theme,
}

impl<'a> Widget for OverviewPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border()))
            .title(Span::styled(" Overview ", Style::default().fg(colors.header_fg())));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.overview.is_empty() {
            placeholder("No overview for this lesson", self.theme, inner, buf);
            return;
        }

        let heading = |title: &'static str| {
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ))
        };
        let body = |text: &'a str| Line::from(Span::styled(text, Style::default().fg(colors.fg())));

        let mut lines = Vec::new();
        let texts = [
            ("Introduction", self.overview.introduction.as_deref()),
            ("Description", self.overview.description.as_deref()),
            ("Benefits", self.overview.benefits.as_deref()),
            ("Example", self.overview.example.as_deref()),
        ];
        for (title, text) in texts {
            if let Some(text) = text {
                lines.push(heading(title));
                lines.push(body(text));
                lines.push(Line::from(""));
            }
        }
        for (title, items) in [
            ("Activities", &self.overview.activities),
            ("Example Situations", &self.overview.situations),
        ] {
            if !items.is_empty() {
                lines.push(heading(title));
                lines.extend(bullets(items, self.theme));
                lines.push(Line::from(""));
            }
        }

        let words = &self.overview.practice_words;
        if !words.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("{} ({} words)", self.overview.practice_title, words.len()),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )));
            for word in words {
                lines.extend(word_heading(word, self.theme));
                if let Some(mnemonic) = &word.mnemonic {
                    lines.push(labeled("Remember it:", mnemonic, colors.hint()));
                }
                if let Some(context) = &word.context {
                    lines.push(labeled("Usage Context:", context, colors.text_muted()));
                }
                lines.push(Line::from(""));
            }
        }
        render_lines(lines, inner, buf);
    }
}
