use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥100 cols: lesson view + overview sidebar
    Narrow, // <100 cols: overview stacked under the lesson view
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 100 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn show_sidebar(&self) -> bool {
        *self == LayoutTier::Wide
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub sidebar: Option<Rect>,
    pub status: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(6),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let (main, sidebar) = if tier.show_sidebar() {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
                .split(vertical[1]);
            (horizontal[0], Some(horizontal[1]))
        } else {
            (vertical[1], None)
        };

        Self {
            header: vertical[0],
            main,
            sidebar,
            status: vertical[2],
            footer: vertical[3],
            tier,
        }
    }

    /// Variant area and overview area of the lesson screen. Narrow terminals
    /// stack a non-empty overview below the variant.
    pub fn lesson_areas(&self, with_overview: bool) -> (Rect, Option<Rect>) {
        if self.tier.show_sidebar() {
            return (self.main, self.sidebar);
        }
        if !with_overview {
            return (self.main, None);
        }
        let stacked = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Percentage(40)])
            .split(self.main);
        (stacked[0], Some(stacked[1]))
    }
}

/// Joins as many hints as fit on the one-row footer; later hints are dropped.
pub fn footer_hints(hints: &[&str], width: usize) -> String {
    let mut line = String::new();
    for hint in hints.iter().filter(|hint| !hint.is_empty()) {
        let extra = if line.is_empty() { 1 } else { 2 } + hint.chars().count();
        if line.chars().count() + extra > width {
            break;
        }
        line.push_str(if line.is_empty() { " " } else { "  " });
        line.push_str(hint);
    }
    line
}

/// Catalog column: full height, at most `max_width` wide, centered.
pub fn catalog_area(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}
