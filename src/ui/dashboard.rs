//! Painting the timer list

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{slot_label, Registry};

const HEADER: &str = "timetracker    1-9,0,a-j toggle    q quit";
const INDENT: &str = "   ";

/// Rendering styles, chosen once at startup from `--no-color`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    /// Create a palette, monochrome when `color` is false
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Check if colors are enabled
    pub fn color(&self) -> bool {
        self.color
    }

    fn header(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    fn row(&self, row: &TimerRow) -> Style {
        match (self.color, row.running) {
            (true, true) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            (false, true) => Style::default().add_modifier(Modifier::BOLD),
            (true, false) if row.remaining_seconds == 0 => Style::default().fg(Color::DarkGray),
            _ => Style::default(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}

/// One timer as shown on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerRow {
    pub label: char,
    pub name: String,
    pub remaining_seconds: u64,
    pub running: bool,
}

impl TimerRow {
    /// `[k]  MMM:SS  name`
    pub fn text(&self) -> String {
        format!(
            "[{}]  {}  {}",
            self.label,
            format_remaining(self.remaining_seconds),
            self.name
        )
    }
}

/// Every timer's display values at a single instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub rows: Vec<TimerRow>,
}

impl Dashboard {
    /// Read all timers at `now` without changing them
    pub fn capture(registry: &Registry, now: u64) -> Self {
        let rows = registry
            .iter()
            .enumerate()
            .filter_map(|(slot, timer)| {
                Some(TimerRow {
                    label: slot_label(slot)?,
                    name: timer.name().to_string(),
                    remaining_seconds: timer.remaining(now),
                    running: timer.is_running(),
                })
            })
            .collect();
        Self { rows }
    }
}

/// Minutes right-aligned to three columns, seconds zero-padded
pub fn format_remaining(seconds: u64) -> String {
    format!("{:>3}:{:02}", seconds / 60, seconds % 60)
}

/// Paint the header and one row per timer
pub fn render(frame: &mut Frame, dashboard: &Dashboard, palette: Palette) {
    let mut lines = Vec::with_capacity(2 + dashboard.rows.len() * 2);
    lines.push(Line::from(Span::styled(HEADER, palette.header())));
    lines.push(Line::default());

    for row in &dashboard.rows {
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(row.text(), palette.row(row)),
        ]));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), frame.area());
}
