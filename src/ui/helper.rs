use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// `0x742d...fE31`: first 6 and last 4 characters
pub fn shorten(value: &str) -> String {
    if value.len() <= 10 || !value.is_ascii() {
        return value.to_string();
    }
    format!("{}...{}", &value[..6], &value[value.len() - 4..])
}

/// First `len` characters followed by `...`
pub fn hex_prefix(value: &str, len: usize) -> String {
    let prefix: String = value.chars().take(len).collect();
    format!("{prefix}...")
}

/// Thousands separators, e.g. `30,000,000`
pub fn format_number(value: impl ToString) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_age(ts: u64, now: u64) -> String {
    let secs_ago = now.saturating_sub(ts);

    if secs_ago < 60 {
        format!("{secs_ago} secs ago")
    } else if secs_ago < 3600 {
        format!("{} mins ago", secs_ago / 60)
    } else if secs_ago < 86400 {
        format!("{} hours ago", secs_ago / 3600)
    } else {
        format!("{} days ago", secs_ago / 86400)
    }
}

pub fn format_timestamp(ts: u64) -> String {
    let now = Utc::now().timestamp().max(0) as u64;
    format_age(ts, now)
}

pub fn format_utc(ts: u64) -> String {
    i64::try_from(ts)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}

pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn label_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn link_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED)
    }
}

pub fn link_span(value: impl Into<String>, selected: bool) -> Span<'static> {
    Span::styled(value.into(), link_style(selected))
}

pub fn format_kv(key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), label_style()),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

pub fn format_kv_link(key: &str, value: &str, selected: bool) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), label_style()),
        link_span(value, selected),
    ])
}

pub fn section_header(title: String) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Hands out link indices in display order, matching `App::links`
pub struct LinkCursor {
    next: usize,
    selected: usize,
}

impl LinkCursor {
    pub fn new(selected: usize) -> Self {
        Self { next: 0, selected }
    }

    /// Claim the next link index; true when it is the selected one
    pub fn claim(&mut self) -> bool {
        let is_selected = self.next == self.selected;
        self.next += 1;
        is_selected
    }
}

/// Vertical scroll that keeps `line` inside a viewport of `height` rows
pub fn scroll_to(line: Option<usize>, height: u16) -> u16 {
    let height = height.max(1) as usize;
    match line {
        Some(line) if line >= height => (line + 1 - height).min(u16::MAX as usize) as u16,
        _ => 0,
    }
}

pub fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let popup_layout = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(area);

    popup_layout[1]
}

pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(vertical[1]);

    horizontal[1]
}

pub fn padded_rect(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    }
}
