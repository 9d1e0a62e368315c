mod address_page;
mod block_page;
mod helper;
mod home_page;
mod tx_page;

pub use helper::{format_age, format_number, format_utc, hex_prefix, shorten};

use address_page::draw_address;
use block_page::draw_block;
use helper::*;
use home_page::draw_home;
use tx_page::draw_tx;

use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use tui_input::Input;

use crate::app::{App, View, ViewState, BLOCK_NOT_FOUND, TX_NOT_FOUND};

const TITLE_ART: &str = r#"
███████╗████████╗██╗  ██╗███████╗██╗  ██╗
██╔════╝╚══██╔══╝██║  ██║██╔════╝╚██╗██╔╝
█████╗     ██║   ███████║█████╗   ╚███╔╝
██╔══╝     ██║   ██╔══██║██╔══╝   ██╔██╗
███████╗   ██║   ██║  ██║███████╗██╔╝ ██╗
╚══════╝   ╚═╝   ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝
"#;

const NAV_HELP: &str =
    "/ search • ↑↓ select • Enter open • b back • h home • r refresh • q quit";
const SEARCH_HELP: &str = "Enter search • Esc cancel";

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.needs_rpc_setup() {
        draw_rpc_setup(frame, app, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(3), // Search bar
        Constraint::Length(1), // Search error / status
        Constraint::Min(0),    // Screen
        Constraint::Length(1), // Help
    ])
    .split(area);

    draw_search_bar(frame, app, chunks[0]);
    draw_status_line(frame, app, chunks[1]);

    let body = chunks[2];
    let selected = app.selected_link;
    match &app.view {
        View::Home(state) => {
            draw_state(frame, body, state, "Fetching latest blocks...", |f, a, home| {
                draw_home(f, a, home, selected)
            })
        }
        View::Block { number, state } => draw_state(
            frame,
            body,
            state,
            &format!("Fetching block {number}..."),
            |f, a, block| match block {
                Some(block) => draw_block(f, a, block, selected),
                None => draw_not_found(f, a, BLOCK_NOT_FOUND),
            },
        ),
        View::Transaction { state, .. } => draw_state(
            frame,
            body,
            state,
            "Fetching transaction...",
            |f, a, details| match details {
                Some(details) => draw_tx(f, a, details, selected),
                None => draw_not_found(f, a, TX_NOT_FOUND),
            },
        ),
        View::Address { state, .. } => {
            draw_state(frame, body, state, "Fetching address...", |f, a, details| {
                draw_address(f, a, details, selected)
            })
        }
    }

    let help_text = if app.search_focused {
        SEARCH_HELP
    } else {
        NAV_HELP
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_state<T>(
    frame: &mut Frame,
    area: Rect,
    state: &ViewState<T>,
    loading_msg: &str,
    draw_loaded: impl FnOnce(&mut Frame, Rect, &T),
) {
    match state {
        ViewState::Idle => draw_title(frame, area),
        ViewState::Loading => draw_loading(frame, area, loading_msg),
        ViewState::Loaded(data) => draw_loaded(frame, area, data),
        ViewState::Failed(msg) => draw_error(frame, area, msg),
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(8), // Title
        Constraint::Length(1), // Subtitle
        Constraint::Min(0),
    ])
    .split(area);

    let title = Paragraph::new(TITLE_ART)
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new("Terminal Ethereum Explorer")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);
}

fn draw_rpc_setup(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(9), // Title
        Constraint::Length(3), // Spacing
        Constraint::Length(4), // RPC input box
        Constraint::Length(1), // Error
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Help
        Constraint::Min(0),    // Padding
    ])
    .split(area);

    draw_title(frame, chunks[0]);

    let rpc_area = centered_rect(70, chunks[2]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" ⚡ RPC Configuration Required ")
        .title_style(Style::default().fg(Color::Yellow));

    let inner_area = block.inner(rpc_area);
    frame.render_widget(block, rpc_area);

    let input_chunks = Layout::vertical([
        Constraint::Length(1), // Label
        Constraint::Length(1), // Input
    ])
    .split(inner_area);

    let label = Paragraph::new("Enter an Ethereum RPC URL (Alchemy endpoints include token data):")
        .style(Style::default().fg(Color::White));
    frame.render_widget(label, input_chunks[0]);

    draw_input(
        frame,
        input_chunks[1],
        &app.rpc_input,
        "https://eth-mainnet.g.alchemy.com/v2/...",
        true,
    );

    if let Some(err) = &app.rpc_error {
        let error = Paragraph::new(err.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[3]);
    }

    let help = Paragraph::new("Press Enter to connect • Esc to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.search_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" ethex • 🔍 Search ")
        .title_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    draw_input(
        frame,
        inner,
        &app.search_input,
        "Search by Address / Txn Hash / Block",
        app.search_focused,
    );
}

/// One-line text input, horizontally scrolled to keep the caret visible
fn draw_input(frame: &mut Frame, area: Rect, input: &Input, placeholder: &str, focused: bool) {
    let scroll = input.visual_scroll(area.width as usize);

    let text = if input.value().is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(input.value(), Style::default().fg(Color::White))
    };
    frame.render_widget(Paragraph::new(text).scroll((0, scroll as u16)), area);

    if focused {
        let caret = input.visual_cursor().saturating_sub(scroll) as u16;
        if caret < area.width {
            frame.set_cursor_position((area.x + caret, area.y));
        }
    }
}

fn draw_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.search_error {
        Some(err) => Line::from(Span::styled(err.as_str(), Style::default().fg(Color::Red))),
        None => {
            let rpc = app.config.rpc_url.as_deref().unwrap_or("");
            Line::from(vec![
                Span::styled(app.route.path(), Style::default().fg(Color::Gray)),
                Span::styled("  RPC: ", label_style()),
                Span::styled(shorten_url(rpc), Style::default().fg(Color::Green)),
            ])
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// RPC URLs often end in an API key; only the host part is shown
fn shorten_url(url: &str) -> String {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme)
        .to_string()
}

fn draw_loading(frame: &mut Frame, area: Rect, msg: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Loading ");

    let spinner_frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let idx = (Utc::now().timestamp_millis().max(0) / 100) as usize % spinner_frames.len();

    let text = format!("{} {}", spinner_frames[idx], msg);
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));

    let centered = centered_rect_fixed(50.min(area.width), 3.min(area.height), area);
    frame.render_widget(paragraph, centered);
}

/// A fetch failed; refresh may help
fn draw_error(frame: &mut Frame, area: Rect, msg: &str) {
    draw_notice(
        frame,
        area,
        msg,
        (" ❌ Error ", Color::Red),
        "r retry • b back • h home",
    );
}

/// The chain answered but has no such block or transaction
fn draw_not_found(frame: &mut Frame, area: Rect, msg: &str) {
    draw_notice(frame, area, msg, (" Not Found ", Color::Yellow), "b back • h home");
}

fn draw_notice(frame: &mut Frame, area: Rect, msg: &str, title: (&str, Color), hint: &str) {
    let (title, color) = title;
    let padded = padded_rect(area, 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title);

    let mut lines: Vec<Line> = msg
        .lines()
        .map(|line| Line::from(line.to_string()).fg(color))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(hint.to_string()).fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, padded);
}
