use super::helper::*;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::rpc::{AddressDetails, TokenBalance};
use crate::units::{format_ether, format_token_amount};

const HISTORY_NOTE: [&str; 2] = [
    "Transaction history is not available through the JSON-RPC API.",
    "For complete transaction history, use a full block explorer such as Etherscan.",
];

pub fn draw_address(frame: &mut Frame, area: Rect, details: &AddressDetails, selected: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(4),                             // Overview
        Constraint::Min(0),                                // Tokens
        Constraint::Length(HISTORY_NOTE.len() as u16 + 2), // Note
    ])
    .split(area);

    let overview = vec![
        format_kv("Address", &details.address),
        format_kv("ETH Balance", &format_ether(details.balance, 6)),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 👤 Address Details ");
    frame.render_widget(Paragraph::new(overview).block(block), chunks[0]);

    draw_tokens(frame, chunks[1], &details.tokens, selected);

    let note: Vec<Line> = HISTORY_NOTE
        .iter()
        .map(|text| Line::from(Span::styled(format!("• {text}"), label_style())))
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Note ");
    frame.render_widget(
        Paragraph::new(note).block(block).wrap(Wrap { trim: true }),
        chunks[2],
    );
}

fn draw_tokens(frame: &mut Frame, area: Rect, tokens: &[TokenBalance], selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" ERC-20 Tokens ({}) ", tokens.len()));

    if tokens.is_empty() {
        let empty = Paragraph::new(Span::styled("No token balances", label_style())).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        format!("{:<32} {:<24} {}", "Token", "Balance", "Contract Address"),
        label_style(),
    ))];

    let mut cursor = LinkCursor::new(selected);
    let mut selected_line = None;
    for token in tokens {
        let hit = cursor.claim();
        if hit {
            selected_line = Some(lines.len());
        }
        lines.push(token_row(token, hit));
    }

    let height = block.inner(area).height;
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_to(selected_line, height), 0));
    frame.render_widget(paragraph, area);
}

/// `Name (SYMBOL)`, cut to fit its column
pub fn token_label(token: &TokenBalance) -> String {
    let label = format!("{} ({})", token.name(), token.symbol());
    if label.chars().count() > 32 {
        let cut: String = label.chars().take(29).collect();
        format!("{cut}...")
    } else {
        label
    }
}

fn token_row(token: &TokenBalance, selected: bool) -> Line<'static> {
    let amount = format_token_amount(token.balance, token.metadata.decimals);

    Line::from(vec![
        Span::styled(
            format!("{:<32} ", token_label(token)),
            Style::default().fg(Color::White),
        ),
        Span::styled(format!("{amount:<24} "), Style::default().fg(Color::Yellow)),
        link_span(shorten(&format!("{:?}", token.contract)), selected),
    ])
}
