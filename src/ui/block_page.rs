use super::helper::*;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::rpc::{BlockInfo, TxSummary};
use crate::units::format_ether;

/// Shortened hashes and addresses are 13 characters wide
const COLUMN: usize = 13;

pub fn draw_block(frame: &mut Frame, area: Rect, info: &BlockInfo, selected: usize) {
    let mut cursor = LinkCursor::new(selected);

    let overview = overview_lines(info, &mut cursor);
    let overview_height = (overview.len() as u16 + 2).min(area.height / 2);

    let chunks = Layout::vertical([
        Constraint::Length(overview_height), // Block info
        Constraint::Min(0),                  // Transaction list
    ])
    .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 📦 Block #{} Details ", info.number));
    frame.render_widget(Paragraph::new(overview).block(block), chunks[0]);

    let mut lines = vec![table_header()];
    let mut selected_line = None;
    for tx in &info.transactions {
        let (line, hit) = tx_row(tx, &mut cursor);
        if hit {
            selected_line = Some(lines.len());
        }
        lines.push(line);
    }
    if info.transactions.is_empty() {
        lines.push(Line::from(Span::styled(
            "No transactions in this block",
            label_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Transaction List ({}) ", info.tx_count));
    let height = block.inner(chunks[1]).height;
    let list = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_to(selected_line, height), 0));
    frame.render_widget(list, chunks[1]);
}

fn overview_lines(info: &BlockInfo, cursor: &mut LinkCursor) -> Vec<Line<'static>> {
    let gas_pct = info.gas_utilization();
    let bar_width = 20;
    let filled = (((gas_pct / 100.0) * bar_width as f64) as usize).min(bar_width);
    let gas_bar = format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(bar_width - filled)
    );

    let mut lines = vec![
        format_kv("Block Height", &info.number.to_string()),
        format_kv(
            "Timestamp",
            &format!(
                "{} ({})",
                format_utc(info.timestamp),
                format_timestamp(info.timestamp)
            ),
        ),
        format_kv("Transaction Count", &info.tx_count.to_string()),
        format_kv_link("Miner", &info.miner, cursor.claim()),
        format_kv("Block Hash", &info.hash),
        format_kv("Parent Hash", &info.parent_hash),
        format_kv("Nonce", &info.nonce),
        format_kv("Difficulty", &format_number(info.difficulty)),
    ];

    if let Some(total) = info.total_difficulty {
        lines.push(format_kv("Total Difficulty", &format_number(total)));
    }

    lines.push(format_kv("Gas Limit", &format_number(info.gas_limit)));
    lines.push(Line::from(vec![
        Span::styled("Gas Used: ", label_style()),
        Span::styled(
            format!(
                "{} ({})",
                format_number(info.gas_used),
                format_percent(gas_pct)
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled(format!(" {gas_bar}"), Style::default().fg(Color::Green)),
    ]));

    if let Some(size) = info.size {
        lines.push(format_kv("Size", &format_size_kb(size)));
    }
    lines.push(format_kv("Extra Data", &info.extra_data));

    lines
}

fn table_header() -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "{:<COLUMN$}  {:<COLUMN$}  {:<COLUMN$}  {}",
            "Txn Hash", "From", "To", "Value"
        ),
        label_style(),
    ))
}

fn pad(value: &str) -> Span<'static> {
    Span::raw(" ".repeat(COLUMN.saturating_sub(value.chars().count()) + 2))
}

fn tx_row(tx: &TxSummary, cursor: &mut LinkCursor) -> (Line<'static>, bool) {
    let hash = shorten(&tx.hash);
    let from = shorten(&tx.from);
    let hash_selected = cursor.claim();
    let from_selected = cursor.claim();

    let mut spans = vec![
        link_span(hash.clone(), hash_selected),
        pad(&hash),
        link_span(from.clone(), from_selected),
        pad(&from),
    ];

    let mut to_selected = false;
    match &tx.to {
        Some(to) => {
            let to = shorten(to);
            to_selected = cursor.claim();
            spans.push(link_span(to.clone(), to_selected));
            spans.push(pad(&to));
        }
        None => {
            let label = "Contract Creation";
            spans.push(Span::styled(label, Style::default().fg(Color::Magenta)));
            spans.push(Span::raw("  "));
        }
    }

    spans.push(Span::styled(
        format_ether(tx.value, 4),
        Style::default().fg(Color::Yellow),
    ));

    (
        Line::from(spans),
        hash_selected || from_selected || to_selected,
    )
}
