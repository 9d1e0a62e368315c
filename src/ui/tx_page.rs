use super::helper::*;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::rpc::{LogInfo, TxDetails, TxStatus};
use crate::units::{format_ether, format_gwei};

/// Characters of topic and data shown in the log table
const LOG_PREVIEW: usize = 10;
/// Lines are not wrapped, so long calldata is cut
const INPUT_PREVIEW: usize = 66;

pub fn draw_tx(frame: &mut Frame, area: Rect, details: &TxDetails, selected: usize) {
    let mut cursor = LinkCursor::new(selected);
    let mut selected_line = None;
    let tx = &details.tx;
    let receipt = details.receipt.as_ref();

    let status = details.status();
    let status_color = match status {
        TxStatus::Pending => Color::Yellow,
        TxStatus::Success => Color::Green,
        TxStatus::Failed => Color::Red,
    };

    let mut lines = vec![
        format_kv("Transaction Hash", &tx.hash),
        Line::from(vec![
            Span::styled("Status: ", label_style()),
            Span::styled(
                format!("{} {}", status.as_str(), status.icon()),
                Style::default().fg(status_color),
            ),
        ]),
    ];

    let mut push_link = |lines: &mut Vec<Line<'static>>, key: &str, value: &str| {
        let hit = cursor.claim();
        if hit {
            selected_line = Some(lines.len());
        }
        lines.push(format_kv_link(key, value, hit));
    };

    match tx.block_number {
        Some(n) => push_link(&mut lines, "Block", &n.to_string()),
        None => lines.push(format_kv("Block", "Pending")),
    }

    push_link(&mut lines, "From", &tx.from);
    match &tx.to {
        Some(to) => push_link(&mut lines, "To", to),
        None => lines.push(Line::from(vec![
            Span::styled("To: ", label_style()),
            Span::styled("Contract Creation", Style::default().fg(Color::Magenta)),
        ])),
    }
    if let Some(created) = receipt.and_then(|r| r.contract_address.as_deref()) {
        push_link(&mut lines, "Created Contract", created);
    }

    lines.push(format_kv("Value", &format_ether(tx.value, 6)));
    let fee = details
        .fee()
        .map(|fee| format_ether(fee, 6))
        .unwrap_or_else(|| "Calculating...".to_string());
    lines.push(format_kv("Transaction Fee", &fee));

    let gas_price = tx
        .gas_price
        .or_else(|| receipt.map(|r| r.effective_gas_price))
        .map(format_gwei)
        .unwrap_or_else(|| "N/A".to_string());
    lines.push(format_kv("Gas Price", &gas_price));
    lines.push(format_kv("Gas Limit", &format_number(tx.gas_limit)));

    if let (Some(r), Some(pct)) = (receipt, details.gas_utilization()) {
        lines.push(format_kv(
            "Gas Used",
            &format!("{} ({})", format_number(r.gas_used), format_percent(pct)),
        ));
    }

    lines.push(format_kv("Nonce", &tx.nonce.to_string()));

    if !tx.input.is_empty() {
        let hex = tx.input.to_string();
        let shown = if hex.len() > INPUT_PREVIEW {
            format!("{} ({} bytes)", hex_prefix(&hex, INPUT_PREVIEW), tx.input.len())
        } else {
            hex
        };
        lines.push(format_kv("Input Data", &shown));
    }

    if let Some(logs) = receipt.map(|r| &r.logs).filter(|logs| !logs.is_empty()) {
        lines.push(Line::from(""));
        lines.push(section_header(format!("Event Logs ({})", logs.len())));
        lines.push(Line::from(Span::styled(
            format!("{:<6} {:<14} {:<14} {}", "Index", "Address", "Topics", "Data"),
            label_style(),
        )));
        for (index, log) in logs.iter().enumerate() {
            let hit = cursor.claim();
            if hit {
                selected_line = Some(lines.len());
            }
            lines.push(log_row(index, log, hit));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 🧾 Transaction Details ");

    let height = block.inner(area).height;
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_to(selected_line, height), 0));

    frame.render_widget(paragraph, area);
}

/// First topic of a log, cut to a preview, or `None`
pub fn topic_preview(log: &LogInfo) -> String {
    match log.topics.first() {
        Some(topic) => hex_prefix(topic, LOG_PREVIEW),
        None => "None".to_string(),
    }
}

/// Log data cut to a preview; empty data (`0x`) shows `None`
pub fn data_preview(log: &LogInfo) -> String {
    if log.data.is_empty() || log.data == "0x" {
        "None".to_string()
    } else {
        hex_prefix(&log.data, LOG_PREVIEW)
    }
}

fn log_row(index: usize, log: &LogInfo, selected: bool) -> Line<'static> {
    let address = shorten(&log.address);
    let padding = " ".repeat(15usize.saturating_sub(address.chars().count()));

    Line::from(vec![
        Span::styled(format!("{index:<6} "), Style::default().fg(Color::White)),
        link_span(address, selected),
        Span::raw(padding),
        Span::styled(
            format!("{:<14} ", topic_preview(log)),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(data_preview(log), Style::default().fg(Color::Gray)),
    ])
}
