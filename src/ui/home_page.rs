use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helper::*;
use crate::rpc::{BlockInfo, HomeData, TxSummary};
use crate::units::format_ether;

pub fn draw_home(frame: &mut Frame, area: Rect, home: &HomeData, selected: usize) {
    let chunks = if area.width >= 120 {
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area)
    } else {
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area)
    };

    let mut cursor = LinkCursor::new(selected);

    let mut block_lines = Vec::new();
    let mut block_selected_line = None;
    for block in &home.latest_blocks {
        let (lines, hit) = block_entry(block, &mut cursor);
        // Scroll to the entry's second line so both stay visible
        if hit {
            block_selected_line = Some(block_lines.len() + 1);
        }
        block_lines.extend(lines);
    }

    let mut tx_lines = Vec::new();
    let mut tx_selected_line = None;
    for tx in &home.latest_transactions {
        let (lines, hit) = tx_entry(tx, &mut cursor);
        if hit {
            tx_selected_line = Some(tx_lines.len() + 1);
        }
        tx_lines.extend(lines);
    }

    draw_list(
        frame,
        chunks[0],
        format!(" Latest Blocks ({}) ", home.latest_blocks.len()),
        block_lines,
        block_selected_line,
    );
    draw_list(
        frame,
        chunks[1],
        format!(" Latest Transactions ({}) ", home.latest_transactions.len()),
        tx_lines,
        tx_selected_line,
    );
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    title: String,
    lines: Vec<Line<'static>>,
    selected_line: Option<usize>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    let height = block.inner(area).height;
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_to(selected_line, height), 0));

    frame.render_widget(paragraph, area);
}

/// Two lines per block; the bool reports whether one of its links is selected
fn block_entry(block: &BlockInfo, cursor: &mut LinkCursor) -> (Vec<Line<'static>>, bool) {
    let number_selected = cursor.claim();
    let miner_selected = cursor.claim();

    let first = Line::from(vec![
        Span::styled("Block ", label_style()),
        link_span(block.number.to_string(), number_selected),
        Span::styled("  ", Style::default()),
        Span::styled(
            format_timestamp(block.timestamp),
            Style::default().fg(Color::Gray),
        ),
        Span::styled("  Txns: ", label_style()),
        Span::styled(block.tx_count.to_string(), Style::default().fg(Color::White)),
    ]);

    let second = Line::from(vec![
        Span::styled("  Miner: ", label_style()),
        link_span(shorten(&block.miner), miner_selected),
        Span::styled("  Gas Used: ", label_style()),
        Span::styled(
            format_number(block.gas_used),
            Style::default().fg(Color::White),
        ),
    ]);

    (vec![first, second], number_selected || miner_selected)
}

fn tx_entry(tx: &TxSummary, cursor: &mut LinkCursor) -> (Vec<Line<'static>>, bool) {
    let hash_selected = cursor.claim();
    let from_selected = cursor.claim();

    let first = Line::from(vec![
        Span::styled("Tx ", label_style()),
        link_span(shorten(&tx.hash), hash_selected),
        Span::styled("  ", Style::default()),
        Span::styled(format_ether(tx.value, 4), Style::default().fg(Color::Yellow)),
    ]);

    let mut second = vec![
        Span::styled("  From: ", label_style()),
        link_span(shorten(&tx.from), from_selected),
        Span::styled("  To: ", label_style()),
    ];

    let mut to_selected = false;
    match &tx.to {
        Some(to) => {
            to_selected = cursor.claim();
            second.push(link_span(shorten(to), to_selected));
        }
        None => second.push(Span::styled(
            "Contract Creation",
            Style::default().fg(Color::Magenta),
        )),
    }

    (
        vec![first, Line::from(second)],
        hash_selected || from_selected || to_selected,
    )
}
