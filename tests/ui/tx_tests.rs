use super::*;
use ethex::app::{ViewState, TX_ERROR, TX_NOT_FOUND};

// ==================== Transaction Screen Tests ====================

#[test]
fn test_tx_overview() {
    let app = tx_app(ViewState::Loaded(Some(mock_tx_details())));
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "Transaction Details"));
    assert!(buffer_contains(&buffer, &format!("Transaction Hash: {TX_HASH}")));
    assert!(buffer_contains(&buffer, "Status: Success"));
    assert!(buffer_contains(&buffer, "Block: 19000000"));
    assert!(buffer_contains(&buffer, &format!("From: {FROM}")));
    assert!(buffer_contains(&buffer, &format!("To: {TO}")));
    assert!(buffer_contains(&buffer, "Value: 1.500000 ETH"));
    assert!(buffer_contains(&buffer, "Nonce: 42"));
}

#[test]
fn test_tx_gas_and_fee() {
    let app = tx_app(ViewState::Loaded(Some(mock_tx_details())));
    let buffer = render_to_buffer(&app, 120, 50);

    // 65,000 gas at 50 gwei
    assert!(buffer_contains(&buffer, "Transaction Fee: 0.003250 ETH"));
    assert!(buffer_contains(&buffer, "Gas Price: 50.00 Gwei"));
    assert!(buffer_contains(&buffer, "Gas Limit: 100,000"));
    assert!(buffer_contains(&buffer, "Gas Used: 65,000 (65.00%)"));
}

#[test]
fn test_tx_input_data() {
    let app = tx_app(ViewState::Loaded(Some(mock_tx_details())));
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "Input Data: 0xa9059cbb"));
}

#[test]
fn test_tx_long_input_is_cut() {
    let mut details = mock_tx_details();
    details.tx.input = Bytes::from(vec![0xab; 100]);
    let app = tx_app(ViewState::Loaded(Some(details)));
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "(100 bytes)"));
    assert!(!buffer_contains(&buffer, &"ab".repeat(40)));
}

#[test]
fn test_tx_empty_input_is_hidden() {
    let mut details = mock_tx_details();
    details.tx.input = Bytes::new();
    let app = tx_app(ViewState::Loaded(Some(details)));
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(!buffer_contains(&buffer, "Input Data"));
}

#[test]
fn test_tx_event_logs() {
    let app = tx_app(ViewState::Loaded(Some(mock_tx_details())));
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "Event Logs (2)"));
    assert!(buffer_contains(&buffer, "0xa0b8...eb48"));
    assert!(buffer_contains(&buffer, "0xddf252ad..."));
    assert!(buffer_contains(&buffer, "0x00000000..."));
    assert!(buffer_contains(&buffer, "0xc02a...6cc2"));
    assert!(buffer_contains(&buffer, "None"));
}

#[test]
fn test_tx_without_logs() {
    let mut details = mock_tx_details();
    if let Some(receipt) = details.receipt.as_mut() {
        receipt.logs.clear();
    }
    let app = tx_app(ViewState::Loaded(Some(details)));
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(!buffer_contains(&buffer, "Event Logs"));
}

#[test]
fn test_tx_pending() {
    let mut details = mock_tx_details();
    details.tx.block_number = None;
    details.receipt = None;
    let app = tx_app(ViewState::Loaded(Some(details)));
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "Status: Pending"));
    assert!(buffer_contains(&buffer, "Block: Pending"));
    assert!(buffer_contains(&buffer, "Transaction Fee: Calculating..."));
    assert!(!buffer_contains(&buffer, "Gas Used"));
}

#[test]
fn test_tx_failed_status() {
    let mut details = mock_tx_details();
    if let Some(receipt) = details.receipt.as_mut() {
        receipt.status = false;
    }
    let app = tx_app(ViewState::Loaded(Some(details)));
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "Status: Failed"));
}

#[test]
fn test_tx_contract_creation() {
    let mut details = mock_tx_details();
    details.tx.to = None;
    if let Some(receipt) = details.receipt.as_mut() {
        receipt.contract_address = Some("0x00000000000000000000000000000000c4ea7e00".to_string());
    }
    let app = tx_app(ViewState::Loaded(Some(details)));
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "To: Contract Creation"));
    assert!(buffer_contains(
        &buffer,
        "Created Contract: 0x00000000000000000000000000000000c4ea7e00"
    ));
}

#[test]
fn test_tx_gas_price_falls_back_to_effective_price() {
    let mut details = mock_tx_details();
    details.tx.gas_price = None;
    if let Some(receipt) = details.receipt.as_mut() {
        receipt.effective_gas_price = 30_000_000_000;
    }
    let app = tx_app(ViewState::Loaded(Some(details)));
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "Gas Price: 30.00 Gwei"));
}

#[test]
fn test_tx_not_found() {
    let app = tx_app(ViewState::Loaded(None));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Not Found"));
    assert!(buffer_contains(&buffer, TX_NOT_FOUND));
    assert!(buffer_contains(&buffer, "b back • h home"));
    assert!(!buffer_contains(&buffer, "r retry"));
}

#[test]
fn test_tx_failed() {
    let app = tx_app(ViewState::Failed(TX_ERROR.to_string()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, TX_ERROR));
}

#[test]
fn test_tx_loading() {
    let app = tx_app(ViewState::Loading);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Fetching transaction..."));
}
