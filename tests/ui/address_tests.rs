use super::*;
use ethex::app::{ViewState, ADDRESS_ERROR};

// ==================== Address Screen Tests ====================

#[test]
fn test_address_overview() {
    let app = address_app(ViewState::Loaded(mock_address_details()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Address Details"));
    assert!(buffer_contains(&buffer, &format!("Address: {FROM}")));
    assert!(buffer_contains(&buffer, "ETH Balance: 5.500000 ETH"));
}

#[test]
fn test_address_token_table() {
    let app = address_app(ViewState::Loaded(mock_address_details()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "ERC-20 Tokens (2)"));
    assert!(buffer_contains(&buffer, "USD Coin (USDC)"));
    assert!(buffer_contains(&buffer, "10000.0000"));
    assert!(buffer_contains(&buffer, "0xa0b8...eb48"));
}

#[test]
fn test_address_token_without_metadata() {
    let app = address_app(ViewState::Loaded(mock_address_details()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Unknown Token (?)"));
    // 18 decimals when the token reports none
    assert!(buffer_contains(&buffer, "2.5000"));
}

#[test]
fn test_address_one_row_per_token() {
    let tokens = (1..=12u8)
        .map(|i| TokenBalance {
            contract: Address::with_last_byte(i),
            balance: U256::from(u64::from(i)),
            metadata: TokenMetadata::default(),
        })
        .collect();
    let details = AddressDetails {
        tokens,
        ..mock_address_details()
    };
    let app = address_app(ViewState::Loaded(details));
    let buffer = render_to_buffer(&app, 120, 40);

    let rows = (0..buffer.area.height)
        .filter(|&y| buffer_line(&buffer, y).contains("Unknown Token (?)"))
        .count();
    assert!(buffer_contains(&buffer, "ERC-20 Tokens (12)"));
    assert_eq!(rows, 12);
}

#[test]
fn test_address_without_tokens() {
    let details = AddressDetails {
        tokens: vec![],
        ..mock_address_details()
    };
    let app = address_app(ViewState::Loaded(details));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "ERC-20 Tokens (0)"));
    assert!(buffer_contains(&buffer, "No token balances"));
}

#[test]
fn test_address_history_note() {
    let app = address_app(ViewState::Loaded(mock_address_details()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(
        &buffer,
        "Transaction history is not available through the JSON-RPC API."
    ));
    assert!(buffer_contains(&buffer, "Etherscan"));
}

#[test]
fn test_address_zero_balance() {
    let details = AddressDetails {
        balance: U256::ZERO,
        tokens: vec![],
        ..mock_address_details()
    };
    let app = address_app(ViewState::Loaded(details));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "ETH Balance: 0.000000 ETH"));
}

#[test]
fn test_address_failed() {
    let app = address_app(ViewState::Failed(ADDRESS_ERROR.to_string()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, ADDRESS_ERROR));
    assert!(buffer_contains(&buffer, "r retry"));
}

#[test]
fn test_address_loading() {
    let app = address_app(ViewState::Loading);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Fetching address..."));
}
