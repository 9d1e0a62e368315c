use super::*;
use ethex::app::ViewState;
use tui_input::Input;

// ==================== RPC Setup Tests ====================

#[test]
fn test_rpc_setup_screen_without_client() {
    let app = create_test_app_no_rpc();
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "RPC Configuration Required"));
    assert!(buffer_contains(&buffer, "Enter an Ethereum RPC URL"));
    assert!(buffer_contains(&buffer, "https://eth-mainnet.g.alchemy.com/v2/..."));
    assert!(buffer_contains(&buffer, "Press Enter to connect"));
    assert!(!buffer_contains(&buffer, "Search by Address"));
}

#[test]
fn test_rpc_setup_shows_typed_url() {
    let mut app = create_test_app_no_rpc();
    app.rpc_input = Input::new("http://localhost:8545".to_string());
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "http://localhost:8545"));
    assert!(!buffer_contains(&buffer, "https://eth-mainnet.g.alchemy.com/v2/..."));
}

#[test]
fn test_rpc_setup_shows_error() {
    let mut app = create_test_app_no_rpc();
    app.rpc_error = Some("RPC URL cannot be empty".to_string());
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "RPC URL cannot be empty"));
}

// ==================== Search Bar Tests ====================

#[test]
fn test_search_bar_placeholder() {
    let app = home_app(ViewState::Loaded(mock_home_data()));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Search"));
    assert!(buffer_contains(&buffer, "Search by Address / Txn Hash / Block"));
}

#[test]
fn test_search_bar_shows_input() {
    let mut app = home_app(ViewState::Loaded(mock_home_data()));
    app.search_focused = true;
    app.search_input = Input::new("19000000".to_string());
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(!buffer_contains(&buffer, "Search by Address / Txn Hash / Block"));
    assert!(buffer_contains(&buffer, "Enter search • Esc cancel"));
}

#[test]
fn test_search_error_replaces_status_line() {
    let mut app = home_app(ViewState::Loaded(mock_home_data()));
    app.search_error = Some("Invalid search query".to_string());
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Invalid search query"));
    assert!(!buffer_contains(&buffer, "RPC: localhost:8545"));
}

// ==================== Status Line Tests ====================

#[test]
fn test_status_line_shows_route_and_rpc_host() {
    let app = block_app(ViewState::Loading);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "/block/19000000  RPC: localhost:8545"));
}

#[test]
fn test_navigation_help() {
    let app = home_app(ViewState::Loaded(mock_home_data()));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "/ search"));
    assert!(buffer_contains(&buffer, "q quit"));
}

// ==================== Terminal Size Tests ====================

#[test]
fn test_small_terminal_does_not_panic() {
    let apps = vec![
        create_test_app_no_rpc(),
        home_app(ViewState::Loaded(mock_home_data())),
        home_app(ViewState::Loading),
        block_app(ViewState::Loaded(Some(mock_block_info()))),
        tx_app(ViewState::Loaded(Some(mock_tx_details()))),
        address_app(ViewState::Loaded(mock_address_details())),
        address_app(ViewState::Failed("boom".to_string())),
    ];

    for app in &apps {
        for (w, h) in [(20, 5), (40, 10), (1, 1)] {
            let _ = render_to_buffer(app, w, h);
        }
    }
}

#[test]
fn test_large_terminal() {
    let app = block_app(ViewState::Loaded(Some(mock_block_info())));
    let buffer = render_to_buffer(&app, 250, 80);

    assert!(buffer_contains(&buffer, "Block #19000000 Details"));
    assert!(buffer_contains(&buffer, "Transaction List (3)"));
}
