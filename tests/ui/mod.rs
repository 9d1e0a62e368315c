//! UI rendering tests for ethex
//!
//! These tests render each screen into a ratatui `TestBackend` and inspect the buffer.
//! Run with: cargo test --test ui_tests

pub mod address_tests;
pub mod common_tests;
pub mod tx_tests;

use ethex::app::{App, View, ViewState};
use ethex::config::Config;
use ethex::route::Route;
use ethex::rpc::{
    AddressDetails, BlockInfo, ChainClient, HomeData, LogInfo, ReceiptInfo, RpcClient,
    TokenBalance, TokenMetadata, TxDetails, TxInfo, TxSummary,
};
use ethex::ui::draw;

use alloy::primitives::{Address, Bytes, U256};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::sync::Arc;
use tokio::sync::mpsc;

// ==================== Test Data Builders ====================

pub const TX_HASH: &str = "0xaaaa111122223333444455556666777788889999aaaabbbbccccddddeeeeffff";
pub const FROM: &str = "0x1111111111111111111111111111111111111111";
pub const TO: &str = "0x2222222222222222222222222222222222222222";
pub const MINER: &str = "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5";

pub fn one_eth() -> U256 {
    U256::from(10u64).pow(U256::from(18))
}

pub fn mock_config() -> Config {
    Config {
        rpc_url: Some("http://localhost:8545".to_string()),
        ..Config::default()
    }
}

pub fn mock_tx_summaries() -> Vec<TxSummary> {
    vec![
        TxSummary {
            hash: TX_HASH.to_string(),
            from: FROM.to_string(),
            to: Some(TO.to_string()),
            value: one_eth(),
        },
        TxSummary {
            hash: "0xbbbb111122223333444455556666777788889999aaaabbbbccccddddeeeeffff".to_string(),
            from: "0x3333333333333333333333333333333333333333".to_string(),
            to: Some("0x4444444444444444444444444444444444444444".to_string()),
            value: U256::ZERO,
        },
        TxSummary {
            hash: "0xcccc111122223333444455556666777788889999aaaabbbbccccddddeeeeffff".to_string(),
            from: "0x5555555555555555555555555555555555555555".to_string(),
            to: None,
            value: U256::ZERO,
        },
    ]
}

pub fn mock_block_info() -> BlockInfo {
    BlockInfo {
        number: 19000000,
        hash: "0xabc123def456789abc123def456789abc123def456789abc123def456789abcd".to_string(),
        parent_hash: "0xdef456789abc123def456789abc123def456789abc123def456789abc123def4"
            .to_string(),
        timestamp: 1700000000,
        miner: MINER.to_string(),
        gas_limit: 30_000_000,
        gas_used: 15_000_000,
        difficulty: U256::ZERO,
        total_difficulty: Some(U256::from(58_750_003_716_598_352_816_469u128)),
        nonce: "0x0000000000000000".to_string(),
        extra_data: "0x7273796e632d6275696c6465722e78797a".to_string(),
        size: Some(125000),
        tx_count: 3,
        transactions: mock_tx_summaries(),
    }
}

pub fn mock_home_data() -> HomeData {
    let latest_blocks = (0..10)
        .map(|i| BlockInfo {
            number: 19000000 - i,
            transactions: vec![],
            tx_count: 150,
            ..mock_block_info()
        })
        .collect();

    HomeData {
        latest_blocks,
        latest_transactions: mock_tx_summaries(),
    }
}

pub fn mock_tx_info() -> TxInfo {
    TxInfo {
        hash: TX_HASH.to_string(),
        from: FROM.to_string(),
        to: Some(TO.to_string()),
        value: U256::from(1_500_000_000_000_000_000u128), // 1.5 ETH
        gas_price: Some(50_000_000_000),
        gas_limit: 100000,
        nonce: 42,
        block_number: Some(19000000),
        input: Bytes::from_static(&[0xa9, 0x05, 0x9c, 0xbb]),
    }
}

pub fn mock_receipt() -> ReceiptInfo {
    ReceiptInfo {
        status: true,
        gas_used: 65000,
        effective_gas_price: 50_000_000_000,
        contract_address: None,
        logs: vec![
            LogInfo {
                index: Some(0),
                address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
                topics: vec![
                    "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
                        .to_string(),
                ],
                data: "0x000000000000000000000000000000000000000000000000000000003b9aca00"
                    .to_string(),
            },
            LogInfo {
                index: Some(1),
                address: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".to_string(),
                topics: vec![],
                data: "0x".to_string(),
            },
        ],
    }
}

pub fn mock_tx_details() -> TxDetails {
    TxDetails {
        tx: mock_tx_info(),
        receipt: Some(mock_receipt()),
    }
}

pub fn mock_address_details() -> AddressDetails {
    AddressDetails {
        address: FROM.to_string(),
        balance: U256::from(5_500_000_000_000_000_000u128), // 5.5 ETH
        tokens: vec![
            TokenBalance {
                contract: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
                    .parse::<Address>()
                    .unwrap(),
                balance: U256::from(10000_000_000u128), // 10000 USDC
                metadata: TokenMetadata {
                    name: Some("USD Coin".to_string()),
                    symbol: Some("USDC".to_string()),
                    decimals: Some(6),
                    logo: None,
                },
            },
            TokenBalance {
                contract: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"
                    .parse::<Address>()
                    .unwrap(),
                balance: U256::from(2_500_000_000_000_000_000u128), // 2.5 with default decimals
                metadata: TokenMetadata::default(),
            },
        ],
    }
}

/// App showing `view` at `route`, with an unconnected RPC client
pub fn create_test_app(route: Route, view: View) -> App {
    let (tx, _rx) = mpsc::channel(1);
    let client: Arc<dyn ChainClient> = Arc::new(RpcClient::new("http://localhost:8545").unwrap());
    let mut app = App::new(mock_config(), Some(client), tx);
    app.route = route;
    app.view = view;
    app
}

pub fn create_test_app_no_rpc() -> App {
    let (tx, _rx) = mpsc::channel(1);
    App::new(Config::default(), None, tx)
}

pub fn home_app(state: ViewState<HomeData>) -> App {
    create_test_app(Route::Home, View::Home(state))
}

pub fn block_app(state: ViewState<Option<BlockInfo>>) -> App {
    create_test_app(
        Route::Block("19000000".to_string()),
        View::Block {
            number: "19000000".to_string(),
            state,
        },
    )
}

pub fn tx_app(state: ViewState<Option<TxDetails>>) -> App {
    create_test_app(
        Route::Transaction(TX_HASH.to_string()),
        View::Transaction {
            hash: TX_HASH.to_string(),
            state,
        },
    )
}

pub fn address_app(state: ViewState<AddressDetails>) -> App {
    create_test_app(
        Route::Address(FROM.to_string()),
        View::Address {
            address: FROM.to_string(),
            state,
        },
    )
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        content.push_str(&buffer_line(buffer, y));
        content.push('\n');
    }
    content
}

/// Get a specific line from the buffer
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let mut line = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line.trim_end().to_string()
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    for y in 0..buffer.area.height {
        println!("{}", buffer_line(buffer, y));
    }
}
