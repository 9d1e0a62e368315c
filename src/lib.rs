//! ethex - Terminal Ethereum Explorer
//!
//! Browse blocks, transactions, addresses and token balances from the
//! terminal over any Ethereum JSON-RPC endpoint.

pub mod app;
pub mod config;
pub mod logging;
pub mod poller;
pub mod route;
pub mod rpc;
pub mod search;
pub mod ui;
pub mod units;

// Re-export commonly used types
pub use app::{App, Envelope, FetchOutcome, View, ViewState};
pub use config::Config;
pub use route::Route;
