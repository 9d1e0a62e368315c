use std::future::Future;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};
use tui_input::Input;

use crate::config::Config;
use crate::poller::Poller;
use crate::route::Route;
use crate::rpc::{
    load_address, load_block, load_home, load_transaction, AddressDetails, BlockInfo, ChainClient,
    HomeData, RpcClient, TxDetails, TxSummary,
};
use crate::search::SearchQuery;

pub const HOME_ERROR: &str = "Error occurred while fetching data. Please try again later.";
pub const BLOCK_ERROR: &str = "Error occurred while fetching block data. Please try again later.";
pub const TX_ERROR: &str =
    "Error occurred while fetching transaction data. Please try again later.";
pub const ADDRESS_ERROR: &str =
    "Error occurred while fetching address data. Please try again later.";
pub const BLOCK_NOT_FOUND: &str = "Cannot find the specified block data";
pub const TX_NOT_FOUND: &str = "Cannot find the specified transaction";

/// Lifecycle of one screen's data
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// The screen currently shown, with its route parameter and data
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Home(ViewState<HomeData>),
    Block {
        number: String,
        state: ViewState<Option<BlockInfo>>,
    },
    Transaction {
        hash: String,
        state: ViewState<Option<TxDetails>>,
    },
    Address {
        address: String,
        state: ViewState<AddressDetails>,
    },
}

impl View {
    fn new(route: &Route, loading: bool) -> Self {
        match route {
            Route::Home => View::Home(initial(loading)),
            Route::Block(number) => View::Block {
                number: number.clone(),
                state: initial(loading),
            },
            Route::Transaction(hash) => View::Transaction {
                hash: hash.clone(),
                state: initial(loading),
            },
            Route::Address(address) => View::Address {
                address: address.clone(),
                state: initial(loading),
            },
        }
    }
}

fn initial<T>(loading: bool) -> ViewState<T> {
    if loading {
        ViewState::Loading
    } else {
        ViewState::Idle
    }
}

/// Result of a background fetch
#[derive(Debug)]
pub enum FetchOutcome {
    Home(Result<HomeData>),
    Block(Result<Option<BlockInfo>>),
    Transaction(Result<Option<TxDetails>>),
    Address(Result<AddressDetails>),
}

/// A fetch result tagged with the screen lifetime that requested it
#[derive(Debug)]
pub struct Envelope {
    pub generation: u64,
    pub outcome: FetchOutcome,
}

pub struct App {
    pub config: Config,
    pub client: Option<Arc<dyn ChainClient>>,
    pub route: Route,
    pub history: Vec<Route>,
    pub view: View,
    pub search_input: Input,
    pub search_focused: bool,
    pub search_error: Option<String>,
    pub rpc_input: Input,
    pub rpc_error: Option<String>,
    pub selected_link: usize,
    pub should_quit: bool,
    generation: u64,
    inflight: Option<JoinHandle<()>>,
    poller: Option<Poller>,
    tx: mpsc::Sender<Envelope>,
}

impl App {
    /// Nothing is fetched until `start` opens the first route
    pub fn new(
        config: Config,
        client: Option<Arc<dyn ChainClient>>,
        tx: mpsc::Sender<Envelope>,
    ) -> Self {
        Self {
            config,
            client,
            route: Route::Home,
            history: Vec::new(),
            view: View::Home(ViewState::Idle),
            search_input: Input::default(),
            search_focused: false,
            search_error: None,
            rpc_input: Input::default(),
            rpc_error: None,
            selected_link: 0,
            should_quit: false,
            generation: 0,
            inflight: None,
            poller: None,
            tx,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn start(&mut self, route: Route) {
        self.open(route);
    }

    /// Open `route`, remembering the current one for `go_back`
    pub fn navigate(&mut self, route: Route) {
        self.history.push(self.route.clone());
        self.open(route);
    }

    pub fn go_back(&mut self) {
        match self.history.pop() {
            Some(prev) => self.open(prev),
            None => self.go_home(),
        }
    }

    pub fn go_home(&mut self) {
        self.history.clear();
        self.open(Route::Home);
    }

    /// Re-open the current route with fresh data
    pub fn refresh(&mut self) {
        self.open(self.route.clone());
    }

    fn teardown(&mut self) {
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }
        self.poller = None;
    }

    fn open(&mut self, route: Route) {
        self.teardown();
        self.generation += 1;
        self.selected_link = 0;
        self.route = route.clone();

        let Some(client) = self.client.clone() else {
            debug!(route = %route, "no RPC configured, not fetching");
            self.view = View::new(&route, false);
            return;
        };

        info!(route = %route, generation = self.generation, "opening route");
        self.view = View::new(&route, true);

        let generation = self.generation;
        match route {
            Route::Home => {
                let tx = self.tx.clone();
                let period = self.config.poll_interval();
                self.poller = Some(Poller::spawn(period, move || {
                    let client = Arc::clone(&client);
                    let tx = tx.clone();
                    async move {
                        // A cycle may not outlive its interval, or it would hold back the next tick
                        let result = timeout(period, load_home(client.as_ref()))
                            .await
                            .unwrap_or_else(|_| {
                                Err(anyhow!("Home refresh timed out after {}s", period.as_secs()))
                            });
                        let outcome = FetchOutcome::Home(result);
                        let _ = tx.send(Envelope { generation, outcome }).await;
                    }
                }));
            }
            Route::Block(number) => self.spawn_fetch(async move {
                FetchOutcome::Block(load_block(client.as_ref(), &number).await)
            }),
            Route::Transaction(hash) => self.spawn_fetch(async move {
                FetchOutcome::Transaction(load_transaction(client.as_ref(), &hash).await)
            }),
            Route::Address(address) => self.spawn_fetch(async move {
                FetchOutcome::Address(load_address(client.as_ref(), &address).await)
            }),
        }
    }

    fn spawn_fetch<F>(&mut self, fetch: F)
    where
        F: Future<Output = FetchOutcome> + Send + 'static,
    {
        let tx = self.tx.clone();
        let generation = self.generation;
        self.inflight = Some(tokio::spawn(async move {
            let outcome = fetch.await;
            let _ = tx.send(Envelope { generation, outcome }).await;
        }));
    }

    /// Store a fetch result, unless it belongs to a screen already left
    pub fn apply(&mut self, envelope: Envelope) {
        if envelope.generation != self.generation {
            debug!(
                stale = envelope.generation,
                current = self.generation,
                "discarding stale result"
            );
            return;
        }

        let route = &self.route;
        match (&mut self.view, envelope.outcome) {
            (View::Home(state), FetchOutcome::Home(result)) => {
                *state = settle(route, result, HOME_ERROR);
            }
            (View::Block { state, .. }, FetchOutcome::Block(result)) => {
                *state = settle(route, result, BLOCK_ERROR);
            }
            (View::Transaction { state, .. }, FetchOutcome::Transaction(result)) => {
                *state = settle(route, result, TX_ERROR);
            }
            (View::Address { state, .. }, FetchOutcome::Address(result)) => {
                *state = settle(route, result, ADDRESS_ERROR);
            }
            (_, outcome) => {
                warn!(route = %route, ?outcome, "result does not match the open screen");
                return;
            }
        }

        let count = self.links().len();
        if self.selected_link >= count {
            self.selected_link = count.saturating_sub(1);
        }
    }

    pub fn submit_search(&mut self) {
        match SearchQuery::parse(self.search_input.value()) {
            Ok(query) => {
                info!(query = %query.description(), "search submitted");
                self.search_input.reset();
                self.search_error = None;
                self.search_focused = false;
                self.navigate(query.into_route());
            }
            Err(e) => self.search_error = Some(e.to_string()),
        }
    }

    pub fn submit_rpc(&mut self) -> Result<(), String> {
        let url = self.rpc_input.value().trim().to_string();
        if url.is_empty() {
            return Err("RPC URL cannot be empty".to_string());
        }

        let client = RpcClient::new(&url).map_err(|e| format!("Invalid RPC URL: {e:#}"))?;
        self.client = Some(Arc::new(client));
        if let Err(e) = self.config.set_rpc(url) {
            warn!(error = %format!("{e:#}"), "could not persist RPC URL");
        }
        self.rpc_input.reset();
        self.rpc_error = None;
        self.go_home();
        Ok(())
    }

    pub fn needs_rpc_setup(&self) -> bool {
        self.client.is_none()
    }

    /// Link targets of the current screen, in display order
    pub fn links(&self) -> Vec<Route> {
        match &self.view {
            View::Home(ViewState::Loaded(home)) => {
                let mut links = Vec::new();
                for block in &home.latest_blocks {
                    links.push(Route::Block(block.number.to_string()));
                    links.push(Route::Address(block.miner.clone()));
                }
                for tx in &home.latest_transactions {
                    push_summary_links(tx, &mut links);
                }
                links
            }
            View::Block {
                state: ViewState::Loaded(Some(block)),
                ..
            } => {
                let mut links = vec![Route::Address(block.miner.clone())];
                for tx in &block.transactions {
                    push_summary_links(tx, &mut links);
                }
                links
            }
            View::Transaction {
                state: ViewState::Loaded(Some(details)),
                ..
            } => {
                let tx = &details.tx;
                let mut links = Vec::new();
                if let Some(n) = tx.block_number {
                    links.push(Route::Block(n.to_string()));
                }
                links.push(Route::Address(tx.from.clone()));
                if let Some(to) = &tx.to {
                    links.push(Route::Address(to.clone()));
                }
                if let Some(receipt) = &details.receipt {
                    if let Some(created) = &receipt.contract_address {
                        links.push(Route::Address(created.clone()));
                    }
                    links.extend(receipt.logs.iter().map(|l| Route::Address(l.address.clone())));
                }
                links
            }
            View::Address {
                state: ViewState::Loaded(details),
                ..
            } => details
                .tokens
                .iter()
                .map(|t| Route::Address(format!("{:?}", t.contract)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Move selection up, wrapping to the last link
    pub fn select_prev(&mut self) {
        let count = self.links().len();
        if count == 0 {
            return;
        }
        self.selected_link = match self.selected_link {
            0 => count - 1,
            i => (i - 1).min(count - 1),
        };
    }

    /// Move selection down, wrapping to the first link
    pub fn select_next(&mut self) {
        let count = self.links().len();
        if count == 0 {
            return;
        }
        self.selected_link = (self.selected_link + 1) % count;
    }

    pub fn follow_selected_link(&mut self) {
        if let Some(route) = self.links().into_iter().nth(self.selected_link) {
            self.navigate(route);
        }
    }
}

/// Hash, sender and (unless a contract creation) recipient of a list row
fn push_summary_links(tx: &TxSummary, links: &mut Vec<Route>) {
    links.push(Route::Transaction(tx.hash.clone()));
    links.push(Route::Address(tx.from.clone()));
    if let Some(to) = &tx.to {
        links.push(Route::Address(to.clone()));
    }
}

fn settle<T>(route: &Route, result: Result<T>, message: &str) -> ViewState<T> {
    match result {
        Ok(data) => ViewState::Loaded(data),
        Err(e) => {
            error!(route = %route, error = %format!("{e:#}"), "fetch failed");
            ViewState::Failed(message.to_string())
        }
    }
}
