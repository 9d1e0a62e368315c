use ethex::app::{App, Envelope};
use ethex::config::Config;
use ethex::route::Route;
use ethex::rpc::{ChainClient, RpcClient};
use ethex::search::SearchQuery;
use ethex::{logging, ui};

use anyhow::Result;
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tui_input::backend::crossterm::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    let log_path = config.log_file_path()?;
    logging::init(&log_path, &config.log_level)?;
    info!(log_file = ?log_path, "ethex starting");

    let route = initial_route(std::env::args().nth(1));

    run_tui(config, route).await?;

    info!("ethex exiting");
    Ok(())
}

/// `ethex [ROUTE_OR_QUERY]`: a path like `/block/1` or any search term
fn initial_route(arg: Option<String>) -> Route {
    let Some(arg) = arg else {
        return Route::Home;
    };

    if let Some(route) = Route::from_path(&arg) {
        return route;
    }

    match SearchQuery::parse(&arg) {
        Ok(query) => query.into_route(),
        Err(e) => {
            warn!(arg = %arg, error = %e, "ignoring start argument");
            Route::Home
        }
    }
}

fn connect(config: &Config) -> Option<Arc<dyn ChainClient>> {
    let url = config.rpc_url.as_ref()?;
    match RpcClient::new(url) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            error!(url = %url, error = %format!("{e:#}"), "configured RPC URL is unusable");
            None
        }
    }
}

async fn run_tui(config: Config, route: Route) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let (tx, mut rx) = mpsc::channel::<Envelope>(32);
    let client = connect(&config);
    let mut app = App::new(config, client, tx);
    app.start(route);

    let result = run_event_loop(&mut terminal, &mut app, &mut rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    rx: &mut mpsc::Receiver<Envelope>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Check for async results
        while let Ok(envelope) = rx.try_recv() {
            app.apply(envelope);
        }

        // Poll for input events
        if event::poll(Duration::from_millis(50))? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key, &ev);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: &KeyEvent, ev: &Event) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.needs_rpc_setup() {
        match key.code {
            KeyCode::Enter => {
                if let Err(e) = app.submit_rpc() {
                    app.rpc_error = Some(e);
                }
            }
            KeyCode::Esc => app.should_quit = true,
            _ => {
                app.rpc_input.handle_event(ev);
            }
        }
        return;
    }

    if app.search_focused {
        match key.code {
            KeyCode::Enter => app.submit_search(),
            KeyCode::Esc => app.search_focused = false,
            _ => {
                app.search_input.handle_event(ev);
            }
        }
        return;
    }

    match key.code {
        KeyCode::Char('/') | KeyCode::Char('s') => {
            app.search_focused = true;
            app.search_error = None;
        }
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.follow_selected_link(),
        KeyCode::Backspace | KeyCode::Char('b') => app.go_back(),
        KeyCode::Char('h') => app.go_home(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}
