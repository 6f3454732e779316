use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod cli;
mod command_id;
mod dispatcher;
mod domain_models;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod progress;
mod reducers;
mod state;
mod utils;
mod view_models;
mod views;

use actions::{Action, BootstrapAction, GlobalAction};
use background::{spawn_background_worker, SharedState};
use cli::Cli;
use dispatcher::Dispatcher;
use portal_client::ClientManager;
use portal_config::AppConfig;
use reducers::app_reducer::reduce;
use state::{ActiveView, AppState};

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log_file = logger::init(cli.log_level.map(Into::into))?;
    log::info!("Starting mfe-portal, logging to {}", log_file.display());

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{:#}", e)))?,
        None => AppConfig::load(),
    };
    if let Some(owner) = cli.owner {
        config.owner = owner;
    }
    log::info!(
        "Workflow {}/{}/{} on {}",
        config.owner,
        config.workflow_repository,
        config.workflow_file,
        config.workflow_ref
    );

    let runtime = tokio::runtime::Runtime::new()?;

    let mut initial_state = AppState::from_config(&config);
    if let Some(panel) = &cli.panel {
        initial_state.portal.active_view = ActiveView::from_id(panel);
    }
    let state: SharedState = Arc::new(RwLock::new(initial_state));
    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();

    let chain = middleware::default_chain(runtime.handle().clone(), ClientManager::new(), &config);
    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&state),
        chain,
    );
    let dispatcher = Dispatcher::new(action_tx);
    dispatcher.dispatch(Action::Bootstrap(BootstrapAction::Start));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &state, &dispatcher, &result_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if !worker.is_finished() {
        dispatcher.dispatch(Action::Global(GlobalAction::Quit));
    }
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }
    // Pending progress timers die with the runtime
    runtime.shutdown_background();

    if let Err(err) = &result {
        log::error!("Terminal error: {}", err);
    }
    log::info!("Exiting mfe-portal");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &SharedState,
    dispatcher: &Dispatcher,
    result_rx: &Receiver<Action>,
) -> io::Result<()> {
    loop {
        // Apply everything the middleware let through
        {
            let mut guard = state
                .write()
                .map_err(|e| io::Error::other(e.to_string()))?;
            while let Ok(action) = result_rx.try_recv() {
                let current = std::mem::take(&mut *guard);
                *guard = reduce(current, &action);
            }
        }

        let snapshot = state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?
            .clone();

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&snapshot, area, frame);
        })?;

        if !snapshot.running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    dispatcher.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
