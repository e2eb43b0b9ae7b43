//! Noughts - terminal tic-tac-toe

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod confetti;
mod config;
mod input;
mod overlay;
mod scheduler;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::Config;
use scheduler::AppEvent;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Input poll timeout, also the animation frame length.
const FRAME: Duration = Duration::from_millis(33);

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?.with_overrides(cli.vs_computer, cli.log_file);

    init_tracing(config.log_file())?;
    info!(?config, "Starting Noughts");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let app = App::new(&config, event_tx, StdRng::from_os_rng());

    let res = run_app(&mut terminal, app, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Sends tracing output to a file so it does not fight the UI for the terminal.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Draw, drain background events, read input, advance animations.
#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Tui,
    mut app: App,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.set_viewport(size.width, size.height);
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let area = Rect::new(0, 0, size.width, size.height);
                    if let Some(index) = ui::cell_at(area, column, row) {
                        app.click(index);
                    }
                }
                _ => {}
            }
        }

        app.tick(Instant::now());
        if app.should_quit() {
            return Ok(());
        }
        tokio::task::yield_now().await;
    }
}
