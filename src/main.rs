mod api;
mod app;
mod config;
mod dashboard;
mod food;
mod form;
mod logging;
mod ui;

use api::{HttpClient, NetworkHttpClient};
use app::App;
use clap::Parser;
use config::{Config, Overrides};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dashboard::Dashboard;
use std::path::PathBuf;
use std::time::Duration;

/// Terminal dashboard for a restaurant's menu of food plates
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of the menu API (the `/foods` collection lives under it)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Path to the JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Directory for log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?.apply(Overrides {
        base_url: cli.base_url,
        timeout_secs: cli.timeout,
        log_dir: cli.log_dir,
    });

    let log_dir = config.resolved_log_dir()?;
    let _log_guard = logging::init(&log_dir, &config.log_level)?;
    let client = NetworkHttpClient::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
    tracing::info!(
        base_url = client.base_url(),
        config = %config_path.display(),
        "starting food dashboard"
    );

    // Init terminal
    let mut terminal = ratatui::init();
    let mut app = App::new(Dashboard::new(client));

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    ratatui::restore();

    // Returning (not exiting) drops the log guard, which flushes the file
    if let Err(e) = result {
        tracing::error!(error = %e, "terminal loop failed");
        return Err(e);
    }

    tracing::info!("bye");
    Ok(())
}

async fn run_app<C: HttpClient>(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App<C>,
) -> Result<(), Box<dyn std::error::Error>> {
    // First frame shows "Loading menu..." while the initial fetch runs
    terminal.draw(|frame| ui::render(app, frame))?;
    app.init().await;

    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(app, key).await;
            }
        }
    }
}

async fn handle_key<C: HttpClient>(app: &mut App<C>, key: KeyEvent) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // An open modal owns the keyboard
    if app.dashboard.modal().is_open() {
        app.handle_modal_key(key).await;
        return;
    }

    handle_list_key(app, key).await;
}

async fn handle_list_key<C: HttpClient>(app: &mut App<C>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.list_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.list_prev();
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.list_first();
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.list_last();
        }
        KeyCode::Char('n') => {
            app.open_add();
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            app.edit_selected();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected().await;
        }
        KeyCode::Char('r') => {
            app.reload().await;
        }
        _ => {}
    }
}
