use anyhow::Result;
use aventura::api::client::CatalogClient;
use aventura::app::{self, App, PageArg, StartPage};
use aventura::config::Config;
use aventura::{event, ui};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Terminal client for an adventure travel catalog
#[derive(Parser, Debug)]
#[command(name = "aventura", version, about, long_about = None)]
struct Args {
    /// Collection endpoint base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Page to open at startup
    #[arg(short, long, value_enum)]
    page: Option<PageArg>,

    /// Record identifier for the detail page
    #[arg(short, long)]
    id: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    /// Run in read-only mode (block create and delete)
    #[arg(long)]
    readonly: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return None;
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .expect("Failed to open log file");

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("aventura started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("aventura").join("aventura.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".aventura").join("aventura.log");
    }
    PathBuf::from("aventura.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let config = Config::load();
    let api_url = args
        .api_url
        .clone()
        .unwrap_or_else(|| config.effective_api_url());

    tracing::info!("Using API endpoint: {}", api_url);

    let client = CatalogClient::new(&api_url)?;
    let mut app = App::new(client, config, args.readonly);

    // Bootstrap: resolve the start page from the CLI arguments and load
    // its data before entering the TUI. A detail request without an id
    // falls back to the listing page without issuing any fetch.
    match app::resolve_start_page(args.page, args.id.clone()) {
        StartPage::Home => app.load_home().await,
        StartPage::Detail(id) => app.open_detail(&id).await,
        StartPage::Register => app.open_register(),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = run_app(&mut terminal, &mut app).await;
    cleanup_terminal(&mut terminal)?;

    if let Err(err) = run_result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn cleanup_terminal<B: Backend + std::io::Write>(terminal: &mut Terminal<B>) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::handle_events(app).await? {
            return Ok(());
        }
    }
}
