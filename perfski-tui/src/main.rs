use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use perfski_core::{Session, SessionConfig};
use perfski_tui::{handle_key, ui, AppState};

#[derive(Parser)]
#[command(name = "perfski-tui", about = "Skier performance dashboard", version)]
struct Args {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the generator seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of skiers.
    #[arg(long)]
    count: Option<usize>,
}

/// Route logs to `<data_local_dir>/perfski/tui.log`. Returns the path, or
/// `None` when no writable location exists and logging stays off.
fn init_logging() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join("perfski");
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join("tui.log");
    let file = File::options().create(true).append(true).open(&path).ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(path)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_path = init_logging();

    let config = SessionConfig::resolve(args.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(args.seed, args.count)
        .context("invalid command-line override")?;
    let session = Session::start(config).context("failed to start session")?;
    let mut app = AppState::new(session);
    if log_path.is_none() {
        app.set_warning("journalisation désactivée: aucun dossier de données");
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("session ended");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll keeps the loop responsive to resizes.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }
    }
    Ok(())
}
