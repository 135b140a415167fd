//! Streamly Admin - terminal control panel for a media-streaming service.
//!
//! Browse dashboard figures and statistics, manage users and subscription
//! plans, and export them to CSV or JSON, all from the terminal.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use streamly_admin::application::{App, AppMode, Page};
use streamly_admin::infrastructure::{init_logging, Settings};
use streamly_admin::presentation::{render_ui, InputHandler};

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(name = "streamly-admin", version, about = "Terminal admin panel for Streamly")]
struct Args {
    /// Settings file (defaults to ./streamly.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Page to open on start, e.g. `users` or `server-status`
    #[arg(long)]
    page: Option<Page>,
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Directory users.csv and plans.json are written to
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

impl Args {
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(page) = self.page {
            settings.start_page = page;
        }
        if let Some(log_file) = self.log_file {
            settings.log_file = log_file;
        }
        if let Some(export_dir) = self.export_dir {
            settings.export_dir = export_dir;
        }
        settings
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref()).context("failed to load settings")?;
    let settings = args.apply(settings);

    init_logging(&settings.log_file, &settings.log_filter)
        .with_context(|| format!("failed to open log file {}", settings.log_file.display()))?;
    tracing::info!(page = %settings.start_page, "starting streamly-admin");

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(
        settings.start_page,
        settings.notification_ttl(),
        settings.export_dir.clone(),
    );
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "terminal loop failed");
    }
    tracing::info!("shutting down");

    res.context("terminal error")
}

/// Draws, expires toasts, and dispatches key presses until `q` is pressed
/// in normal mode.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| render_ui(f, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_settings() {
        let args = Args::parse_from([
            "streamly-admin",
            "--page",
            "plans",
            "--export-dir",
            "out",
        ]);
        let settings = args.apply(Settings::default());

        assert_eq!(settings.start_page, Page::Plans);
        assert_eq!(settings.export_dir, PathBuf::from("out"));
        assert_eq!(settings.log_file, PathBuf::from("streamly-admin.log"));
    }

    #[test]
    fn test_unknown_page_is_rejected() {
        assert!(Args::try_parse_from(["streamly-admin", "--page", "nowhere"]).is_err());
    }
}
