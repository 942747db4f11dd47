mod app;
mod config;
mod keybinds;

use app::{App, Route};
use config::Config;
use directories::ProjectDirs;
use pocket_tui_auth::FileTokenStore;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn get_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "pocket-tui", "pocket-tui") {
        proj_dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config/default.toml")
    }
}

// Stdout belongs to the terminal UI, so tracing goes to a file in the data
// directory. The guard has to outlive the run loop.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let proj_dirs = ProjectDirs::from("com", "pocket-tui", "pocket-tui")?;
    let log_dir = proj_dirs.data_dir().join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;

    let appender = tracing_appender::rolling::never(log_dir, "pocket-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let _log_guard = init_tracing();

    terminal::enable_raw_mode()?;
    let mut terminal = ratatui::init();
    ratatui::crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

    let result = run(&mut terminal);

    let _ = ratatui::crossterm::execute!(io::stdout(), LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    ratatui::restore();

    result
}

fn run(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = get_config_path();
    let mut config = Config::load_or_default(&config_path);
    if let Ok(url) = std::env::var("POCKET_BACKEND_URL") {
        config.backend.base_url = url;
    }

    let rt = tokio::runtime::Runtime::new()?;
    // Keeps tokio::spawn valid from the synchronous event loop below.
    let _rt_guard = rt.enter();

    let token_store = Arc::new(FileTokenStore::new()?);
    let mut app = App::new(config, token_store);

    // `pocket-tui login` is the deep-link target the user lands on after
    // granting access in the browser.
    if std::env::args().nth(1).as_deref() == Some("login") {
        app.navigate(Route::Login);
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;

            if let Event::Key(key) = &event {
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
            }

            if let Ok(should_quit) = app.handle_event(event) {
                if should_quit {
                    break;
                }
            }
        }

        app.process_app_events();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
