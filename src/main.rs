use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use hospitality_ai::config::{AppConfig, ConfigSource};
use hospitality_ai::core::error::Result;
use hospitality_ai::core::logging;
use hospitality_ai::tui::app::AppState;
use hospitality_ai::tui::services::Services;

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    // Logging is configured from the file, so its outcome is logged after
    let (config, source) = AppConfig::load_or_default(&AppConfig::config_path());

    let _log_guard = logging::init_tui(&config.logging);
    log::info!("{} v{} starting", hospitality_ai::NAME, hospitality_ai::VERSION);
    match source {
        ConfigSource::File(path) => log::info!("Loaded config from {}", path.display()),
        ConfigSource::Missing(path) => {
            log::debug!("No config file at {}, using defaults", path.display())
        }
        ConfigSource::Invalid(e) => log::warn!("{e}, using defaults"),
    }

    let services = Services::init(&config);
    let mut app = AppState::from_config(&config, services);

    let mut terminal = setup_terminal(config.tui.mouse_enabled)?;
    let result = app.run(&mut terminal, config.tick_rate()).await;
    let restored = restore_terminal(&mut terminal, config.tui.mouse_enabled);

    if let Err(e) = &result {
        log::error!("Dashboard exited with error: {e}");
    }
    result?;
    restored?;
    Ok(())
}

fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mouse: bool,
) -> Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
