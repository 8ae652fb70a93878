use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use mealplan::app::{
    config::AppConfig,
    context::AppContext,
    logging::init_logging,
    r#loop::run_loop,
    state::{AppState, ErrorState},
};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // A malformed config still starts the app, on defaults, with the error on screen
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(format!("{e:#}"))),
    };

    init_logging(&config.data_dir())?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting mealplan");

    // Built BEFORE terminal setup so a broken asset file doesn't leave the
    // terminal in raw mode.
    let mut ctx = AppContext::from_config(config)?;
    let mut app_state = AppState::new(&ctx.config, ctx.days.clone(), ctx.catalog.clone());

    if let Some(message) = config_error {
        tracing::warn!(error = %message, "Config ignored");
        app_state.last_error = Some(ErrorState::failure(message));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, &mut ctx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "Event loop failed");
        println!("{:?}", err);
    }

    Ok(())
}
