use crate::app::{
    action::Action, command::Command, context::AppContext, input::map_event_to_action,
    interpreter::CommandError, reducer, state::AppState, ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::ffi::OsString;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

const TICK_RATE: Duration = Duration::from_millis(250);
const DEBOUNCE: Duration = Duration::from_millis(500);

/// File the weekly mail is written to, inside the data directory.
pub const MAIL_FILE: &str = "mail.txt";

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    ctx: &mut AppContext,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, ctx, event_rx).await
}

/// Runs until quit. A closed event channel counts as quit.
pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    ctx: &mut AppContext,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Subscribe before the first load so its publication is seen
    let mut menu_rx = ctx.store.subscribe();

    // Persisted menu watcher; kept alive for the whole loop
    let _watcher = match ctx.store.location() {
        Some(path) => match watch_menu_file(&path, action_tx.clone()) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Menu watcher unavailable");
                None
            }
        },
        None => None,
    };

    // Initial Load
    ctx.store.load();

    loop {
        // --- 1. Render ---
        terminal.draw(|f| ui::draw(f, &app_state))?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            maybe_event = event_rx.recv() => match maybe_event {
                Some(Ok(event)) => map_event_to_action(event, &app_state, terminal.size()?),
                Some(Err(e)) => return Err(e.into()),
                None => Some(Action::Quit),
            },

            // Store publications
            Ok(()) = menu_rx.changed() => {
                let grid = menu_rx.borrow_and_update().clone();
                Some(Action::MenuPublished(grid.map(Box::new)))
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        // Commands may answer with a follow-up action, fed straight back
        let mut next = action;
        while let Some(action) = next.take() {
            let Some(command) = reducer::update(&mut app_state, action) else {
                break;
            };
            next = handle_command(command, ctx, &action_tx).await?;
        }

        if app_state.should_quit {
            break;
        }
    }

    info!("Event loop finished");
    Ok(())
}

fn watch_menu_file(
    path: &std::path::Path,
    action_tx: mpsc::Sender<Action>,
) -> Result<notify::RecommendedWatcher> {
    let file_name: Option<OsString> = path.file_name().map(ToOwned::to_owned);
    let (notify_tx, mut notify_rx) = mpsc::channel(1);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let touches_menu = event
                .paths
                .iter()
                .any(|p| p.file_name().map(ToOwned::to_owned) == file_name);
            if touches_menu {
                let _ = notify_tx.try_send(());
            }
        }
    })?;

    // The file may not exist yet, so watch its directory
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        debug!(dir = %dir.display(), "Watching for menu changes");
    }

    tokio::spawn(async move {
        let mut pending = false;
        loop {
            if pending {
                tokio::select! {
                    Some(()) = notify_rx.recv() => {}
                    () = tokio::time::sleep(DEBOUNCE) => {
                        if action_tx.send(Action::ExternalChangeDetected).await.is_err() {
                            break;
                        }
                        pending = false;
                    }
                }
            } else if notify_rx.recv().await.is_some() {
                pending = true;
            } else {
                break;
            }
        }
    });

    Ok(watcher)
}

/// Runs a side effect. Quick ones answer directly; slow ones report back
/// through `tx` from a spawned task.
pub(crate) async fn handle_command(
    command: Command,
    ctx: &mut AppContext,
    tx: &mpsc::Sender<Action>,
) -> Result<Option<Action>> {
    match command {
        Command::Execute(text) => {
            let outcome = ctx.execute(&text);
            Ok(Some(Action::CommandExecuted(text, outcome)))
        }
        Command::ReloadMenu => {
            if ctx.store.reload_if_changed() {
                info!("Menu reloaded after an external change");
            }
            Ok(None)
        }
        Command::GenerateMail => {
            let Some(grid) = ctx.store.grid().cloned() else {
                return Ok(Some(Action::ErrorOccurred(
                    CommandError::Uninitialized.to_string(),
                )));
            };
            let mail = ctx.mail.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let content = mail.generate(&grid).await;
                let _ = tx.send(Action::MailGenerated(content)).await;
            });
            Ok(None)
        }
        Command::SaveMail(content) => {
            let path = ctx.data_dir.join(MAIL_FILE);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = async {
                    if let Some(dir) = path.parent() {
                        tokio::fs::create_dir_all(dir).await?;
                    }
                    tokio::fs::write(&path, content).await
                }
                .await;
                let action = match result {
                    Ok(()) => {
                        info!(path = %path.display(), "Mail saved");
                        Action::MailSaved(Ok(path))
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to save mail");
                        Action::MailSaved(Err(e.to_string()))
                    }
                };
                let _ = tx.send(action).await;
            });
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
