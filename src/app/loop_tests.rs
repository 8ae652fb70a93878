use super::*;
use crate::app::config::AppConfig;
use crate::app::state::AppMode;
use crate::domain::models::Zone;
use crate::infrastructure::{
    assets::FileTemplateSource, file_storage::FileStorage, memory_storage::MemoryStorage,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use std::path::Path;
use std::sync::Arc;

fn memory_context(data_dir: &Path) -> AppContext {
    let config = AppConfig {
        data_dir: Some(data_dir.to_path_buf()),
        ..Default::default()
    };
    AppContext::new(
        config,
        Arc::new(MemoryStorage::new()),
        Arc::new(FileTemplateSource::bundled()),
    )
    .unwrap()
}

fn file_context(data_dir: &Path) -> AppContext {
    let config = AppConfig {
        data_dir: Some(data_dir.to_path_buf()),
        ..Default::default()
    };
    AppContext::new(
        config,
        Arc::new(FileStorage::new(data_dir)),
        Arc::new(FileTemplateSource::bundled()),
    )
    .unwrap()
}

fn key(c: char) -> Result<Event, std::io::Error> {
    Ok(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
}

#[tokio::test]
async fn test_handle_execute_answers_with_outcome() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut ctx = memory_context(temp_dir.path());
    let (tx, _rx) = mpsc::channel(1);

    let action = handle_command(Command::Execute("mon-u-t soup".to_string()), &mut ctx, &tx)
        .await
        .unwrap();
    match action {
        Some(Action::CommandExecuted(cmd, outcome)) => {
            assert_eq!(cmd, "mon-u-t soup");
            assert!(!outcome.success, "store not loaded yet");
        }
        other => panic!("Expected CommandExecuted, got {other:?}"),
    }

    ctx.store.load();
    let action = handle_command(Command::Execute("mon-u-t soup".to_string()), &mut ctx, &tx)
        .await
        .unwrap();
    assert!(matches!(action, Some(Action::CommandExecuted(_, ref o)) if o.success));
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_executed_command_is_logged_once() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut ctx = memory_context(temp_dir.path());
    ctx.store.load();
    let (tx, _rx) = mpsc::channel(1);

    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    handle_command(Command::Execute("mon-u-t soup".to_string()), &mut ctx, &tx)
        .await
        .unwrap();

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert_eq!(output.matches("Command executed").count(), 1, "{output}");
}

#[tokio::test]
async fn test_generate_mail_before_load_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut ctx = memory_context(temp_dir.path());
    let (tx, _rx) = mpsc::channel(1);

    let action = handle_command(Command::GenerateMail, &mut ctx, &tx)
        .await
        .unwrap();
    assert_eq!(
        action,
        Some(Action::ErrorOccurred("Menu data is not initialized.".to_string()))
    );
}

#[tokio::test]
async fn test_generate_then_save_mail() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut ctx = memory_context(temp_dir.path());
    ctx.store.load();
    assert!(ctx.execute("mon-u-s jambon").success);

    let (tx, mut rx) = mpsc::channel(2);
    assert_eq!(
        handle_command(Command::GenerateMail, &mut ctx, &tx)
            .await
            .unwrap(),
        None
    );
    let Some(Action::MailGenerated(content)) = rx.recv().await else {
        panic!("Expected MailGenerated");
    };
    assert!(content.contains("Jambon Beurre"));

    handle_command(Command::SaveMail(content.clone()), &mut ctx, &tx)
        .await
        .unwrap();
    match rx.recv().await {
        Some(Action::MailSaved(Ok(path))) => {
            assert_eq!(path, temp_dir.path().join(MAIL_FILE));
            assert_eq!(std::fs::read_to_string(path).unwrap(), content);
        }
        other => panic!("Expected MailSaved, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reload_picks_up_external_write() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut ctx = file_context(temp_dir.path());
    ctx.store.load();
    let (tx, _rx) = mpsc::channel(1);

    // A second instance writes the same file
    let mut other = file_context(temp_dir.path());
    other.store.load();
    assert!(other.execute("tue-u-t pasta").success);

    handle_command(Command::ReloadMenu, &mut ctx, &tx)
        .await
        .unwrap();
    assert_eq!(
        ctx.store.grid().and_then(|g| g.slot(1, Zone::Upper)).map(|e| e.name()),
        Some("pasta")
    );
}

#[tokio::test]
async fn test_typed_command_reaches_the_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut ctx = memory_context(temp_dir.path());
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    let (event_tx, event_rx) = mpsc::channel(100);
    let _ = event_tx.send(key(':')).await;
    for c in "wed-l-t ".chars() {
        let _ = event_tx.send(key(c)).await;
    }
    // Rejected: the upper zone is still empty
    let _ = event_tx
        .send(Ok(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))))
        .await;
    let _ = event_tx.send(Ok(Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))).await;
    let _ = event_tx.send(key(':')).await;
    for c in "wed-u-t salad".chars() {
        let _ = event_tx.send(key(c)).await;
    }
    let _ = event_tx
        .send(Ok(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))))
        .await;
    drop(event_tx);

    let state = AppState::default();
    tokio::time::timeout(
        std::time::Duration::from_secs(10),
        run_loop_with_events(&mut terminal, state, &mut ctx, event_rx),
    )
    .await
    .expect("loop should stop once input ends")
    .unwrap();

    let grid = ctx.store.grid().unwrap();
    assert_eq!(grid.slot(2, Zone::Upper).map(|e| e.name()), Some("salad"));
    assert!(grid.slot(2, Zone::Lower).is_some_and(|e| e.is_unset()));
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut ctx = memory_context(temp_dir.path());
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();
    assert_eq!(app_state.mode, AppMode::Normal);

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..5000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Dropping the sender ends the loop
    });

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, &mut ctx, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
    assert!(ctx.store.is_initialized());
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            // 'q' would end the run early
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(if c == 'q' { 'x' } else { c })
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
