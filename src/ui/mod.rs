//! Terminal viewer: a ratatui presentation service for decoded screens.

pub mod events;
pub mod footer;
pub mod header;
pub mod images;
pub mod layout;
pub mod mvi;
pub mod navigator;
pub mod presenter;
pub mod render;
pub mod terminal_guard;
pub mod theme;
pub mod viewer;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::ActionResolver;
use crate::config::Config;
use crate::document;
use crate::model::Screen;
use crate::render::ImageCache;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::images::settle_local_images;
use crate::ui::mvi::Reducer;
use crate::ui::navigator::SchemeNavigator;
use crate::ui::render::{draw, FrameContext};
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::viewer::{ViewerIntent, ViewerReducer, ViewerState};

/// Runs the viewer for the document at `path` until the user quits.
pub fn run(path: &Path, config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.viewer.tick_rate_ms);
    let images = ImageCache::new();
    let resolver = ActionResolver::new(SchemeNavigator::from_config(&config.navigation));
    let document_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut state = ViewerReducer::reduce(
        ViewerState::default(),
        ViewerIntent::Loaded(load_screen(path)),
    );
    let events = EventHandler::new(tick_rate);

    loop {
        let last_navigation = resolver.last_attempt();
        let ctx = FrameContext {
            document_name: &document_name,
            images: &images,
            last_navigation: last_navigation.as_ref(),
        };
        terminal.draw(|frame| draw(frame, &state, &ctx))?;
        if state.quit {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => match key_intent(key) {
                Some(KeyCommand::Intent(intent)) => {
                    state = ViewerReducer::reduce(state, intent);
                }
                Some(KeyCommand::Activate) => {
                    resolver.resolve_and_navigate(state.focused_action());
                }
                Some(KeyCommand::Reload) => {
                    images.clear();
                    state = ViewerReducer::reduce(state, ViewerIntent::Loaded(load_screen(path)));
                }
                None => {}
            },
            Ok(AppEvent::Tick) => settle_local_images(&images),
            Ok(AppEvent::Resize) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

enum KeyCommand {
    Intent(ViewerIntent),
    Activate,
    Reload,
}

fn key_intent(key: KeyEvent) -> Option<KeyCommand> {
    let command = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyCommand::Intent(ViewerIntent::Quit),
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
            KeyCommand::Intent(ViewerIntent::FocusNext)
        }
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
            KeyCommand::Intent(ViewerIntent::FocusPrev)
        }
        KeyCode::Enter => KeyCommand::Activate,
        KeyCode::Char('r') => KeyCommand::Reload,
        _ => return None,
    };
    Some(command)
}

fn load_screen(path: &Path) -> Result<Screen, String> {
    document::load(path).map_err(|err| {
        tracing::warn!(path = %path.display(), error = %err, "Document failed to load");
        err.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn command(code: KeyCode) -> Option<KeyCommand> {
        key_intent(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn key_bindings() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            assert!(matches!(command(code), Some(KeyCommand::Intent(ViewerIntent::Quit))));
        }
        for code in [KeyCode::Down, KeyCode::Tab, KeyCode::Char('j')] {
            assert!(matches!(command(code), Some(KeyCommand::Intent(ViewerIntent::FocusNext))));
        }
        for code in [KeyCode::Up, KeyCode::BackTab, KeyCode::Char('k')] {
            assert!(matches!(command(code), Some(KeyCommand::Intent(ViewerIntent::FocusPrev))));
        }
        assert!(matches!(command(KeyCode::Enter), Some(KeyCommand::Activate)));
        assert!(matches!(command(KeyCode::Char('r')), Some(KeyCommand::Reload)));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        for code in [KeyCode::Char('x'), KeyCode::Left, KeyCode::F(1)] {
            assert!(command(code).is_none());
        }
    }
}
