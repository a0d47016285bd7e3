use crate::model::{Action, Screen};
use crate::render::interactive_targets;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DocumentState {
    #[default]
    Empty,
    Ready(Screen),
    /// Decode failed; the message replaces the whole screen.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerState {
    pub document: DocumentState,
    /// Index into the screen's interactive targets.
    pub focused: usize,
    pub quit: bool,
}

impl UiState for ViewerState {}

impl ViewerState {
    pub fn screen(&self) -> Option<&Screen> {
        match &self.document {
            DocumentState::Ready(screen) => Some(screen),
            DocumentState::Empty | DocumentState::Failed(_) => None,
        }
    }

    pub fn target_count(&self) -> usize {
        self.screen()
            .map(|screen| interactive_targets(screen).len())
            .unwrap_or(0)
    }

    pub fn focused_action(&self) -> Option<&Action> {
        self.screen()
            .and_then(|screen| interactive_targets(screen).get(self.focused).copied())
    }
}
