use crate::model::Screen;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ViewerIntent {
    /// A document load finished. Errors arrive already rendered to text.
    Loaded(Result<Screen, String>),
    FocusNext,
    FocusPrev,
    Quit,
}

impl Intent for ViewerIntent {}
