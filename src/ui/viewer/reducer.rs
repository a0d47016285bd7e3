use crate::ui::mvi::Reducer;
use crate::ui::viewer::intent::ViewerIntent;
use crate::ui::viewer::state::{DocumentState, ViewerState};

pub struct ViewerReducer;

impl Reducer for ViewerReducer {
    type State = ViewerState;
    type Intent = ViewerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewerIntent::Loaded(Ok(screen)) => {
                let mut next = ViewerState {
                    document: DocumentState::Ready(screen),
                    focused: state.focused,
                    quit: state.quit,
                };
                // Reload keeps focus only while the target still exists
                if next.focused >= next.target_count() {
                    next.focused = 0;
                }
                next
            }
            ViewerIntent::Loaded(Err(message)) => ViewerState {
                document: DocumentState::Failed(message),
                focused: 0,
                quit: state.quit,
            },
            ViewerIntent::FocusNext => {
                let count = state.target_count();
                if count == 0 {
                    return state;
                }
                let focused = if state.focused + 1 >= count {
                    0
                } else {
                    state.focused + 1
                };
                ViewerState { focused, ..state }
            }
            ViewerIntent::FocusPrev => {
                let count = state.target_count();
                if count == 0 {
                    return state;
                }
                let focused = if state.focused == 0 {
                    count - 1
                } else {
                    state.focused - 1
                };
                ViewerState { focused, ..state }
            }
            ViewerIntent::Quit => ViewerState {
                quit: true,
                ..state
            },
        }
    }
}
