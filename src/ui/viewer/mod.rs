mod intent;
mod reducer;
mod state;

pub use intent::ViewerIntent;
pub use reducer::ViewerReducer;
pub use state::{DocumentState, ViewerState};
