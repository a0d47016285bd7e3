/// Marker trait for view state. Cloned to produce the next state and
/// compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
