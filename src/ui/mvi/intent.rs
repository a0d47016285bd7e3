/// Marker trait for intents: user input or system events such as a
/// finished document load.
pub trait Intent: Send + 'static {}
