//! Server-driven UI: decode a screen document into a typed model and
//! dispatch it to a presentation service.
//!
//! ```text
//! raw document ─→ decode ─→ Screen ─→ render ─→ Presenter
//!                                        │
//!                                        └─→ ActionResolver ─→ Navigator
//! ```

pub mod action;
pub mod config;
pub mod decode;
pub mod document;
pub mod logging;
pub mod model;
pub mod render;
pub mod ui;
