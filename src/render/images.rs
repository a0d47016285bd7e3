//! Image resolution keyed by URL.
//!
//! Resolving never waits for content. Presenters draw whatever state comes
//! back and pick up the loaded image on a later frame.

use std::collections::HashMap;

use parking_lot::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub state: ImageState,
}

pub trait ImageResolver {
    fn resolve(&self, url: &str) -> ImageRef;
}

/// In-memory image states. Unknown URLs are registered as pending.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: RwLock<HashMap<String, ImageState>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn complete(&self, url: &str, state: ImageState) {
        self.entries.write().insert(url.to_string(), state);
    }

    /// URLs still waiting for content, sorted.
    pub fn pending(&self) -> Vec<String> {
        let mut urls: Vec<String> = self
            .entries
            .read()
            .iter()
            .filter(|(_, state)| **state == ImageState::Pending)
            .map(|(url, _)| url.clone())
            .collect();
        urls.sort();
        urls
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl ImageResolver for ImageCache {
    fn resolve(&self, url: &str) -> ImageRef {
        if let Some(state) = self.entries.read().get(url) {
            return ImageRef {
                url: url.to_string(),
                state: *state,
            };
        }

        tracing::debug!(url, "Image requested");
        let state = *self
            .entries
            .write()
            .entry(url.to_string())
            .or_insert(ImageState::Pending);
        ImageRef {
            url: url.to_string(),
            state,
        }
    }
}
