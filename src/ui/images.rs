use std::path::PathBuf;

use crate::render::{ImageCache, ImageState};

/// Settles pending local images by checking that the file exists.
///
/// Remote URLs are left pending; this viewer does not fetch over the network.
pub fn settle_local_images(cache: &ImageCache) {
    for url in cache.pending() {
        let Some(path) = local_path(&url) else {
            continue;
        };
        let state = if path.is_file() {
            ImageState::Ready
        } else {
            ImageState::Failed
        };
        tracing::debug!(url = %url, ?state, "Local image settled");
        cache.complete(&url, state);
    }
}

fn local_path(url: &str) -> Option<PathBuf> {
    if let Some(path) = url.strip_prefix("file://") {
        return Some(PathBuf::from(path));
    }
    if url.contains("://") {
        return None;
    }
    Some(PathBuf::from(url))
}
