//! Image gallery screen state.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use super::fetch::FetchState;
use crate::net::types::Image;

/// Transient per-visit image list. Mutations patch the in-memory list
/// after their own success instead of re-fetching the whole gallery.
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub list: FetchState<Vec<Image>>,
}

impl GalleryState {
    /// Replace the list with a freshly fetched sequence, in server order.
    pub fn loaded(&mut self, images: Vec<Image>) {
        self.list = FetchState::Loaded(images);
    }

    pub fn failed(&mut self, message: String) {
        self.list = FetchState::Failed(message);
    }

    /// Show a freshly uploaded image without re-fetching the gallery.
    pub fn prepend(&mut self, image: Image) {
        match &mut self.list {
            FetchState::Loaded(images) => images.insert(0, image),
            other => *other = FetchState::Loaded(vec![image]),
        }
    }

    /// Drop one image after a successful DELETE.
    pub fn remove(&mut self, id: &str) {
        if let FetchState::Loaded(images) = &mut self.list {
            images.retain(|image| image.id != id);
        }
    }
}
