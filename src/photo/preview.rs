/// Preview registry
///
/// Every on-screen preview is acquired from a `PreviewRegistry` and released
/// when its `PreviewHandle` is dropped, so replacing the selection or tearing
/// down the widget can never leave previews behind.

use iced::widget::image::Handle;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::state::data::SelectedImage;

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: AtomicU64,
    live: AtomicUsize,
}

/// Hands out preview references and counts the ones still alive
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    inner: Arc<RegistryInner>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a display reference for `image`
    pub fn acquire(&self, image: &SelectedImage) -> PreviewHandle {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let live = self.inner.live.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("🖼️  Acquired preview #{} for {} ({} live)", id, image.file_name, live);

        PreviewHandle {
            id,
            file_name: image.file_name.clone(),
            width: image.width,
            height: image.height,
            handle: image.preview_pixels.clone(),
            registry: Arc::clone(&self.inner),
        }
    }

    /// Number of previews acquired and not yet released
    pub fn live_count(&self) -> usize {
        self.inner.live.load(Ordering::SeqCst)
    }
}

/// A live preview; releases itself on drop
#[derive(Debug)]
pub struct PreviewHandle {
    id: u64,
    file_name: String,
    width: u32,
    height: u32,
    handle: Handle,
    registry: Arc<RegistryInner>,
}

impl PreviewHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Dimensions of the original image, not of the downsized pixels
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        let live = self.registry.live.fetch_sub(1, Ordering::SeqCst) - 1;
        log::debug!("🧹 Released preview #{} ({} live)", self.id, live);
    }
}
