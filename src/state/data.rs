/// Shared data structures for the widget state
///
/// These structs represent the data model that flows between
/// the picker, the classification service and the UI layer.

use iced::widget::image::Handle;
use std::sync::Arc;

/// An image picked by the user, ready for upload and preview
#[derive(Debug, Clone)]
pub struct SelectedImage {
    /// Filename only (e.g., "cereal.jpg"), sent as the multipart filename
    pub file_name: String,
    /// MIME type sniffed from the bytes (e.g., "image/png")
    pub mime_type: String,
    /// Raw file contents, uploaded as-is
    pub bytes: Arc<[u8]>,
    /// Original dimensions of the decoded image
    pub width: u32,
    pub height: u32,
    /// Downsized RGBA pixels for on-screen display
    pub preview_pixels: Handle,
}

/// Opaque product identifier returned by the classification service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult(String);

impl ClassificationResult {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn identifier(&self) -> &str {
        &self.0
    }
}

/// Where the current submission stands
///
/// The result only exists while `Succeeded`, the error text only while `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Succeeded(ClassificationResult),
    Failed(String),
}

/// Ticket for one accepted submit; `id` identifies the generation it belongs to
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: u64,
    pub image: SelectedImage,
}
