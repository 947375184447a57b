/// Image file loader
///
/// Reads a picked file, sniffs its format from the bytes and decodes a
/// downsized preview. Decoding is CPU-bound, so it runs on a blocking thread.

use iced::widget::image::Handle;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task;

use crate::error::ClassifyError;
use crate::state::data::SelectedImage;

/// Longest edge of the on-screen preview
pub const PREVIEW_MAX_SIZE: u32 = 512;

/// Load an image file chosen by the user
///
/// # Returns
/// * `Ok(SelectedImage)` - bytes for upload plus decoded preview
/// * `Err(ClassifyError::UnreadableImage)` - unreadable file or not an image
pub async fn load_image(path: PathBuf) -> Result<SelectedImage, ClassifyError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| ClassifyError::UnreadableImage(format!("{}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());

    log::info!("📂 Read {} ({} bytes)", file_name, bytes.len());

    task::spawn_blocking(move || decode_image(file_name, bytes))
        .await
        .map_err(|e| ClassifyError::UnreadableImage(format!("Task join error: {}", e)))?
}

/// Blocking decode of in-memory file contents
pub fn decode_image(file_name: String, bytes: Vec<u8>) -> Result<SelectedImage, ClassifyError> {
    let unreadable = |reason: String| ClassifyError::UnreadableImage(format!("{}: {}", file_name, reason));

    let format = image::guess_format(&bytes).map_err(|e| unreadable(e.to_string()))?;
    let decoded = image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| unreadable(e.to_string()))?;

    let (width, height) = (decoded.width(), decoded.height());

    // Only shrink; small images are shown at their own size
    let pixels = if width > PREVIEW_MAX_SIZE || height > PREVIEW_MAX_SIZE {
        decoded.thumbnail(PREVIEW_MAX_SIZE, PREVIEW_MAX_SIZE).to_rgba8()
    } else {
        decoded.to_rgba8()
    };
    let (preview_width, preview_height) = pixels.dimensions();

    log::debug!(
        "🎨 Decoded {} as {}: {}x{} (preview {}x{})",
        file_name,
        format.to_mime_type(),
        width,
        height,
        preview_width,
        preview_height
    );

    Ok(SelectedImage {
        mime_type: format.to_mime_type().to_string(),
        bytes: Arc::from(bytes),
        width,
        height,
        preview_pixels: Handle::from_rgba(preview_width, preview_height, pixels.into_raw()),
        file_name,
    })
}
