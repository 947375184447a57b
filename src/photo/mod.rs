/// Local image handling
///
/// This module handles:
/// - Reading and decoding picked image files (loader.rs)
/// - Tracking live on-screen previews (preview.rs)

pub mod loader;
pub mod preview;

#[cfg(test)]
pub mod fixture;

pub use preview::{PreviewHandle, PreviewRegistry};
