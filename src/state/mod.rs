/// State management module
///
/// This module handles all widget state, including:
/// - Shared data structures (data.rs)
/// - The upload/classify state machine (widget.rs)

pub mod data;
pub mod widget;

pub use widget::UploadClassifyWidget;
