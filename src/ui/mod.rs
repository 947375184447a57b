/// UI layer: view model projection and iced layout

pub mod view;

pub use view::{render, view, TITLE};
