pub mod render;
pub mod style;

pub use render::{UiEvent, WINDOW_TITLE};
