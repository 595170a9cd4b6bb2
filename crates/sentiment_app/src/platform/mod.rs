pub mod logging;
pub mod ui;

mod app;
mod effects;
mod timer;

pub use app::SentimentApp;
