mod app;
mod cli;
mod editor;
mod effects;
mod input;
mod logging;
mod ui;

pub use app::run_app;
