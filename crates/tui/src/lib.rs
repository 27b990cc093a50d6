pub mod app;
pub mod config;
pub mod input;
pub mod keybinds;
pub mod logging;
pub mod picker;
pub mod ui;

pub use config::Config;
