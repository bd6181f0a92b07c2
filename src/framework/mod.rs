pub mod config;
pub use config::Config;

pub mod data;
pub use data::AppData;

pub mod event_handler;
pub mod logging;

pub mod messenger;
pub use messenger::{ConsoleMessenger, Messenger};
