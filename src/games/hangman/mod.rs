//! Hangman for group chats: players privately submit words, and everyone else races to guess them.

mod game;
pub use game::Hangman;

mod help;

mod history;

pub mod keyword;
pub use keyword::{Channel, Command, Keyword};

pub mod options;
pub use options::{GameOptions, GameOptionsBuilder, Scoring};

mod reply;
pub use reply::{Reply, SideEffect};

mod scoreboard;
mod word;
