pub mod hangman;

mod mastermind;
pub use mastermind::{Event, Mastermind, Request};
