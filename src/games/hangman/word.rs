use std::collections::BTreeMap;

use crate::utils::UserId;

const HIDDEN: char = '_';

/// A submitted word or phrase waiting for its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedWord {
    pub text: String,
    pub source: UserId,
}

impl QueuedWord {
    pub fn new(text: impl Into<String>, source: UserId) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Revealed,
    AlreadyRevealed,
    Missing,
}

/// The word in play, with which of its letters have been found so far.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    source: UserId,
    letters: BTreeMap<char, bool>,
    display: String,
}

impl Word {
    pub fn new(text: &str, source: UserId) -> Self {
        let text = text.to_uppercase();

        let letters = text
            .chars()
            .filter(|ch| ch.is_alphabetic())
            .map(|ch| (ch, false))
            .collect();

        let mut word = Self {
            text,
            source,
            letters,
            display: String::new(),
        };

        word.update_display();
        word
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> &UserId {
        &self.source
    }

    /// Found letters as themselves, hidden ones as `_`, separated by spaces.
    /// Anything that isn't a letter is always shown.
    pub fn display(&self) -> &str {
        &self.display
    }

    #[cfg(test)]
    pub fn letters(&self) -> &BTreeMap<char, bool> {
        &self.letters
    }

    pub fn remaining(&self) -> usize {
        self.letters.values().filter(|found| !**found).count()
    }

    /// True once every letter is found, including when there never were any.
    pub fn is_guessed(&self) -> bool {
        self.letters.values().all(|found| *found)
    }

    pub fn reveal(&mut self, letter: char) -> Reveal {
        let letter = normalize(letter);

        match self.letters.get_mut(&letter) {
            None => Reveal::Missing,
            Some(true) => Reveal::AlreadyRevealed,
            Some(found) => {
                *found = true;
                self.update_display();
                Reveal::Revealed
            }
        }
    }

    /// Reveals everything left, returning how many letters that was.
    pub fn reveal_all(&mut self) -> usize {
        let mut revealed = 0;

        for found in self.letters.values_mut().filter(|found| !**found) {
            *found = true;
            revealed += 1;
        }

        self.update_display();
        revealed
    }

    /// Case doesn't matter, punctuation and spacing do.
    pub fn matches(&self, guess: &str) -> bool {
        guess.to_uppercase() == self.text
    }

    fn update_display(&mut self) {
        let shown = self.text.chars().map(|ch| match self.letters.get(&ch) {
            Some(false) => HIDDEN,
            _ => ch,
        });

        self.display = shown.fold(String::with_capacity(self.text.len() * 2), |mut display, ch| {
            if !display.is_empty() {
                display.push(' ');
            }
            display.push(ch);
            display
        });
    }
}

pub fn normalize(letter: char) -> char {
    let mut upper = letter.to_uppercase();

    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

#[cfg(test)]
mod tests {
    use super::{Reveal, Word};
    use crate::utils::UserId;
    use pretty_assertions::assert_eq;

    fn word(text: &str) -> Word {
        Word::new(text, UserId::new("source"))
    }

    #[test]
    fn hidden_at_first() {
        let word = word("hello");
        assert_eq!(word.text(), "HELLO");
        assert_eq!(word.display(), "_ _ _ _ _");
        assert_eq!(word.letters().len(), 4);
    }

    #[test]
    fn punctuation_always_shown() {
        let word = word("it's ok!");
        assert_eq!(word.display(), "_ _ ' _   _ _ !");
    }

    #[test]
    fn reveal_letter() {
        let mut word = word("hello");
        assert_eq!(word.reveal('l'), Reveal::Revealed);
        assert_eq!(word.display(), "_ _ L L _");
        assert_eq!(word.reveal('L'), Reveal::AlreadyRevealed);
        assert_eq!(word.reveal('z'), Reveal::Missing);
        assert_eq!(word.remaining(), 3);
    }

    #[test]
    fn reveal_everything() {
        let mut word = word("hello");
        word.reveal('h');
        assert_eq!(word.reveal_all(), 3);
        assert!(word.is_guessed());
        assert_eq!(word.display(), "H E L L O");
    }

    #[test]
    fn letter_by_letter_matches_reveal_all() {
        let mut one_by_one = word("convex hull");
        for letter in "convexhul".chars() {
            one_by_one.reveal(letter);
        }

        let mut all_at_once = word("convex hull");
        all_at_once.reveal_all();

        assert!(one_by_one.is_guessed());
        assert_eq!(one_by_one.letters(), all_at_once.letters());
        assert_eq!(one_by_one.display(), all_at_once.display());
    }

    #[test]
    fn no_letters_is_already_guessed() {
        let word = word("12345");
        assert!(word.letters().is_empty());
        assert!(word.is_guessed());
        assert_eq!(word.display(), "1 2 3 4 5");
    }

    #[test]
    fn matching_is_exact_apart_from_case() {
        let word = word("Rock'n'roll");
        assert!(word.matches("ROCK'N'ROLL"));
        assert!(word.matches("rock'n'roll"));
        assert!(!word.matches("rocknroll"));
        assert!(!word.matches("rock'n'roll "));
    }
}
