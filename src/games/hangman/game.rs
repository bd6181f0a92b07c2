use std::collections::{HashMap, VecDeque};

use tracing::{debug, instrument, trace};

use crate::utils::UserId;

use super::{
    help::help_messages,
    history::{History, HistoryEntry},
    keyword::{Channel, Command, Keyword},
    options::{GameOptions, Scoring},
    reply::{Reply, SideEffect},
    scoreboard::Scoreboard,
    word::{normalize, QueuedWord, Reveal, Word},
};

const SUBMITTER_GONE: &str = "Player not in game anymore.";

/// Last display name seen for every user that ever talked to this game.
#[derive(Debug, Clone, Default)]
struct Names(HashMap<UserId, String>);

impl Names {
    fn remember(&mut self, user: &UserId, name: &str) {
        if self.0.get(user).map(String::as_str) != Some(name) {
            self.0.insert(user.clone(), name.to_owned());
        }
    }

    fn get(&self, user: &UserId) -> String {
        self.0
            .get(user)
            .cloned()
            .unwrap_or_else(|| user.to_string())
    }
}

/// One group's game of hangman.
///
/// Nothing here fails: every rejected action is answered with a message instead.
#[derive(Debug, Clone)]
pub struct Hangman {
    options: GameOptions,
    word: Option<Word>,
    queue: VecDeque<QueuedWord>,
    participants: Vec<(UserId, String)>,
    names: Names,
    scoreboard: Scoreboard,
    history: History,
}

impl Hangman {
    pub fn new(options: GameOptions) -> Self {
        Self {
            options,
            word: None,
            queue: VecDeque::new(),
            participants: Vec::new(),
            names: Names::default(),
            scoreboard: Scoreboard::new(),
            history: History::new(),
        }
    }

    pub const fn scoring(&self) -> Scoring {
        self.options.scoring
    }

    /// Paused exactly when there's no word in play.
    pub const fn is_paused(&self) -> bool {
        self.word.is_none()
    }

    #[cfg(test)]
    pub const fn active_word(&self) -> Option<&Word> {
        self.word.as_ref()
    }

    pub fn display(&self) -> &str {
        self.word.as_ref().map_or("", Word::display)
    }

    pub fn is_word_guessed(&self) -> bool {
        self.word.as_ref().map_or(true, Word::is_guessed)
    }

    #[cfg(test)]
    pub fn queue(&self) -> impl Iterator<Item = &QueuedWord> + '_ {
        self.queue.iter()
    }

    #[cfg(test)]
    pub fn is_participant(&self, user: &UserId) -> bool {
        self.participant_name(user).is_some()
    }

    #[cfg(test)]
    pub fn score(&self, user: &UserId) -> Option<u64> {
        self.scoreboard.score(user)
    }

    #[cfg(test)]
    pub const fn history(&self) -> &History {
        &self.history
    }

    fn participant_name(&self, user: &UserId) -> Option<&str> {
        self.participants
            .iter()
            .find_map(|(id, name)| (id == user).then_some(name.as_str()))
    }

    #[instrument(skip_all, fields(%user))]
    pub fn join(&mut self, user: &UserId, name: &str) -> Reply {
        if let Some(existing) = self.participant_name(user) {
            return Reply::text(format!("{existing} is already in play."));
        }

        self.names.remember(user, name);
        self.participants.push((user.clone(), name.to_owned()));
        self.scoreboard.enroll(user);

        debug!(players = self.participants.len(), "joined");

        Reply::text(format!(
            "{name} has joined. You can submit words privately by sending {add} YOURWORDHERE to me.",
            add = Keyword::Add
        ))
        .with_side_effect(SideEffect::Join(user.clone()))
    }

    #[instrument(skip_all, fields(%user))]
    pub fn quit(&mut self, user: &UserId) -> Reply {
        let Some(index) = self.participants.iter().position(|(id, _)| id == user) else {
            return Reply::text("Can't remove you from play as you haven't joined.");
        };

        let (_, name) = self.participants.remove(index);

        debug!(players = self.participants.len(), "quit");

        Reply::text(format!("{name} is removed from play."))
            .with_side_effect(SideEffect::Unjoin(user.clone()))
    }

    pub fn list_participants(&self) -> Reply {
        if self.participants.is_empty() {
            return Reply::text(format!(
                "No one has joined yet. Say {join} to play!",
                join = Keyword::Join
            ));
        }

        let names: Vec<&str> = self
            .participants
            .iter()
            .map(|(_, name)| name.as_str())
            .collect();

        Reply::text(names.join("\n"))
    }

    #[instrument(skip_all, fields(%user))]
    pub fn submit_word(&mut self, word: &str, user: &UserId) -> Reply {
        let word = word.trim();

        let message = if !self.is_paused() {
            "Cannot submit word, game is not in paused state."
        } else if Keyword::is_reserved(word) {
            "Your proposed word is rejected because it's a reserved keyword."
        } else if word.chars().count() < self.options.min_word_length {
            "Your proposed word is rejected because it's too short."
        } else {
            self.queue.push_back(QueuedWord::new(word, user.clone()));
            debug!(waiting = self.queue.len(), "word queued");
            "Your proposed word is accepted."
        };

        Reply::text(message)
    }

    /// Puts the next queued word in play, if there is one.
    pub fn fetch_word(&mut self) -> Option<&Word> {
        let next = self.queue.pop_front()?;

        trace!(length = next.text.chars().count(), "fetched word");

        self.word = Some(Word::new(&next.text, next.source));
        self.word.as_ref()
    }

    #[instrument(skip_all, fields(%user, %letter))]
    pub fn guess_letter(&mut self, user: &UserId, letter: char) -> Reply {
        let letter = normalize(letter);

        let Some(word) = self.word.as_mut() else {
            return still_paused();
        };

        let mut reply = Reply::new();

        if word.source() == user {
            reply.push(giver_refusal(&self.names.get(user)));
        } else if word.is_guessed() {
            reply.push("Word is already guessed.");
        } else {
            match word.reveal(letter) {
                Reveal::Missing => reply.push(format!("No such letter ({letter}).")),
                Reveal::AlreadyRevealed => reply.push("Correct, but this letter is already guessed."),
                Reveal::Revealed => {
                    let points = u64::from(self.options.scoring.per_letter);
                    self.scoreboard.award(user, points);

                    self.history.push(HistoryEntry {
                        user: user.clone(),
                        guess: letter.to_string(),
                        score: points,
                        display: word.display().to_owned(),
                    });

                    debug!(points, remaining = word.remaining(), "letter found");
                }
            }
        }

        self.finish_guess(reply)
    }

    #[instrument(skip_all, fields(%user))]
    pub fn guess_word(&mut self, user: &UserId, phrase: &str) -> Reply {
        let Some(word) = self.word.as_mut() else {
            return still_paused();
        };

        let mut reply = Reply::new();

        if word.source() == user {
            reply.push(giver_refusal(&self.names.get(user)));
        } else if word.is_guessed() {
            reply.push("Word is already guessed.");
        } else if word.matches(phrase) {
            let Scoring {
                per_letter,
                per_word,
            } = self.options.scoring;

            let remaining = word.reveal_all() as u64;
            let points = u64::from(per_word) + u64::from(per_letter) * remaining;
            self.scoreboard.award(user, points);

            self.history.push(HistoryEntry {
                user: user.clone(),
                guess: phrase.to_owned(),
                score: points,
                display: word.display().to_owned(),
            });

            debug!(points, remaining, "word found");
        } else {
            reply.push(format!("{phrase} is not the right word."));
        }

        self.finish_guess(reply)
    }

    /// Shows where the word stands, then moves on if it's done.
    fn finish_guess(&mut self, mut reply: Reply) -> Reply {
        let Some(word) = self.word.as_ref() else {
            return reply;
        };

        if !word.display().is_empty() {
            reply.push(word.display());
        }

        if !self.is_word_guessed() {
            return reply;
        }

        reply.push(self.scoreboard_text());

        if self.fetch_word().is_some() {
            reply.push(self.announce_word());
        } else {
            self.word = None;
            debug!("out of words, pausing");
            reply.push(format!(
                "Game is now paused. There is no word left in the waiting list. {}",
                add_words_hint()
            ));
        }

        reply
    }

    pub fn continue_game(&mut self) -> Reply {
        if !self.is_paused() {
            return Reply::text("Game is not in paused state.");
        }

        if self.fetch_word().is_none() {
            return Reply::text(format!(
                "The waiting list is still empty. {}",
                add_words_hint()
            ));
        }

        debug!(waiting = self.queue.len(), "continued");

        Reply::text(format!("Game is now continued.\n{}", self.announce_word()))
    }

    fn announce_word(&self) -> String {
        let submitter = self
            .word
            .as_ref()
            .and_then(|word| self.participant_name(word.source()))
            .unwrap_or(SUBMITTER_GONE);

        format!(
            "Guess this new word:\n{display}\n\nSubmitted by: {submitter}",
            display = self.display()
        )
    }

    pub fn show_banner(&self) -> Reply {
        if self.is_paused() {
            return Reply::text(format!(
                "There is no word in play. Use {continue_game} once words have been added.",
                continue_game = Keyword::Continue
            ));
        }

        Reply::text(self.display())
    }

    fn scoreboard_text(&mut self) -> String {
        let names = &self.names;
        self.scoreboard.render(|user| names.get(user))
    }

    pub fn show_scoreboard(&mut self) -> Reply {
        Reply::text(self.scoreboard_text())
    }

    pub fn show_history(&self) -> Reply {
        let names = &self.names;
        Reply::text(
            self.history
                .render(self.options.history_limit, |user| names.get(user)),
        )
    }

    pub fn show_help(&self) -> Reply {
        Reply::from(help_messages(self.scoring()).to_vec())
    }

    pub fn show_status(&self) -> Reply {
        Reply::text(format!(
            "Waiting list: {}\nPlayers: {}",
            self.queue.len(),
            self.participants.len()
        ))
    }

    pub fn show_hello(&self) -> Reply {
        let Scoring {
            per_letter,
            per_word,
        } = self.scoring();

        Reply::text(format!(
            "Welcome! A Hangman game is now started. Join by saying {join} now!\n\
             Scoring: {per_letter} per letter, {per_word} extra per phrase.",
            join = Keyword::Join
        ))
    }

    pub fn show_goodbye(&mut self) -> Reply {
        let mut reply = Reply::text(self.scoreboard_text());
        reply.push("Thank you for playing this game! Now the game will be terminated.");
        reply
    }

    /// Answers a raw chat message from `user`.
    pub fn route(&mut self, channel: Channel, text: &str, user: &UserId, name: &str) -> Reply {
        self.handle(channel, Command::parse(channel, text), user, name)
    }

    pub fn handle(
        &mut self,
        channel: Channel,
        command: Command<'_>,
        user: &UserId,
        name: &str,
    ) -> Reply {
        self.names.remember(user, name);

        match (channel, command) {
            (
                Channel::Private,
                Command::Keyword {
                    keyword: Keyword::Add,
                    args,
                },
            ) => self.submit_word(args, user),
            (
                Channel::Public,
                Command::Keyword {
                    keyword: Keyword::Add,
                    ..
                },
            ) => Reply::text(format!(
                "Send {add} YOURWORDHERE to me in a private chat, so nobody sees it!",
                add = Keyword::Add
            )),
            (
                _,
                Command::Keyword {
                    keyword: Keyword::Help,
                    ..
                },
            ) => self.show_help(),
            (Channel::Public, Command::Keyword { keyword, .. }) => {
                self.handle_keyword(keyword, user, name)
            }
            (Channel::Public, Command::GuessWord(phrase)) => self.guess_word(user, phrase),
            (Channel::Public, Command::GuessLetter(letter)) => self.guess_letter(user, letter),
            (_, command) => {
                trace!(?channel, ?command, "ignored");
                Reply::new()
            }
        }
    }

    fn handle_keyword(&mut self, keyword: Keyword, user: &UserId, name: &str) -> Reply {
        match keyword {
            Keyword::Join => self.join(user, name),
            Keyword::Quit => self.quit(user),
            Keyword::Scoreboard => self.show_scoreboard(),
            Keyword::History => self.show_history(),
            Keyword::Continue => self.continue_game(),
            Keyword::Show => self.show_banner(),
            Keyword::Players => self.list_participants(),
            Keyword::Status => self.show_status(),
            Keyword::Help => self.show_help(),
            Keyword::Add | Keyword::Start | Keyword::End | Keyword::Leave => {
                trace!(%keyword, "not handled by the game");
                Reply::new()
            }
        }
    }
}

impl Default for Hangman {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}

fn still_paused() -> Reply {
    Reply::text(format!(
        "Game is now still paused. Use {continue_game} to continue the game.",
        continue_game = Keyword::Continue
    ))
}

fn giver_refusal(name: &str) -> String {
    format!("You, {name}, are the giver of this word. You can't guess it.")
}

fn add_words_hint() -> String {
    format!(
        "Please give a word by sending {add} privately to me. Then use {continue_game} here to continue the game.",
        add = Keyword::Add,
        continue_game = Keyword::Continue
    )
}
