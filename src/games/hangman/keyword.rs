use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a message was sent: the group chat hosting the game, or a one-on-one chat with the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Start,
    End,
    Leave,
    Join,
    Quit,
    Scoreboard,
    History,
    Continue,
    Show,
    Players,
    Status,
    Help,
    Add,
}

impl Keyword {
    pub const ALL: [Self; 13] = [
        Self::Start,
        Self::End,
        Self::Leave,
        Self::Join,
        Self::Quit,
        Self::Scoreboard,
        Self::History,
        Self::Continue,
        Self::Show,
        Self::Players,
        Self::Status,
        Self::Help,
        Self::Add,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "/start",
            Self::End => "/end",
            Self::Leave => "/leave",
            Self::Join => "/join",
            Self::Quit => "/quit",
            Self::Scoreboard => "/scoreboard",
            Self::History => "/history",
            Self::Continue => "/continue",
            Self::Show => "/show",
            Self::Players => "/players",
            Self::Status => "/status",
            Self::Help => "/help",
            Self::Add => "/add",
        }
    }

    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Start => &["/gameon"],
            Self::End => &["/gameoff"],
            Self::Leave => &["/goaway"],
            _ => &[],
        }
    }

    /// Whether anything may follow the keyword on the same line.
    pub const fn takes_args(self) -> bool {
        matches!(self, Self::Start | Self::Add)
    }

    /// Matches a single token like `/join` against every keyword and alias, ignoring case.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| {
            keyword.as_str().eq_ignore_ascii_case(token)
                || keyword
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(token))
        })
    }

    /// Would `word` read as a command once prefixed with `/`? That includes phrases
    /// like `start over`, which would parse as `/start` with arguments.
    pub fn is_reserved(word: &str) -> bool {
        Command::parse_keyword(&format!("/{}", word.trim())).is_some()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chat message, classified once before anything acts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Keyword { keyword: Keyword, args: &'a str },
    GuessWord(&'a str),
    GuessLetter(char),
    /// Ordinary conversation the bot stays out of.
    Chatter,
}

impl<'a> Command<'a> {
    pub fn parse(channel: Channel, text: &'a str) -> Self {
        let text = text.trim();

        match channel {
            Channel::Public => Self::parse_public(text),
            Channel::Private => Self::parse_private(text),
        }
    }

    fn parse_public(text: &'a str) -> Self {
        if let Some(phrase) = text.strip_prefix('/') {
            Self::parse_keyword(text).unwrap_or(Self::GuessWord(phrase))
        } else {
            let mut chars = text.chars();

            match (chars.next(), chars.next()) {
                (Some(letter), None) => Self::GuessLetter(letter),
                _ => Self::Chatter,
            }
        }
    }

    fn parse_private(text: &'a str) -> Self {
        match Self::parse_keyword(text) {
            Some(
                command @ Self::Keyword {
                    keyword: Keyword::Add | Keyword::Help,
                    ..
                },
            ) => command,
            _ => Self::Chatter,
        }
    }

    fn parse_keyword(text: &'a str) -> Option<Self> {
        let (token, args) = text
            .split_once(char::is_whitespace)
            .map_or((text, ""), |(token, args)| (token, args.trim()));

        let keyword = Keyword::parse(token)?;

        (args.is_empty() || keyword.takes_args()).then_some(Self::Keyword { keyword, args })
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Self::Keyword { keyword, .. } => Some(*keyword),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Channel, Command, Keyword};
    use pretty_assertions::assert_eq;

    macro_rules! test_parse {
        ($($name:ident: $channel:ident $text:expr => $parsed:expr),+$(,)?) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(Command::parse(Channel::$channel, $text), $parsed)
                }
            )+
        };
    }

    test_parse! {
        join: Public "/join" => Command::Keyword { keyword: Keyword::Join, args: "" },
        keyword_ignores_case: Public "/SCOREBOARD" => Command::Keyword { keyword: Keyword::Scoreboard, args: "" },
        start_with_scoring: Public "/start 2 50" => Command::Keyword { keyword: Keyword::Start, args: "2 50" },
        start_alias: Public "/gameon" => Command::Keyword { keyword: Keyword::Start, args: "" },
        keyword_with_trailing_words_is_a_guess: Public "/show must go on" => Command::GuessWord("show must go on"),
        phrase_guess: Public "/convex hull" => Command::GuessWord("convex hull"),
        letter_guess: Public "e" => Command::GuessLetter('e'),
        surrounding_whitespace: Public "  q " => Command::GuessLetter('q'),
        chatter: Public "nice one" => Command::Chatter,
        empty: Public "" => Command::Chatter,
        private_add_phrase: Private "/add convex hull" => Command::Keyword { keyword: Keyword::Add, args: "convex hull" },
        private_add_nothing: Private "/add" => Command::Keyword { keyword: Keyword::Add, args: "" },
        private_help: Private "/help" => Command::Keyword { keyword: Keyword::Help, args: "" },
        private_join_ignored: Private "/join" => Command::Chatter,
        private_letter_ignored: Private "a" => Command::Chatter,
        private_lookalike_ignored: Private "/addition" => Command::Chatter,
    }

    #[test]
    fn reserved_words() {
        assert!(Keyword::is_reserved("join"));
        assert!(Keyword::is_reserved("Continue"));
        assert!(Keyword::is_reserved("goaway"));
        assert!(!Keyword::is_reserved("hangman"));
    }

    #[test]
    fn phrases_read_as_commands_are_reserved() {
        assert!(Keyword::is_reserved("start over"));
        assert!(Keyword::is_reserved("ADD some salt"));
        assert!(Keyword::is_reserved("gameon again"));

        // only /start and /add take arguments, so these are phrase guesses
        assert!(!Keyword::is_reserved("show must go on"));
        assert!(!Keyword::is_reserved("join the club"));
        assert!(!Keyword::is_reserved("starting line"));
    }

    #[test]
    fn every_keyword_parses_back() {
        for keyword in Keyword::ALL {
            assert_eq!(Keyword::parse(keyword.as_str()), Some(keyword));
        }
    }
}
