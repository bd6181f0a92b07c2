use super::{Keyword, Scoring};

/// The help text, split into a few messages so none gets too long.
pub fn help_messages(scoring: Scoring) -> [String; 3] {
    let about = format!(
        "HANGMAN HELP\n\
         1. WHAT IS HANGMAN?\n\
         It is a game where you guess a word letter by letter. Each correct letter you guess yields a score.\n\
         \n\
         2. HOW DOES THIS BOT WORK?\n\
         Invite this bot to a group and start a game with '{start}'. Send a single letter to guess that letter, \
         and send a phrase prefixed with / to guess the whole phrase, e.g. '/CONVEX HULL'.\n\
         \n\
         3. WHERE DO THE WORDS COME FROM?\n\
         Players in the same game send words to the bot in a private chat.",
        start = Keyword::Start,
    );

    let keywords = format!(
        "4. KEYWORDS\n\
         - '{help}': display this help.\n\
         - '{join}': join the game in this group.\n\
         - '{quit}': quit the game in this group.\n\
         - '{add}': add a word or phrase to be guessed. Send it privately as '{add} YOUR PHRASE HERE'. Multi-word phrases are allowed.\n\
         - '{continue_game}': continue a paused game, after players have added words.\n\
         - '{scoreboard}': display the scoreboard.\n\
         - '{history}': display the last correct guesses.\n\
         - '{show}': show the phrase in play again, in case it got buried.\n\
         - '{players}': list who is playing.\n\
         - '{status}': show how many words are waiting and how many are playing.\n\
         - '{end}': end the game in this group.\n\
         - '{leave}': end the game and make the bot leave this group.",
        help = Keyword::Help,
        join = Keyword::Join,
        quit = Keyword::Quit,
        add = Keyword::Add,
        continue_game = Keyword::Continue,
        scoreboard = Keyword::Scoreboard,
        history = Keyword::History,
        show = Keyword::Show,
        players = Keyword::Players,
        status = Keyword::Status,
        end = Keyword::End,
        leave = Keyword::Leave,
    );

    let scoring_text = format!(
        "5. HOW DOES THE SCORING WORK?\n\
         {per_letter} score for each correct letter guessed. Guessing the entire phrase at once earns \
         {per_letter} for every letter still hidden, plus an extra {per_word}.\n\
         \n\
         6. MISCELLANEOUS\n\
         - You can customize the scoring when starting the game: '{start} 2 50' gives 2 per letter and 50 extra per phrase. \
         The scoring can't be changed mid-game.\n\
         - Guessing the entire phrase requires you to be precise, punctuation included.\n\
         - Your name stays on the scoreboard once you join, even after you quit.",
        per_letter = scoring.per_letter,
        per_word = scoring.per_word,
        start = Keyword::Start,
    );

    [about, keywords, scoring_text]
}

#[cfg(test)]
mod tests {
    use super::help_messages;
    use crate::games::hangman::{Keyword, Scoring};

    #[test]
    fn mentions_every_player_keyword() {
        let text = help_messages(Scoring::default()).join("\n");

        for keyword in Keyword::ALL {
            assert!(text.contains(keyword.as_str()), "{keyword} missing from help");
        }
    }

    #[test]
    fn uses_game_scoring() {
        let [.., scoring] = help_messages(Scoring::new(2, 50));
        assert!(scoring.contains("2 score for each correct letter"));
        assert!(scoring.contains("extra 50"));
    }
}
