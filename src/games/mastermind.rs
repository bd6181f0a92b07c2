use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, info, instrument, trace, warn};

use crate::utils::{AsId, GroupId, ReplyToken, UserId};

use super::hangman::{
    Channel, Command, GameOptions, GameOptionsBuilder, Hangman, Keyword, Reply, Scoring,
    SideEffect,
};

/// An inbound chat message, as handed over by the platform integration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    pub channel: Channel,
    pub text: String,
    pub user_id: UserId,
    /// Only present for [`Channel::Public`] messages.
    #[serde(default)]
    pub group_id: Option<GroupId>,
    pub reply_token: ReplyToken,
}

/// Something only the platform integration can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    LeaveGroup(GroupId),
}

/// Everything to do in answer to one [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub reply_token: ReplyToken,
    pub messages: Vec<String>,
    pub requests: Vec<Request>,
}

impl Outbound {
    fn new(reply_token: ReplyToken) -> Self {
        Self {
            reply_token,
            messages: Vec::new(),
            requests: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.requests.is_empty()
    }
}

/// Owns every running game, keyed by group, and remembers which game each player joined
/// so their private messages reach it.
#[derive(Debug, Default)]
pub struct Mastermind {
    defaults: GameOptions,
    games: HashMap<GroupId, Hangman>,
    memberships: HashMap<UserId, GroupId>,
}

impl Mastermind {
    pub fn new(defaults: GameOptions) -> Self {
        Self {
            defaults,
            games: HashMap::new(),
            memberships: HashMap::new(),
        }
    }

    pub const fn defaults(&self) -> &GameOptions {
        &self.defaults
    }

    #[cfg(test)]
    pub fn game(&self, group: &GroupId) -> Option<&Hangman> {
        self.games.get(group)
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    #[cfg(test)]
    pub fn membership(&self, user: &UserId) -> Option<&GroupId> {
        self.memberships.get(user)
    }

    /// `args` may carry custom scoring, like `"2 50"`. Anything malformed means the defaults.
    #[instrument(skip_all)]
    pub fn start_game(&mut self, group: impl AsId<GroupId>, args: &str) -> Reply {
        let group = group.as_id();

        if self.games.contains_key(&group) {
            return Reply::text(format!(
                "A Hangman game is already running here. Say {end} to stop it first.",
                end = Keyword::End
            ));
        }

        let scoring = Scoring::parse_or(args, self.defaults.scoring);
        let options = GameOptionsBuilder::from(self.defaults)
            .scoring(scoring)
            .build();

        let game = Hangman::new(options);
        let hello = game.show_hello();

        info!(%group, scoring.per_letter, scoring.per_word, "game started");

        self.games.insert(group, game);
        hello
    }

    /// Removes the game along with every membership pointing at it.
    #[instrument(skip_all, fields(%group))]
    pub fn end_game(&mut self, group: &GroupId) -> Reply {
        let Some(mut game) = self.games.remove(group) else {
            return Reply::text("There is no Hangman game running here.");
        };

        self.memberships.retain(|_, joined| joined != group);

        info!(games = self.game_count(), "game ended");

        game.show_goodbye()
    }

    pub fn leave_group(&mut self, group: &GroupId) -> (Reply, Request) {
        let reply = if self.games.contains_key(group) {
            self.end_game(group)
        } else {
            Reply::new()
        };

        info!(%group, "leaving group");

        (reply, Request::LeaveGroup(group.clone()))
    }

    #[instrument(skip_all, fields(channel = ?event.channel, user = %event.user_id))]
    pub fn dispatch(&mut self, event: &Event, display_name: &str) -> Outbound {
        let command = Command::parse(event.channel, &event.text);
        let mut outbound = Outbound::new(event.reply_token.clone());

        match event.channel {
            Channel::Public => {
                if let Some(group) = &event.group_id {
                    self.dispatch_public(group, command, &event.user_id, display_name, &mut outbound);
                } else {
                    warn!("public message without a group, ignoring");
                }
            }
            Channel::Private => {
                let user = &event.user_id;
                self.dispatch_private(command, &event.text, user, display_name, &mut outbound);
            }
        }

        outbound
    }

    fn dispatch_public(
        &mut self,
        group: &GroupId,
        command: Command<'_>,
        user: &UserId,
        name: &str,
        outbound: &mut Outbound,
    ) {
        // /start and /leave work with or without a game here
        let reply = match command {
            Command::Keyword {
                keyword: Keyword::Start,
                args,
            } => self.start_game(group, args),
            Command::Keyword {
                keyword: Keyword::Leave,
                ..
            } => {
                let (reply, request) = self.leave_group(group);
                outbound.requests.push(request);
                reply
            }
            Command::Keyword {
                keyword: Keyword::End,
                ..
            } if self.games.contains_key(group) => self.end_game(group),
            command => match self.games.get_mut(group) {
                Some(game) => game.handle(Channel::Public, command, user, name),
                None => {
                    trace!(%group, "no game here, ignoring");
                    Reply::new()
                }
            },
        };

        outbound.messages = self.settle(group, reply);
    }

    fn dispatch_private(
        &mut self,
        command: Command<'_>,
        text: &str,
        user: &UserId,
        name: &str,
        outbound: &mut Outbound,
    ) {
        if command == Command::Chatter {
            trace!("private chatter, ignoring");
            return;
        }

        let game = self
            .memberships
            .get(user)
            .cloned()
            .and_then(|group| self.games.get_mut(&group).map(|game| (group, game)));

        let Some((group, game)) = game else {
            outbound.messages = if command.keyword() == Some(Keyword::Help) {
                Hangman::new(self.defaults).show_help().into_parts().0
            } else {
                vec![format!(
                    "You haven't joined any game. Say {join} in a group with a running game first.",
                    join = Keyword::Join
                )]
            };
            return;
        };

        let reply = game.route(Channel::Private, text, user, name);
        outbound.messages = self.settle(&group, reply);
    }

    /// Applies a game's side effects, leaving only its messages.
    fn settle(&mut self, group: &GroupId, reply: Reply) -> Vec<String> {
        let (messages, side_effects) = reply.into_parts();

        for effect in side_effects {
            match effect {
                SideEffect::Join(user) => {
                    debug!(%user, %group, "membership added");
                    self.memberships.insert(user, group.clone());
                }
                SideEffect::Unjoin(user) => {
                    if self.memberships.get(&user) == Some(group) {
                        debug!(%user, %group, "membership removed");
                        self.memberships.remove(&user);
                    }
                }
            }
        }

        messages
    }
}
