use crate::utils::UserId;

/// Bookkeeping a game asks its owner to do on its behalf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SideEffect {
    Join(UserId),
    Unjoin(UserId),
}

/// Plain-text messages to send back, in order, plus any [`SideEffect`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    messages: Vec<String>,
    side_effects: Vec<SideEffect>,
}

impl Reply {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(message: impl Into<String>) -> Self {
        let mut reply = Self::new();
        reply.push(message);
        reply
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn with_side_effect(mut self, effect: SideEffect) -> Self {
        self.side_effects.push(effect);
        self
    }

    #[cfg(test)]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[cfg(test)]
    pub fn side_effects(&self) -> &[SideEffect] {
        &self.side_effects
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.side_effects.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<SideEffect>) {
        (self.messages, self.side_effects)
    }
}

impl From<Vec<String>> for Reply {
    fn from(messages: Vec<String>) -> Self {
        Self {
            messages,
            side_effects: Vec::new(),
        }
    }
}
