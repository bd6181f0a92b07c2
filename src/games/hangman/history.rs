use crate::utils::UserId;

/// One successful guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub user: UserId,
    pub guess: String,
    pub score: u64,
    /// What the word looked like right after this guess.
    pub display: String,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The last `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    pub fn render(&self, limit: usize, name: impl Fn(&UserId) -> String) -> String {
        self.recent(limit)
            .iter()
            .fold(String::from("HISTORY"), |mut text, entry| {
                text.push('\n');
                text.push_str(&format!(
                    "{} | {} | {} | {}",
                    name(&entry.user),
                    entry.guess,
                    entry.score,
                    entry.display
                ));
                text
            })
    }
}
