use std::cmp::Reverse;

use crate::utils::UserId;

/// Scores by user, in the order users first scored or joined.
///
/// Entries are never removed: leaving a game doesn't forfeit points.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    entries: Vec<(UserId, u64)>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, user: &UserId) -> bool {
        self.score(user).is_some()
    }

    pub fn score(&self, user: &UserId) -> Option<u64> {
        self.entries
            .iter()
            .find_map(|(id, score)| (id == user).then_some(*score))
    }

    /// Adds `user` with no points, unless they're already here.
    pub fn enroll(&mut self, user: &UserId) {
        if !self.contains(user) {
            self.entries.push((user.clone(), 0));
        }
    }

    pub fn award(&mut self, user: &UserId, points: u64) -> u64 {
        self.enroll(user);

        let entry = self
            .entries
            .iter_mut()
            .find(|(id, _)| id == user)
            .map(|(_, score)| score);

        match entry {
            Some(score) => {
                *score = score.saturating_add(points);
                *score
            }
            None => points,
        }
    }

    /// Highest first. Ties keep whatever order they were in before.
    pub fn sort(&mut self) {
        self.entries.sort_by_key(|(_, score)| Reverse(*score));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn render(&mut self, name: impl Fn(&UserId) -> String) -> String {
        self.sort();

        self.entries
            .iter()
            .fold(String::from("SCOREBOARD"), |mut text, (user, score)| {
                text.push('\n');
                text.push_str(&name(user));
                text.push_str(": ");
                text.push_str(&score.to_string());
                text
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Scoreboard;
    use crate::utils::UserId;
    use pretty_assertions::assert_eq;

    fn ids() -> [UserId; 3] {
        ["a", "b", "c"].map(UserId::new)
    }

    #[test]
    fn award_enrolls() {
        let mut board = Scoreboard::new();
        let [a, ..] = ids();

        assert_eq!(board.award(&a, 3), 3);
        assert_eq!(board.award(&a, 4), 7);
        assert_eq!(board.score(&a), Some(7));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn enroll_keeps_score() {
        let mut board = Scoreboard::new();
        let [a, ..] = ids();

        board.award(&a, 5);
        board.enroll(&a);
        assert_eq!(board.score(&a), Some(5));
    }

    #[test]
    fn render_sorted_and_stable() {
        let mut board = Scoreboard::new();
        let [a, b, c] = ids();

        board.enroll(&a);
        board.award(&b, 2);
        board.enroll(&c);

        let rendered = board.render(|user| user.to_string());
        assert_eq!(rendered, "SCOREBOARD\nb: 2\na: 0\nc: 0");
    }

    #[test]
    fn render_empty() {
        let mut board = Scoreboard::new();
        assert_eq!(board.render(|user| user.to_string()), "SCOREBOARD");
    }
}
