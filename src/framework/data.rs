use chrono::Utc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::games::Mastermind;

use super::Config;

pub(crate) type UtcDateTime = chrono::DateTime<Utc>;

/// Everything the event loop shares. Every group's game sits behind one lock,
/// so events are handled one at a time.
#[derive(Debug)]
pub struct AppData {
    pub(crate) config: Config,
    pub(crate) started: UtcDateTime,

    mastermind: Mutex<Mastermind>,
}

impl AppData {
    pub fn new(config: Config) -> Self {
        let mastermind = Mastermind::new(config.game.options());
        info!(defaults = ?mastermind.defaults(), "mastermind ready");

        Self {
            config,
            started: Utc::now(),
            mastermind: Mutex::new(mastermind),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn uptime(&self) -> chrono::Duration {
        Utc::now() - self.started
    }

    pub async fn mastermind(&self) -> MutexGuard<'_, Mastermind> {
        self.mastermind.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::AppData;
    use crate::framework::Config;

    #[tokio::test]
    async fn uses_configured_defaults() {
        let mut config = Config::default();
        config.game.score_per_word = 99;

        let data = AppData::new(config);
        assert_eq!(data.mastermind().await.defaults().scoring.per_word, 99);
        assert_eq!(data.mastermind().await.game_count(), 0);
        assert!(data.uptime() >= chrono::Duration::zero());
    }
}
