//! The seam between the games and whatever chat platform carries them.

use std::collections::HashMap;

use serde::Serialize;
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::Mutex,
};
use tracing::{debug, instrument};

use crate::utils::{GroupId, ReplyToken, UserId};

use super::Config;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("couldn't write to the platform: {0}")]
    Io(#[from] std::io::Error),

    #[error("couldn't encode outbound message: {0}")]
    Json(#[from] serde_json::Error),
}

#[allow(async_fn_in_trait)]
pub trait Messenger {
    /// Send `messages`, in order, through the reply channel `token` belongs to.
    async fn reply(&self, token: &ReplyToken, messages: &[String]) -> Result<(), Error>;

    async fn display_name(&self, user: &UserId) -> Result<String, Error>;

    async fn leave_group(&self, group: &GroupId) -> Result<(), Error>;
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Output<'a> {
    Reply {
        reply_token: &'a ReplyToken,
        messages: &'a [String],
    },
    Leave {
        group_id: &'a GroupId,
    },
}

/// Writes one JSON object per line, for a bridge process to deliver.
#[derive(Debug)]
pub struct ConsoleMessenger<W> {
    names: HashMap<UserId, String>,
    out: Mutex<W>,
}

impl ConsoleMessenger<tokio::io::Stdout> {
    pub fn stdout(config: &Config) -> Self {
        Self::new(config, tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin> ConsoleMessenger<W> {
    pub fn new(config: &Config, out: W) -> Self {
        let names = config
            .names
            .iter()
            .map(|entry| (entry.id.clone(), entry.name.clone()))
            .collect();

        Self {
            names,
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    async fn write(&self, output: &Output<'_>) -> Result<(), Error> {
        let mut line = serde_json::to_vec(output)?;
        line.push(b'\n');

        let mut out = self.out.lock().await;
        out.write_all(&line).await?;
        out.flush().await?;

        Ok(())
    }
}

impl<W: AsyncWrite + Unpin> Messenger for ConsoleMessenger<W> {
    #[instrument(skip_all, fields(%token, count = messages.len()))]
    async fn reply(&self, token: &ReplyToken, messages: &[String]) -> Result<(), Error> {
        self.write(&Output::Reply {
            reply_token: token,
            messages,
        })
        .await?;

        debug!("replied");
        Ok(())
    }

    async fn display_name(&self, user: &UserId) -> Result<String, Error> {
        Ok(self
            .names
            .get(user)
            .cloned()
            .unwrap_or_else(|| user.to_string()))
    }

    #[instrument(skip(self))]
    async fn leave_group(&self, group: &GroupId) -> Result<(), Error> {
        self.write(&Output::Leave { group_id: group }).await
    }
}
