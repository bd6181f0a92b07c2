use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info, instrument, trace, warn};

use crate::{
    errors::Error,
    games::{Event, Request},
};

use super::{AppData, Messenger};

pub fn parse_event(line: &str) -> Result<Event, Error> {
    Ok(serde_json::from_str(line)?)
}

/// Routes one event and delivers whatever comes of it: the replies first,
/// then any requests to leave a group.
#[instrument(skip_all, fields(user = %event.user_id))]
pub async fn handle_event(
    data: &AppData,
    messenger: &impl Messenger,
    event: Event,
) -> Result<(), Error> {
    let name = messenger.display_name(&event.user_id).await?;
    let outbound = data.mastermind().await.dispatch(&event, &name);

    if outbound.is_empty() {
        trace!("nothing to say");
        return Ok(());
    }

    if !outbound.messages.is_empty() {
        messenger
            .reply(&outbound.reply_token, &outbound.messages)
            .await?;
    }

    for request in &outbound.requests {
        match request {
            Request::LeaveGroup(group) => messenger.leave_group(group).await?,
        }
    }

    Ok(())
}

/// Handles newline-delimited JSON events until `input` closes.
///
/// A bad line or a failed delivery is logged and skipped; only failing to read
/// `input` stops the loop.
pub async fn run(
    data: &AppData,
    messenger: &impl Messenger,
    input: impl AsyncBufRead + Unpin,
) -> Result<(), Error> {
    let mut lines = input.lines();
    let mut handled = 0usize;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let event = match parse_event(&line) {
            Ok(event) => event,
            Err(err) => {
                warn!(%err, "skipping event");
                continue;
            }
        };

        if let Err(err) = handle_event(data, messenger, event).await {
            error!(%err, "failed to answer event");
        }

        handled += 1;
    }

    info!(handled, uptime = %data.uptime(), "input closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::framework::{AppData, Config, ConsoleMessenger};
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    async fn session(input: &str) -> (AppData, Vec<String>) {
        let config = Config::default();
        let messenger = ConsoleMessenger::new(&config, Vec::new());
        let data = AppData::new(config);

        run(&data, &messenger, input.as_bytes()).await.unwrap();

        let out = String::from_utf8(messenger.into_inner()).unwrap();
        (data, out.lines().map(str::to_owned).collect())
    }

    #[tokio::test]
    #[traced_test]
    async fn skips_bad_lines() {
        let input = concat!(
            "not json\n",
            "\n",
            r#"{"channel":"public","text":"/start","user_id":"U1","group_id":"G1","reply_token":"r1"}"#,
            "\n",
        );

        let (data, out) = session(input).await;

        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with(r#"{"kind":"reply","reply_token":"r1","messages":["Welcome!"#));
        assert_eq!(data.mastermind().await.game_count(), 1);
        assert!(logs_contain("skipping event"));
    }

    #[tokio::test]
    async fn silence_writes_nothing() {
        let input = r#"{"channel":"public","text":"hello","user_id":"U1","group_id":"G1","reply_token":"r1"}"#;

        let (_, out) = session(input).await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn leave_after_goodbye() {
        let input = [
            r#"{"channel":"public","text":"/start","user_id":"U1","group_id":"G1","reply_token":"r1"}"#,
            r#"{"channel":"public","text":"/join","user_id":"U1","group_id":"G1","reply_token":"r2"}"#,
            r#"{"channel":"public","text":"/leave","user_id":"U1","group_id":"G1","reply_token":"r3"}"#,
        ]
        .join("\n");

        let (data, out) = session(&input).await;

        assert_eq!(out.len(), 4);
        assert!(out[2].contains(r#""reply_token":"r3""#));
        assert!(out[2].contains(r"SCOREBOARD\nU1: 0"));
        assert_eq!(out[3], r#"{"kind":"leave","group_id":"G1"}"#);
        assert_eq!(data.mastermind().await.game_count(), 0);
    }
}
