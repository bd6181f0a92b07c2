use std::path::PathBuf;

#[derive(clap::Parser, Debug, Clone)]
#[command(version, about = "Hangman for group chats")]
pub struct Cli {
    /// Config file to read instead of `$HANGBOT_TOML` or `./hangbot.toml`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log even when not running the bot.
    #[arg(long)]
    logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }

    pub fn logs_enabled(&self) -> bool {
        self.logs || self.command().is_start()
    }
}

#[derive(clap::Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
    /// Print the configuration the bot would run with.
    Config,

    /// Answer chat events read from stdin, one JSON object per line.
    #[default]
    Start,
}

impl Command {
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn start_by_default() {
        let cli = Cli::parse_from(["hangbot"]);
        assert_eq!(cli.command(), Command::Start);
        assert!(cli.logs_enabled());
    }

    #[test]
    fn config_without_logs() {
        let cli = Cli::parse_from(["hangbot", "--config", "custom.toml", "config"]);
        assert_eq!(cli.command(), Command::Config);
        assert!(!cli.logs_enabled());
        assert_eq!(cli.config, Some("custom.toml".into()));
    }
}
