use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use tracing::{trace, warn};

pub const DEFAULT_FILTER: &str = "hangbot=info";

/// Logs go to stderr, stdout carries the replies.
///
/// `RUST_LOG` wins over the configured filter.
pub fn init_tracing(filter: Option<&str>) {
    let configured = filter.unwrap_or(DEFAULT_FILTER);

    let (filter, invalid) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => match EnvFilter::try_new(configured) {
            Ok(filter) => (filter, None),
            Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
        },
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Some(err) = invalid {
        warn!(%err, configured, "invalid log filter, using {DEFAULT_FILTER}");
    }

    trace!("finished");
}
