use thiserror::Error as ThisError;

use crate::framework::{config, messenger};

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::Error),

    #[error("couldn't read events: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed event: {0}")]
    Event(#[from] serde_json::Error),

    #[error("couldn't deliver: {0}")]
    Delivery(#[from] messenger::Error),
}
