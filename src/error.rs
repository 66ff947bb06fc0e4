use thiserror::Error;

/// Startup configuration errors. All of them are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid round settings: {0}")]
    Round(String),
}

/// Failures while rewriting the environment file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("env file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("atomic replace of env file failed: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("env file writer task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Outcome failures of the owner-only allow-list commands.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("user {0} is not the owner")]
    NotOwner(u64),

    #[error("missing user id argument")]
    MissingArgument,

    #[error("invalid user id {0:?}")]
    InvalidUserId(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised by a chat transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Telegram(#[from] teloxide::RequestError),

    #[error("transport rejected request: {0}")]
    Rejected(String),
}
