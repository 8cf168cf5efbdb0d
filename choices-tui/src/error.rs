use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialise logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Picker(#[from] choices::ChoicesError),

    #[error("unknown element kind `{0}` (expected text, select-one or select-multiple)")]
    UnknownKind(String),
}
