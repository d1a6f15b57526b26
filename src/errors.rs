use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    IO(#[from] IOError),
}

#[derive(Debug, Error)]
pub enum IOError {
    #[error("file not found")]
    NotFound,
    #[error("IO error: {0}")]
    Msg(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl From<std::io::Error> for IOError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => IOError::NotFound,
            _ => IOError::Msg(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for IOError {
    fn from(e: serde_json::Error) -> Self {
        IOError::SerializationError(e.to_string())
    }
}
