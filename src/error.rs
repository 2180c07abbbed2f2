#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error accessing file: {0}")]
    IOFailed(std::io::Error),
    #[error("error reading settings json: {0}")]
    SerdeFailed(serde_json::Error),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::IOFailed(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::SerdeFailed(error)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
