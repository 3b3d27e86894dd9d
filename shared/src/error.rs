use thiserror::*;

#[derive(Error, Debug)]
pub enum CoiError {
    #[error("I/O Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("UTF-8 Error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

pub type CoiResult<T = ()> = Result<T, CoiError>;
