use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("random source unavailable: {0}")]
    Entropy(#[from] rand::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
