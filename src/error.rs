//! Errors surfaced to the hosting application.
//!
//! Malformed input and unknown keys never show up here: the decoder and the
//! key catalog recover from those locally.

use std::io;

use thiserror::Error;

/// Errors returned by [`Ui::run`](crate::Ui::run) and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// The terminal could not be read from or written to.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input stream reached end of file.
    #[error("terminal input closed")]
    InputClosed,

    /// A keybinding action or submitted callback panicked.
    #[error("callback panicked: {0}")]
    Callback(String),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
