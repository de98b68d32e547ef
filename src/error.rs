//! Error Types

use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum WaveCodecError {
    /// Buffer too short for a header, or a truncated trailing sample.
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("Invalid channel count: {channels}")]
    InvalidChannelCount { channels: u16 },

    /// A header was requested for a buffer that cannot hold it.
    #[error("Invalid length: {length} bytes ({message})")]
    InvalidLength { length: u64, message: String },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaveCodecError {
    pub fn malformed<S: Into<String>>(msg: S) -> Self { Self::MalformedInput { message: msg.into() } }
    pub fn invalid_length<S: Into<String>>(length: u64, msg: S) -> Self {
        Self::InvalidLength { length, message: msg.into() }
    }
    pub fn config<S: Into<String>>(msg: S) -> Self { Self::Config { message: msg.into() } }
}

pub type Result<T> = std::result::Result<T, WaveCodecError>;
