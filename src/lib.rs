//! WaveCodec - Minimal RIFF/PCM WAV Codec
//!
//! Decodes 16-bit PCM WAV bytes into normalized mono float samples and encodes
//! PCM samples into WAV bytes with a canonical 44-byte header.

pub mod audio;
pub mod config;
pub mod error;
pub mod file;

pub use audio::{decode, encode, encode_with_format, write_header, NormalizedAudio, WaveFormat, WaveHeader};
pub use config::{Args, Command, Config};
pub use error::{WaveCodecError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// `RUST_LOG` takes precedence over the verbose flag when set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init()
        .ok();
}

pub fn get_library_info() -> LibraryInfo {
    LibraryInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct LibraryInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl std::fmt::Display for LibraryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{} - {}", self.name, self.version, self.description)
    }
}
