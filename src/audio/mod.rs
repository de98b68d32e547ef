//! WAV Codec Module
//!
//! Pure in-memory conversion between 16-bit PCM WAV bytes and samples.
//! Only the canonical 44-byte header layout is supported.

pub mod header;
pub mod decoder;
pub mod encoder;

pub use header::{header_bytes, write_header, WaveFormat, WaveHeader, HEADER_LEN};
pub use decoder::{decode, NormalizedAudio};
pub use encoder::{encode, encode_with_format};
