//! WAV encoding of 16-bit PCM samples

use crate::audio::header::{header_bytes, WaveFormat, HEADER_LEN};
use crate::error::{WaveCodecError, Result};

const BYTES_PER_SAMPLE: usize = 2;

/// Encode samples as a WAV file in [`WaveFormat::FIXED`] (16 kHz, stereo, 16-bit).
///
/// Samples are written in order as given; the caller is responsible for
/// interleaving channels.
pub fn encode(samples: &[i16]) -> Result<Vec<u8>> {
    build(samples, &WaveFormat::FIXED)
}

/// Encode interleaved samples with a caller-chosen format.
pub fn encode_with_format(samples: &[i16], format: &WaveFormat) -> Result<Vec<u8>> {
    format.validate()?;

    if samples.len() % format.channels as usize != 0 {
        return Err(WaveCodecError::malformed(format!(
            "{} samples do not divide into {}-channel frames", samples.len(), format.channels
        )));
    }

    build(samples, format)
}

fn build(samples: &[i16], format: &WaveFormat) -> Result<Vec<u8>> {
    let total_length = HEADER_LEN as u64 + (samples.len() * BYTES_PER_SAMPLE) as u64;
    let header = header_bytes(total_length, format)?;

    let mut bytes = Vec::with_capacity(total_length as usize);
    bytes.extend_from_slice(&header);
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    Ok(bytes)
}
