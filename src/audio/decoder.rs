//! WAV decoding into normalized float samples

use ndarray::Array1;
use crate::audio::header::{read_u16_le, CHANNELS_OFFSET, HEADER_LEN};
use crate::error::{WaveCodecError, Result};

/// One value per frame, in [-1.0, 1.0].
pub type NormalizedAudio = Array1<f32>;

const I16_SCALE: f32 = 32767.0;

/// Decode a 16-bit PCM WAV byte stream.
///
/// Only the channel count at offset 22 is read from the header; tags and
/// chunk sizes are not checked, and everything from byte 44 on is treated as
/// interleaved little-endian `i16` samples.
///
/// Mono input is scaled by 1/32767. For any other channel count the first two
/// samples of each frame are averaged and the rest are ignored, so sources with
/// more than two channels are not properly downmixed.
pub fn decode(bytes: &[u8]) -> Result<NormalizedAudio> {
    if bytes.len() < HEADER_LEN {
        return Err(WaveCodecError::malformed(format!(
            "WAV data is {} bytes, shorter than the {}-byte header", bytes.len(), HEADER_LEN
        )));
    }

    let payload = &bytes[HEADER_LEN..];
    if payload.len() % 2 != 0 {
        return Err(WaveCodecError::malformed(format!(
            "PCM payload of {} bytes ends with a truncated sample", payload.len()
        )));
    }

    let channels = read_u16_le(bytes, CHANNELS_OFFSET);
    if channels == 0 {
        return Err(WaveCodecError::InvalidChannelCount { channels });
    }

    let pcm: Vec<i16> = payload
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let frames = pcm.len() / channels as usize;

    let samples = if channels == 1 {
        Array1::from_iter(pcm.iter().map(|&s| (s as f32 / I16_SCALE).clamp(-1.0, 1.0)))
    } else {
        Array1::from_shape_fn(frames, |i| {
            let sum = pcm[2 * i] as i32 + pcm[2 * i + 1] as i32;
            (sum as f32 / I16_SCALE / 2.0).clamp(-1.0, 1.0)
        })
    };

    Ok(samples)
}
