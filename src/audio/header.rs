//! Canonical 44-byte RIFF/WAVE header
//!
//! Layout (all integers little-endian):
//!
//! | Offset | Size | Field          |
//! |--------|------|----------------|
//! | 0      | 4    | `"RIFF"`       |
//! | 4      | 4    | riff size      |
//! | 8      | 4    | `"WAVE"`       |
//! | 12     | 4    | `"fmt "`       |
//! | 16     | 4    | fmt chunk size |
//! | 20     | 2    | audio format   |
//! | 22     | 2    | channels       |
//! | 24     | 4    | sample rate    |
//! | 28     | 4    | byte rate      |
//! | 32     | 2    | block align    |
//! | 34     | 2    | bits/sample    |
//! | 36     | 4    | `"data"`       |
//! | 40     | 4    | data size      |

use serde::{Deserialize, Serialize};
use crate::error::{WaveCodecError, Result};

pub const HEADER_LEN: usize = 44;
pub const FMT_CHUNK_SIZE: u32 = 16;
pub const PCM_AUDIO_FORMAT: u16 = 1;
pub const CHANNELS_OFFSET: usize = 22;

/// Bytes counted before the RIFF size field (tag + the field itself).
const RIFF_PREAMBLE_LEN: u64 = 8;

pub const RIFF_TAG: &[u8; 4] = b"RIFF";
pub const WAVE_TAG: &[u8; 4] = b"WAVE";
pub const FMT_TAG: &[u8; 4] = b"fmt ";
pub const DATA_TAG: &[u8; 4] = b"data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveFormat {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl WaveFormat {
    /// Format written by [`encode`](crate::audio::encode): 16 kHz, stereo, 16-bit.
    pub const FIXED: WaveFormat = WaveFormat {
        sample_rate: 16000,
        channels: 2,
        bits_per_sample: 16,
    };

    pub fn new(sample_rate: u32, channels: u16, bits_per_sample: u16) -> Self {
        Self { sample_rate, channels, bits_per_sample }
    }

    /// Truncated to the low 32 bits, as stored in the header.
    pub fn byte_rate(&self) -> u32 {
        (self.bits_per_sample as u64 * self.channels as u64 * self.sample_rate as u64 / 8) as u32
    }

    pub fn block_align(&self) -> u16 {
        (self.channels as u32 * self.bits_per_sample as u32 / 8) as u16
    }

    /// Checks the format is one the encoder can produce.
    pub fn validate(&self) -> Result<()> {
        if self.channels == 0 {
            return Err(WaveCodecError::InvalidChannelCount { channels: 0 });
        }

        if self.sample_rate == 0 {
            return Err(WaveCodecError::config("Sample rate cannot be 0"));
        }

        if self.bits_per_sample != 16 {
            return Err(WaveCodecError::config(format!(
                "Unsupported bit depth: {} (only 16-bit PCM)", self.bits_per_sample
            )));
        }

        Ok(())
    }
}

impl Default for WaveFormat {
    fn default() -> Self {
        Self::FIXED
    }
}

/// Logical view of the 44-byte header. Field values are stored as found,
/// without any consistency checks between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveHeader {
    pub riff_size: u32,
    pub fmt_chunk_size: u32,
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
}

impl WaveHeader {
    /// Header for a PCM stream in `format`, with derived rate fields.
    pub fn new(format: WaveFormat, riff_size: u32, data_size: u32) -> Self {
        Self {
            riff_size,
            fmt_chunk_size: FMT_CHUNK_SIZE,
            audio_format: PCM_AUDIO_FORMAT,
            channels: format.channels,
            sample_rate: format.sample_rate,
            byte_rate: format.byte_rate(),
            block_align: format.block_align(),
            bits_per_sample: format.bits_per_sample,
            data_size,
        }
    }

    /// Reads every header field. Chunk tags are not checked, so this accepts
    /// anything the decoder accepts.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(WaveCodecError::malformed(format!(
                "Need at least {} header bytes, got {}", HEADER_LEN, bytes.len()
            )));
        }

        Ok(Self {
            riff_size: read_u32_le(bytes, 4),
            fmt_chunk_size: read_u32_le(bytes, 16),
            audio_format: read_u16_le(bytes, 20),
            channels: read_u16_le(bytes, CHANNELS_OFFSET),
            sample_rate: read_u32_le(bytes, 24),
            byte_rate: read_u32_le(bytes, 28),
            block_align: read_u16_le(bytes, 32),
            bits_per_sample: read_u16_le(bytes, 34),
            data_size: read_u32_le(bytes, 40),
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(RIFF_TAG);
        out[4..8].copy_from_slice(&self.riff_size.to_le_bytes());
        out[8..12].copy_from_slice(WAVE_TAG);
        out[12..16].copy_from_slice(FMT_TAG);
        out[16..20].copy_from_slice(&self.fmt_chunk_size.to_le_bytes());
        out[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
        out[22..24].copy_from_slice(&self.channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        out[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        out[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        out[36..40].copy_from_slice(DATA_TAG);
        out[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        out
    }

    pub fn format(&self) -> WaveFormat {
        WaveFormat::new(self.sample_rate, self.channels, self.bits_per_sample)
    }

    /// File length implied by the RIFF size field.
    pub fn total_length(&self) -> u64 {
        self.riff_size as u64 + RIFF_PREAMBLE_LEN
    }

    pub fn duration(&self) -> f64 {
        if self.byte_rate == 0 {
            return 0.0;
        }
        self.data_size as f64 / self.byte_rate as f64
    }
}

/// Builds a header from raw field values.
///
/// `total_data_len` is written verbatim as the RIFF size, so callers pass the
/// file length minus 8. `total_audio_len` becomes the data chunk size. Both
/// are stored as their low 32 bits.
pub fn write_header(
    total_audio_len: u64,
    total_data_len: u64,
    sample_rate: u32,
    channels: u16,
    bits_per_sample: u16,
) -> [u8; HEADER_LEN] {
    let format = WaveFormat::new(sample_rate, channels, bits_per_sample);
    WaveHeader::new(format, total_data_len as u32, total_audio_len as u32).to_bytes()
}

/// Header for a file of `total_length` bytes (header included).
pub fn header_bytes(total_length: u64, format: &WaveFormat) -> Result<[u8; HEADER_LEN]> {
    if total_length < HEADER_LEN as u64 {
        return Err(WaveCodecError::invalid_length(
            total_length,
            format!("shorter than the {}-byte header", HEADER_LEN),
        ));
    }

    let riff_size = total_length - RIFF_PREAMBLE_LEN;
    if riff_size > u32::MAX as u64 {
        return Err(WaveCodecError::invalid_length(total_length, "exceeds the 4 GiB RIFF limit"));
    }

    Ok(write_header(
        total_length - HEADER_LEN as u64,
        riff_size,
        format.sample_rate,
        format.channels,
        format.bits_per_sample,
    ))
}

pub(crate) fn read_u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

pub(crate) fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_format() {
        let format = WaveFormat::FIXED;
        assert_eq!(format.sample_rate, 16000);
        assert_eq!(format.channels, 2);
        assert_eq!(format.bits_per_sample, 16);
        assert_eq!(format.byte_rate(), 64000);
        assert_eq!(format.block_align(), 4);
        assert_eq!(WaveFormat::default(), format);
    }

    #[test]
    fn test_format_validation() {
        assert!(WaveFormat::FIXED.validate().is_ok());
        assert!(WaveFormat::new(44100, 1, 16).validate().is_ok());

        assert!(matches!(
            WaveFormat::new(16000, 0, 16).validate(),
            Err(WaveCodecError::InvalidChannelCount { channels: 0 })
        ));
        assert!(WaveFormat::new(0, 1, 16).validate().is_err());
        assert!(WaveFormat::new(16000, 1, 24).validate().is_err());
    }

    #[test]
    fn test_write_header_fields() {
        let header = write_header(1000, 1036, 44100, 2, 16);

        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(&header[36..40], b"data");

        assert_eq!(read_u32_le(&header, 4), 1036);
        assert_eq!(read_u32_le(&header, 16), 16);
        assert_eq!(read_u16_le(&header, 20), 1);
        assert_eq!(read_u16_le(&header, 22), 2);
        assert_eq!(read_u32_le(&header, 24), 44100);
        assert_eq!(read_u32_le(&header, 28), 176400);
        assert_eq!(read_u16_le(&header, 32), 4);
        assert_eq!(read_u16_le(&header, 34), 16);
        assert_eq!(read_u32_le(&header, 40), 1000);
    }

    #[test]
    fn test_write_header_passes_sizes_through() {
        // No adjustment is applied to either size.
        let header = write_header(7, 3, 8000, 1, 16);
        assert_eq!(read_u32_le(&header, 4), 3);
        assert_eq!(read_u32_le(&header, 40), 7);

        let header = write_header(0x1_0000_0005, 0x2_0000_0009, 8000, 1, 16);
        assert_eq!(read_u32_le(&header, 4), 9);
        assert_eq!(read_u32_le(&header, 40), 5);
    }

    #[test]
    fn test_byte_rate_truncates() {
        // 8-bit mono at 11025 Hz: 8 * 1 * 11025 / 8
        let header = write_header(0, 36, 11025, 1, 8);
        assert_eq!(read_u32_le(&header, 28), 11025);
        assert_eq!(read_u16_le(&header, 32), 1);

        // 12-bit mono: 12 * 1 * 3 / 8 = 4.5, truncated
        let header = write_header(0, 36, 3, 1, 12);
        assert_eq!(read_u32_le(&header, 28), 4);
    }

    #[test]
    fn test_header_bytes_sizes() {
        let header = header_bytes(52, &WaveFormat::FIXED).unwrap();
        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(read_u32_le(&header, 4), 44);
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(read_u32_le(&header, 16), 16);
        assert_eq!(read_u16_le(&header, 20), 1);
        assert_eq!(read_u16_le(&header, 22), 2);
        assert_eq!(read_u32_le(&header, 24), 16000);
        assert_eq!(read_u32_le(&header, 28), 64000);
        assert_eq!(read_u16_le(&header, 32), 4);
        assert_eq!(read_u16_le(&header, 34), 16);
        assert_eq!(&header[36..40], b"data");
        assert_eq!(read_u32_le(&header, 40), 8);

        let mono = WaveFormat::new(8000, 1, 16);
        let header = header_bytes(50, &mono).unwrap();
        assert_eq!(read_u16_le(&header, 22), 1);
        assert_eq!(read_u32_le(&header, 24), 8000);
        assert_eq!(read_u32_le(&header, 28), 16000);
        assert_eq!(read_u16_le(&header, 32), 2);
        assert_eq!(read_u32_le(&header, 40), 6);

        let header = header_bytes(44, &WaveFormat::FIXED).unwrap();
        assert_eq!(read_u32_le(&header, 4), 36);
        assert_eq!(read_u32_le(&header, 40), 0);
    }

    #[test]
    fn test_header_bytes_rejects_short_length() {
        let result = header_bytes(43, &WaveFormat::FIXED);
        assert!(matches!(result, Err(WaveCodecError::InvalidLength { length: 43, .. })));

        let result = header_bytes(0, &WaveFormat::FIXED);
        assert!(result.is_err());
    }

    #[test]
    fn test_header_bytes_rejects_oversized_length() {
        let too_big = u32::MAX as u64 + 9;
        assert!(header_bytes(too_big, &WaveFormat::FIXED).is_err());
        assert!(header_bytes(too_big - 1, &WaveFormat::FIXED).is_ok());
    }

    #[test]
    fn test_parse_reads_every_field() {
        let format = WaveFormat::new(22050, 1, 16);
        let header = WaveHeader::new(format, 136, 100);
        let parsed = WaveHeader::parse(&header.to_bytes()).unwrap();

        assert_eq!(parsed, header);
        assert_eq!(parsed.format(), format);
        assert_eq!(parsed.total_length(), 144);
        assert_eq!(parsed.byte_rate, 44100);
    }

    #[test]
    fn test_parse_ignores_tags() {
        let mut bytes = write_header(0, 36, 16000, 1, 16);
        bytes[0..4].copy_from_slice(b"JUNK");
        bytes[36..40].copy_from_slice(b"LIST");

        let parsed = WaveHeader::parse(&bytes).unwrap();
        assert_eq!(parsed.channels, 1);
        assert_eq!(parsed.sample_rate, 16000);
    }

    #[test]
    fn test_parse_short_buffer() {
        let result = WaveHeader::parse(&[0u8; 43]);
        assert!(matches!(result, Err(WaveCodecError::MalformedInput { .. })));
    }

    #[test]
    fn test_duration() {
        let header = WaveHeader::new(WaveFormat::FIXED, 64036, 64000);
        assert!((header.duration() - 1.0).abs() < f64::EPSILON);

        let header = WaveHeader::new(WaveFormat::new(0, 1, 16), 36, 0);
        assert_eq!(header.duration(), 0.0);
    }
}
