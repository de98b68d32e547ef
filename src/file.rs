//! WAV file reading and writing
//!
//! Thin I/O layer around the in-memory codec. File handles are scoped to each
//! call and closed on return, including on error paths.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use log::debug;
use crate::audio::{self, NormalizedAudio, WaveFormat, WaveHeader, HEADER_LEN};
use crate::error::{WaveCodecError, Result};

/// Read a whole file and decode it.
pub fn decode_wave_file<P: AsRef<Path>>(path: P) -> Result<NormalizedAudio> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    let samples = audio::decode(&bytes)?;
    debug!("Decoded {} frames from {}", samples.len(), path.display());
    Ok(samples)
}

/// Read just the header fields of a file. The PCM payload is not loaded.
pub fn read_wave_header<P: AsRef<Path>>(path: P) -> Result<WaveHeader> {
    let path = path.as_ref();
    let mut bytes = Vec::with_capacity(HEADER_LEN);
    File::open(path)?
        .take(HEADER_LEN as u64)
        .read_to_end(&mut bytes)?;
    WaveHeader::parse(&bytes)
}

/// Encode samples in the fixed format and write them to `path`.
pub fn encode_wave_file<P: AsRef<Path>>(path: P, samples: &[i16]) -> Result<()> {
    let bytes = audio::encode(samples)?;
    write_bytes(path.as_ref(), &bytes)
}

/// Encode samples in `format` and write them to `path`.
pub fn write_wave_file<P: AsRef<Path>>(path: P, samples: &[i16], format: &WaveFormat) -> Result<()> {
    let bytes = audio::encode_with_format(samples, format)?;
    write_bytes(path.as_ref(), &bytes)
}

/// Read raw interleaved little-endian `i16` PCM.
pub fn read_raw_pcm<P: AsRef<Path>>(path: P) -> Result<Vec<i16>> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;

    if bytes.len() % 2 != 0 {
        return Err(WaveCodecError::malformed(format!(
            "Raw PCM file {} has an odd byte count ({})", path.display(), bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Write samples as raw little-endian `f32`.
pub fn write_raw_f32<P: AsRef<Path>>(path: P, samples: &NormalizedAudio) -> Result<()> {
    let path = path.as_ref();
    create_parent_dir(path)?;

    let mut writer = BufWriter::new(File::create(path)?);
    for sample in samples.iter() {
        writer.write_all(&sample.to_le_bytes())?;
    }
    writer.flush()?;

    debug!("Wrote {} float samples to {}", samples.len(), path.display());
    Ok(())
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| {
        WaveCodecError::Io(std::io::Error::new(
            e.kind(),
            format!("Cannot read {}: {}", path.display(), e),
        ))
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    create_parent_dir(path)?;

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
