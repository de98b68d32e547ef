//! Configuration management for the codec command line tool

use crate::audio::WaveFormat;
use crate::error::{WaveCodecError, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub format: WaveFormat,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub verbose: bool,
}

impl Config {
    /// Get sample rate (convenience method)
    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    /// Get channel count (convenience method)
    pub fn channels(&self) -> u16 {
        self.format.channels
    }

    pub fn verbose(&self) -> bool {
        self.output.verbose
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "wavecodec", about = "16-bit PCM WAV encoder/decoder", version, author)]
pub struct Args {
    #[arg(short = 'v', long = "verbose", global = true, help = "Enable verbose output mode")]
    pub verbose: bool,

    #[arg(short = 'c', long = "config", global = true, help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Decode a WAV file to normalized float samples
    Decode {
        #[arg(short = 'i', long = "input", help = "Input WAV file path")]
        input: PathBuf,

        #[arg(short = 'o', long = "output", help = "Write samples as raw little-endian f32")]
        output: Option<PathBuf>,
    },

    /// Encode raw little-endian 16-bit PCM into a WAV file
    Encode {
        #[arg(short = 'i', long = "input", help = "Input raw PCM file path (s16le, interleaved)")]
        input: PathBuf,

        #[arg(short = 'o', long = "output", default_value = "output.wav", help = "Output WAV file path")]
        output: PathBuf,

        #[arg(short = 'r', long = "sample-rate", help = "Sample rate (Hz), overrides config")]
        sample_rate: Option<u32>,

        #[arg(long = "channels", help = "Channel count, overrides config")]
        channels: Option<u16>,
    },

    /// Print the header fields of a WAV file
    Info {
        #[arg(short = 'i', long = "input", help = "Input WAV file path")]
        input: PathBuf,
    },

    /// Write the default configuration to a TOML file
    InitConfig {
        #[arg(short = 'o', long = "output", default_value = "wavecodec.toml", help = "Config file to create")]
        output: PathBuf,
    },
}

impl Config {
    /// Create config from command line arguments and config file
    pub fn from_args_and_config(args: &Args) -> Result<Self> {
        let mut config = if let Some(config_path) = &args.config_file {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        // Command line arguments override config file settings
        if args.verbose {
            config.output.verbose = true;
        }
        if let Command::Encode { sample_rate, channels, .. } = &args.command {
            if let Some(rate) = sample_rate {
                config.format.sample_rate = *rate;
            }
            if let Some(channels) = channels {
                config.format.channels = *channels;
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WaveCodecError::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| WaveCodecError::config(format!("Failed to parse config file: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        self.format.validate()?;

        if self.format.sample_rate > 192000 {
            return Err(WaveCodecError::config("Sample rate cannot exceed 192000 Hz"));
        }

        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaveCodecError::config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| WaveCodecError::config(format!("Failed to write config file: {}", e)))
    }

    pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        Self::default().save_to_file(path)
    }
}
