//! WaveCodec command line tool

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use std::process;
use wavecodec::{file, init_logging, Args, Command, Config};

fn main() {
    let args = Args::parse();

    // Logging level depends on the merged config, so it is loaded first.
    let config = match Config::from_args_and_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    init_logging(config.verbose());

    if let Err(e) = run(args, config) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args, config: Config) -> anyhow::Result<()> {
    if config.verbose() {
        debug!("{}", wavecodec::get_library_info());
    }

    match args.command {
        Command::Decode { input, output } => {
            let samples = file::decode_wave_file(&input)
                .with_context(|| format!("Failed to decode {}", input.display()))?;

            let peak = samples.iter().fold(0.0f32, |p, s| p.max(s.abs()));
            let rms = if samples.is_empty() {
                0.0
            } else {
                (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
            };

            println!("Frames: {}", samples.len());
            println!("Peak: {:.6}", peak);
            println!("RMS: {:.6}", rms);

            if let Some(output) = output {
                file::write_raw_f32(&output, &samples)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                info!("Wrote {} samples to {}", samples.len(), output.display());
            }
        }
        Command::Encode { input, output, .. } => {
            let samples = file::read_raw_pcm(&input)
                .with_context(|| format!("Failed to read PCM from {}", input.display()))?;

            file::write_wave_file(&output, &samples, &config.format)
                .with_context(|| format!("Failed to encode {}", output.display()))?;

            println!(
                "Encoded {} samples ({} Hz, {} ch) to {}",
                samples.len(),
                config.sample_rate(),
                config.channels(),
                output.display()
            );
        }
        Command::Info { input } => {
            let header = file::read_wave_header(&input)
                .with_context(|| format!("Failed to read header of {}", input.display()))?;

            println!("RIFF size: {}", header.riff_size);
            println!("fmt chunk size: {}", header.fmt_chunk_size);
            println!("Audio format: {}", header.audio_format);
            println!("Channels: {}", header.channels);
            println!("Sample rate: {} Hz", header.sample_rate);
            println!("Byte rate: {}", header.byte_rate);
            println!("Block align: {}", header.block_align);
            println!("Bits per sample: {}", header.bits_per_sample);
            println!("Data size: {}", header.data_size);
            println!("Duration: {:.3}s", header.duration());
        }
        Command::InitConfig { output } => {
            Config::create_default_config(&output)?;
            println!("Wrote default config to {}", output.display());
        }
    }

    Ok(())
}
