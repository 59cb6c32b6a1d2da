use crate::riff::{parse_cue, parse_fmt, parse_label, wave_chunks};
use crate::verbosity::Verbosity;
use anyhow::{anyhow, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct InspectArgs {
    /// WAV file to inspect
    pub input: PathBuf,
}

pub fn run(args: InspectArgs, verbosity: Verbosity) -> Result<()> {
    if !args.input.exists() {
        return Err(anyhow!(
            "Input file does not exist: {}",
            args.input.display()
        ));
    }

    let bytes = fs::read(&args.input)?;
    let chunks = wave_chunks(&bytes)?;

    println!("RIFF/WAVE container");
    println!("===================");
    println!();
    println!("File size: {} bytes", bytes.len());

    for chunk in &chunks {
        let tag = String::from_utf8_lossy(&chunk.tag);
        match &chunk.tag {
            b"fmt " => {
                let fmt = parse_fmt(chunk.payload)?;
                println!();
                println!("fmt  ({} bytes)", chunk.payload.len());
                println!("  Format: PCM");
                println!("  Channels: {}", fmt.channels);
                println!("  Sample rate: {} Hz", fmt.sample_rate);
                println!("  Bits per sample: {}", fmt.bits_per_sample);
                if verbosity.is_verbose() {
                    println!("  Block align: {} bytes", fmt.block_align);
                    println!("  Byte rate: {} bytes/s", fmt.avg_bytes_per_sec);
                }
            }
            b"data" => {
                println!();
                println!("data ({} bytes)", chunk.payload.len());
                if chunk.payload.len() % 2 == 1 {
                    println!("  Padded to even length on the wire");
                }
            }
            b"cue " => {
                let (id, offset) = parse_cue(chunk.payload)?;
                println!();
                println!("cue  ({} bytes)", chunk.payload.len());
                println!("  Point {}: sample offset {}", id, offset);
            }
            b"LIST" => {
                let (id, label) = parse_label(chunk.payload)?;
                println!();
                println!("LIST/adtl ({} bytes)", chunk.payload.len());
                println!("  Label for point {}: \"{}\"", id, label);
            }
            _ => {
                println!();
                println!("{} ({} bytes)", tag, chunk.payload.len());
            }
        }
    }

    Ok(())
}
