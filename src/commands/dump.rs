use crate::dump::{Destination, DumpSession};
use crate::progress::Progress;
use crate::verbosity::Verbosity;
use anyhow::{anyhow, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Read granularity for the input loop. Sample data is opaque bytes here;
/// the chunk size only bounds memory per read.
const READ_CHUNK: usize = 64 * 1024;

#[derive(Args)]
pub struct DumpArgs {
    /// Raw PCM input file, or `-` for stdin
    pub input: String,

    /// Output WAV file, or `-` for stdout (`.wav` is appended to plain paths)
    #[arg(short, long)]
    pub output: String,

    /// Sample rate in Hz
    #[arg(long, default_value = "44100")]
    pub sample_rate: u32,

    /// Bits per sample (8, 16, 24 or 32)
    #[arg(long, default_value = "16")]
    pub bits: u16,

    /// Channel count
    #[arg(long, default_value = "2")]
    pub channels: u16,

    /// Loop start in sample frames; emits cue and label chunks
    #[arg(long)]
    pub loop_sample: Option<u32>,
}

pub fn run(args: DumpArgs, verbosity: Verbosity) -> Result<()> {
    if !matches!(args.bits, 8 | 16 | 24 | 32) {
        return Err(anyhow!("Unsupported bits per sample: {}", args.bits));
    }
    if args.channels == 0 {
        return Err(anyhow!("Channel count must be at least 1"));
    }
    let block_align = u32::from(args.channels) * u32::from(args.bits) / 8;
    if block_align > u32::from(u16::MAX) {
        return Err(anyhow!(
            "{} channels at {}-bit gives block alignment {}, which does not fit the fmt chunk",
            args.channels,
            args.bits,
            block_align
        ));
    }

    let dest = Destination::parse(&args.output);
    // Progress goes to stderr, but stay silent when samples go to stdout so
    // piped players see clean terminal output.
    let verbosity = if dest == Destination::Stdout {
        Verbosity::Quiet
    } else {
        verbosity
    };

    let mut session = DumpSession::create(&dest)?;
    if let Some(sample) = args.loop_sample {
        session.set_loop(sample);
    }

    let (mut reader, progress): (Box<dyn Read>, Progress) = if args.input == "-" {
        (
            Box::new(io::stdin().lock()),
            Progress::spinner("Reading samples from stdin...", verbosity),
        )
    } else {
        let path = PathBuf::from(&args.input);
        if !path.exists() {
            return Err(anyhow!("Input file does not exist: {}", path.display()));
        }
        let file = File::open(&path)?;
        let total = file.metadata()?.len();
        (Box::new(file), Progress::new(total, verbosity))
    };

    let mut chunk = vec![0u8; READ_CHUNK];
    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        session.append(&chunk[..n])?;
        progress.inc(n as u64);
    }
    progress.finish_and_clear();

    let data_size = session.data_size();
    session.finish(args.sample_rate, args.bits, args.channels)?;

    if verbosity.show_status() {
        eprintln!(
            "Wrote {} bytes of sample data ({} Hz, {}-bit, {} channel{})",
            data_size,
            args.sample_rate,
            args.bits,
            args.channels,
            if args.channels == 1 { "" } else { "s" }
        );
        if let Some(sample) = args.loop_sample {
            eprintln!("Loop point at sample {sample}");
        }
    }

    Ok(())
}
