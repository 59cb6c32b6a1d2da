//! Output backends for a dump session.
//!
//! The header of a WAVE container depends on sizes known only after all
//! sample data has been written, so the two backends differ in how they
//! patch it in afterwards: [`FileSink`] seeks back over a real file, while
//! [`StreamSink`] holds the entire container in memory and only flushes to
//! its (possibly non-seekable) destination once the header is final.

use std::fs::File;
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;

use super::buffer::GrowBuf;
use crate::error::DumpError;

/// Flush block size for buffered sinks: 32768 sample frames of 16-bit
/// stereo. The destination may buffer internally, so the dump is handed
/// over in bounded pieces rather than one oversized write.
pub const FLUSH_BLOCK: usize = 32768 * 2 * 2;

/// Strategy interface over the two output modes.
///
/// The session drives this backend-agnostically: bytes go in through
/// [`write`](DumpSink::write), the running position comes back through
/// [`len`](DumpSink::len), and [`finalize`](DumpSink::finalize) patches the
/// header placeholder at offset 0 and flushes everything out.
pub trait DumpSink {
    /// Append raw bytes at the current end of the output.
    fn write(&mut self, buf: &[u8]) -> Result<(), DumpError>;

    /// Total bytes written so far; at finalize time this is the file size.
    fn len(&self) -> u64;

    /// Overwrite the placeholder at offset 0 with `header`, then flush.
    fn finalize(&mut self, header: &[u8]) -> Result<(), DumpError>;
}

/// Direct-to-file backend for seekable destinations.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    written: u64,
}

impl FileSink {
    pub fn create(path: &Path) -> Result<Self, DumpError> {
        let file = File::create(path).map_err(|source| DumpError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { file, written: 0 })
    }
}

impl DumpSink for FileSink {
    fn write(&mut self, buf: &[u8]) -> Result<(), DumpError> {
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(())
    }

    fn len(&self) -> u64 {
        self.written
    }

    fn finalize(&mut self, header: &[u8]) -> Result<(), DumpError> {
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(header)?;
        self.file.flush()?;
        Ok(())
    }
}

/// Fully buffered backend for non-seekable destinations (stdout).
///
/// Everything, header placeholder included, accumulates in a [`GrowBuf`];
/// nothing reaches the destination until `finalize`.
pub struct StreamSink<W: Write> {
    buf: GrowBuf,
    out: W,
}

impl StreamSink<io::Stdout> {
    pub fn stdout() -> Result<Self, DumpError> {
        Self::new(io::stdout())
    }
}

impl<W: Write> StreamSink<W> {
    pub fn new(out: W) -> Result<Self, DumpError> {
        Ok(Self {
            buf: GrowBuf::new()?,
            out,
        })
    }
}

impl<W: Write> DumpSink for StreamSink<W> {
    fn write(&mut self, buf: &[u8]) -> Result<(), DumpError> {
        self.buf.append(buf)
    }

    fn len(&self) -> u64 {
        self.buf.len() as u64
    }

    fn finalize(&mut self, header: &[u8]) -> Result<(), DumpError> {
        self.buf.patch(0, header);

        // floor(L/B) full blocks, then the L mod B tail. A short write
        // aborts the flush; the remainder is abandoned.
        for block in self.buf.as_slice().chunks(FLUSH_BLOCK) {
            let written = self.out.write(block)?;
            if written != block.len() {
                return Err(DumpError::ShortWrite {
                    written,
                    expected: block.len(),
                });
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
