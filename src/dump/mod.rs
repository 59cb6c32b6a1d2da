//! Stateful dump session: open, append sample bytes, optionally mark a loop
//! point, finish.
//!
//! The session is backend-agnostic; the two output modes live behind
//! [`DumpSink`]. A `DumpSession` is single-owner, single-threaded state and
//! is not safe to share across threads without external synchronization.

pub mod buffer;
pub mod sink;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::DumpError;
use crate::riff::codec::{
    cue_chunk, label_chunk, wave_header, LOOP_LABEL, LOOP_POINT_ID, WAVE_HEADER_LEN,
};
use sink::{DumpSink, FileSink, StreamSink};

/// Where a dump goes. `-` is the conventional stdout token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Buffered backend writing to standard output.
    Stdout,
    /// Direct-to-file backend.
    Path(PathBuf),
}

impl Destination {
    /// Parse a raw destination argument. Plain paths with no extension get
    /// the canonical `.wav` extension appended.
    pub fn parse(raw: &str) -> Self {
        if raw == "-" {
            return Self::Stdout;
        }
        let mut path = PathBuf::from(raw);
        if path.extension().is_none() {
            path.set_extension("wav");
        }
        Self::Path(path)
    }
}

/// Incremental WAVE writer.
///
/// Lifecycle: one of the constructors opens the session and writes a zeroed
/// header placeholder; [`append`](Self::append) and
/// [`set_loop`](Self::set_loop) mutate it; [`finish`](Self::finish) consumes
/// it, so calling anything after finish is a compile error rather than a
/// silent no-op.
pub struct DumpSession {
    sink: Box<dyn DumpSink>,
    data_size: u32,
    loop_sample: Option<u32>,
}

impl DumpSession {
    /// Open a session for the given destination.
    pub fn create(dest: &Destination) -> Result<Self, DumpError> {
        match dest {
            Destination::Stdout => Self::over(Box::new(StreamSink::stdout()?)),
            Destination::Path(path) => Self::file(path),
        }
    }

    /// Open a direct-to-file session. The path is used as given; extension
    /// handling happens in [`Destination::parse`].
    pub fn file(path: &Path) -> Result<Self, DumpError> {
        Self::over(Box::new(FileSink::create(path)?))
    }

    /// Open a fully buffered session flushing to `out` at finish time.
    pub fn buffered<W: Write + 'static>(out: W) -> Result<Self, DumpError> {
        Self::over(Box::new(StreamSink::new(out)?))
    }

    fn over(mut sink: Box<dyn DumpSink>) -> Result<Self, DumpError> {
        // Header placeholder; the real header is patched in at finish, once
        // the data and file sizes are known.
        sink.write(&[0u8; WAVE_HEADER_LEN])?;
        Ok(Self {
            sink,
            data_size: 0,
            loop_sample: None,
        })
    }

    /// Record the loop start in sample frames. At most one loop point is
    /// supported; a second call overwrites the first.
    pub fn set_loop(&mut self, sample_offset: u32) {
        self.loop_sample = Some(sample_offset);
    }

    /// Append raw sample bytes verbatim.
    ///
    /// Bytes must already be in the container's wire format: little-endian
    /// PCM. No conversion is performed here, so on a big-endian host the
    /// caller is responsible for byte-swapping samples first.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), DumpError> {
        self.sink.write(bytes)?;
        self.data_size += bytes.len() as u32;
        Ok(())
    }

    /// Sample bytes appended so far (excludes header and any pad byte).
    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    pub fn loop_sample(&self) -> Option<u32> {
        self.loop_sample
    }

    /// Write trailing chunks, patch the final header in, and flush.
    pub fn finish(
        mut self,
        sample_rate: u32,
        bits_per_sample: u16,
        channels: u16,
    ) -> Result<(), DumpError> {
        // RIFF chunks must end on an even boundary; the pad byte is not
        // counted in the data chunk size.
        if self.data_size % 2 == 1 {
            self.sink.write(&[0u8])?;
        }

        if let Some(sample) = self.loop_sample {
            self.sink.write(&cue_chunk(sample))?;
            self.sink.write(&label_chunk(LOOP_POINT_ID, LOOP_LABEL))?;
        }

        let file_size = self.sink.len() as u32;
        let header = wave_header(
            self.data_size,
            file_size,
            sample_rate,
            bits_per_sample,
            channels,
        );
        self.sink.finalize(&header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riff::parse::{parse_cue, parse_fmt, parse_label, wave_chunks};
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedOut(Rc<RefCell<Vec<u8>>>);

    impl io::Write for SharedOut {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn dump_to_vec(data: &[u8], loop_sample: Option<u32>) -> Vec<u8> {
        let out = SharedOut::default();
        let mut session = DumpSession::buffered(out.clone()).unwrap();
        session.append(data).unwrap();
        if let Some(sample) = loop_sample {
            session.set_loop(sample);
        }
        session.finish(44100, 16, 2).unwrap();
        let bytes = out.0.borrow().clone();
        bytes
    }

    #[test]
    fn test_destination_parse() {
        assert_eq!(Destination::parse("-"), Destination::Stdout);
        assert_eq!(
            Destination::parse("song"),
            Destination::Path(PathBuf::from("song.wav"))
        );
        assert_eq!(
            Destination::parse("song.raw"),
            Destination::Path(PathBuf::from("song.raw"))
        );
    }

    #[test]
    fn test_riff_size_accounts_for_whole_file() {
        let wav = dump_to_vec(&[0u8; 256], None);
        assert_eq!(wav.len(), WAVE_HEADER_LEN + 256);
        let riff_size = u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]);
        assert_eq!(riff_size as usize, wav.len() - 8);
    }

    #[test]
    fn test_data_size_matches_appended_bytes() {
        let wav = dump_to_vec(&[1, 2, 3, 4, 5, 6], None);
        let chunks = wave_chunks(&wav).unwrap();
        assert_eq!(&chunks[1].tag, b"data");
        assert_eq!(chunks[1].payload, &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_odd_data_padded_but_not_counted() {
        let wav = dump_to_vec(&[1, 2, 3], None);
        // one pad byte on the wire
        assert_eq!(wav.len(), WAVE_HEADER_LEN + 4);
        assert_eq!(wav[WAVE_HEADER_LEN + 3], 0);
        // but the declared data size stays odd
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size, 3);
        let riff_size = u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]);
        assert_eq!(riff_size as usize, wav.len() - 8);
    }

    #[test]
    fn test_loop_point_emits_cue_then_label() {
        let wav = dump_to_vec(&[0u8; 16], Some(12345));
        let chunks = wave_chunks(&wav).unwrap();
        assert_eq!(chunks.len(), 4);
        assert_eq!(&chunks[2].tag, b"cue ");
        assert_eq!(&chunks[3].tag, b"LIST");

        let (id, offset) = parse_cue(chunks[2].payload).unwrap();
        assert_eq!(id, LOOP_POINT_ID);
        assert_eq!(offset, 12345);

        let (id, text) = parse_label(chunks[3].payload).unwrap();
        assert_eq!(id, LOOP_POINT_ID);
        assert_eq!(text, LOOP_LABEL);
    }

    #[test]
    fn test_no_loop_means_no_metadata_chunks() {
        let wav = dump_to_vec(&[0u8; 16], None);
        let chunks = wave_chunks(&wav).unwrap();
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_loop_sample_zero_is_a_valid_loop() {
        // Unlike the historical "0 means unset" encoding, sample 0 loops.
        let wav = dump_to_vec(&[0u8; 16], Some(0));
        let chunks = wave_chunks(&wav).unwrap();
        assert_eq!(chunks.len(), 4);
        let (_, offset) = parse_cue(chunks[2].payload).unwrap();
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_second_set_loop_overwrites_first() {
        let out = SharedOut::default();
        let mut session = DumpSession::buffered(out.clone()).unwrap();
        session.append(&[0u8; 8]).unwrap();
        session.set_loop(10);
        session.set_loop(20);
        session.finish(8000, 16, 1).unwrap();

        let bytes = out.0.borrow().clone();
        let chunks = wave_chunks(&bytes).unwrap();
        assert_eq!(chunks.len(), 4);
        let (_, offset) = parse_cue(chunks[2].payload).unwrap();
        assert_eq!(offset, 20);
    }

    #[test]
    fn test_format_roundtrip() {
        let wav = dump_to_vec(&[0u8; 8], None);
        let chunks = wave_chunks(&wav).unwrap();
        let fmt = parse_fmt(chunks[0].payload).unwrap();
        assert_eq!(fmt.sample_rate, 44100);
        assert_eq!(fmt.bits_per_sample, 16);
        assert_eq!(fmt.channels, 2);
        assert_eq!(fmt.block_align, 4);
        assert_eq!(fmt.avg_bytes_per_sec, 44100 * 4);
    }

    #[test]
    fn test_output_is_deterministic() {
        let a = dump_to_vec(&[9u8; 100], Some(7));
        let b = dump_to_vec(&[9u8; 100], Some(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_append_passes_sample_bytes_through() {
        // Accepted limitation inherited from the reference behavior: sample
        // bytes are not byte-swapped for the host's endianness. The caller
        // must hand over little-endian PCM already.
        let native = [0x01u8, 0x02, 0x03, 0x04];
        let wav = dump_to_vec(&native, None);
        let chunks = wave_chunks(&wav).unwrap();
        assert_eq!(chunks[1].payload, &native);
    }

    #[test]
    fn test_file_backend_matches_buffered_backend() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let mut session = DumpSession::file(&path).unwrap();
        session.append(&[3u8; 11]).unwrap();
        session.set_loop(99);
        session.finish(22050, 8, 1).unwrap();
        let from_file = std::fs::read(&path).unwrap();

        let out = SharedOut::default();
        let mut session = DumpSession::buffered(out.clone()).unwrap();
        session.append(&[3u8; 11]).unwrap();
        session.set_loop(99);
        session.finish(22050, 8, 1).unwrap();
        let from_stream = out.0.borrow().clone();

        assert_eq!(from_file, from_stream);
    }
}
