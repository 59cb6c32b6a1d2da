//! Read-side chunk walking, used by `inspect` and by tests to verify that
//! produced containers decode back to what was written.

use anyhow::{anyhow, Result};

use super::codec::WAVE_FORMAT_PCM;

/// One top-level chunk inside the RIFF container.
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    pub tag: [u8; 4],
    /// Payload bytes, excluding the 8-byte header and any pad byte.
    pub payload: &'a [u8],
}

/// Decoded `fmt ` chunk payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub channels: u16,
    pub sample_rate: u32,
    pub avg_bytes_per_sec: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

fn le32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn le16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

/// Validate the RIFF/WAVE preamble and return the top-level chunks.
///
/// Chunks are padded to even lengths at the container level; the pad byte is
/// skipped and not part of any returned payload.
pub fn wave_chunks(bytes: &[u8]) -> Result<Vec<Chunk<'_>>> {
    if bytes.len() < 12 {
        return Err(anyhow!("File too short to be a RIFF container"));
    }
    if &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(anyhow!("Not a RIFF/WAVE file"));
    }

    let riff_size = le32(bytes, 4) as usize;
    if riff_size + 8 > bytes.len() {
        return Err(anyhow!(
            "RIFF size {} exceeds file length {}",
            riff_size + 8,
            bytes.len()
        ));
    }

    let mut chunks = Vec::new();
    let mut pos = 12;
    while pos + 8 <= bytes.len() {
        let mut tag = [0u8; 4];
        tag.copy_from_slice(&bytes[pos..pos + 4]);
        let size = le32(bytes, pos + 4) as usize;

        let payload_start = pos + 8;
        let payload_end = payload_start + size;
        if payload_end > bytes.len() {
            return Err(anyhow!(
                "Chunk '{}' extends beyond end of file",
                String::from_utf8_lossy(&tag)
            ));
        }

        chunks.push(Chunk {
            tag,
            payload: &bytes[payload_start..payload_end],
        });

        pos = payload_end;
        // Word alignment: odd payloads carry one pad byte not counted in size
        if size % 2 == 1 {
            pos += 1;
        }
    }

    Ok(chunks)
}

/// Decode a 16-byte PCM `fmt ` payload.
pub fn parse_fmt(payload: &[u8]) -> Result<PcmFormat> {
    if payload.len() < 16 {
        return Err(anyhow!(
            "fmt chunk too short: expected 16 bytes, got {}",
            payload.len()
        ));
    }
    let format_tag = le16(payload, 0);
    if format_tag != WAVE_FORMAT_PCM {
        return Err(anyhow!("Unsupported format tag: {}", format_tag));
    }
    Ok(PcmFormat {
        channels: le16(payload, 2),
        sample_rate: le32(payload, 4),
        avg_bytes_per_sec: le32(payload, 8),
        block_align: le16(payload, 12),
        bits_per_sample: le16(payload, 14),
    })
}

/// Decode a `cue ` payload, returning `(point_id, sample_offset)` for the
/// single cue point this crate emits.
pub fn parse_cue(payload: &[u8]) -> Result<(u32, u32)> {
    if payload.len() < 4 {
        return Err(anyhow!("cue chunk too short"));
    }
    let count = le32(payload, 0);
    if count != 1 {
        return Err(anyhow!("Expected exactly one cue point, found {}", count));
    }
    if payload.len() < 4 + 24 {
        return Err(anyhow!("cue chunk truncated: missing point record"));
    }
    let point_id = le32(payload, 4);
    let sample_offset = le32(payload, 24);
    Ok((point_id, sample_offset))
}

/// Decode a `LIST/adtl/labl` payload, returning `(point_id, label)`.
pub fn parse_label(payload: &[u8]) -> Result<(u32, String)> {
    if payload.len() < 4 + 8 + 4 {
        return Err(anyhow!("LIST chunk too short"));
    }
    if &payload[0..4] != b"adtl" {
        return Err(anyhow!("LIST chunk is not an adtl list"));
    }
    if &payload[4..8] != b"labl" {
        return Err(anyhow!("adtl list does not start with a labl sub-chunk"));
    }
    let labl_size = le32(payload, 8) as usize;
    if labl_size < 4 || 12 + labl_size > payload.len() {
        return Err(anyhow!("labl sub-chunk truncated"));
    }
    let point_id = le32(payload, 12);
    let text = &payload[16..12 + labl_size];
    // Drop the NUL terminator
    let text = text.strip_suffix(&[0]).unwrap_or(text);
    Ok((point_id, String::from_utf8_lossy(text).into_owned()))
}
