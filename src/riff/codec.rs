//! Little-endian RIFF/WAVE chunk encoders.
//!
//! Pure byte-layout functions: no I/O, no allocation beyond the returned
//! buffer. Chunk `size` fields never include the 8-byte chunk header or any
//! trailing alignment padding; the outer RIFF size excludes its own 8 bytes.
//! All multi-byte fields are little-endian regardless of host byte order.

/// PCM format tag in the `fmt ` chunk.
pub const WAVE_FORMAT_PCM: u16 = 1;

/// Encoded length of the `fmt ` chunk payload (PCM, no extension).
pub const FMT_PAYLOAD_LEN: u32 = 16;

/// Encoded length of the full WAVE header: RIFF header + "WAVE" + fmt chunk
/// + data chunk header.
pub const WAVE_HEADER_LEN: usize = 8 + 4 + 8 + FMT_PAYLOAD_LEN as usize + 8;

/// Encoded length of one cue point record.
pub const CUE_POINT_LEN: u32 = 24;

/// Encoded length of the complete `cue ` chunk (header + count + one point).
pub const CUE_CHUNK_LEN: usize = 8 + 4 + CUE_POINT_LEN as usize;

/// Identifier shared by the single cue point and its label sub-chunk.
pub const LOOP_POINT_ID: u32 = 0;

/// Label text attached to the loop point, for editors that read adtl labels.
pub const LOOP_LABEL: &str = "Loop point";

/// Encode an 8-byte chunk header: 4-byte tag followed by the payload size.
pub fn chunk_header(tag: [u8; 4], payload_size: u32) -> [u8; 8] {
    let mut out = [0u8; 8];
    out[..4].copy_from_slice(&tag);
    out[4..].copy_from_slice(&payload_size.to_le_bytes());
    out
}

/// Encode the 44-byte WAVE header.
///
/// `data_size` is the number of sample bytes in the `data` chunk (excluding
/// any pad byte); `file_size` is the total container size including this
/// header. Block alignment and average byte rate are derived from the other
/// format fields.
///
/// # Panics
///
/// Panics if the derived block alignment does not fit the 16-bit fmt field.
pub fn wave_header(
    data_size: u32,
    file_size: u32,
    sample_rate: u32,
    bits_per_sample: u16,
    channels: u16,
) -> Vec<u8> {
    let block_align = u32::from(channels) * u32::from(bits_per_sample) / 8;
    assert!(
        block_align <= u32::from(u16::MAX),
        "block alignment {block_align} does not fit the 16-bit fmt field"
    );
    let avg_bytes_per_sec = sample_rate * block_align;

    let mut out = Vec::with_capacity(WAVE_HEADER_LEN);
    out.extend_from_slice(&chunk_header(*b"RIFF", file_size - 8));
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(&chunk_header(*b"fmt ", FMT_PAYLOAD_LEN));
    out.extend_from_slice(&WAVE_FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&avg_bytes_per_sec.to_le_bytes());
    out.extend_from_slice(&(block_align as u16).to_le_bytes());
    out.extend_from_slice(&bits_per_sample.to_le_bytes());
    out.extend_from_slice(&chunk_header(*b"data", data_size));
    out
}

/// Encode a `cue ` chunk holding exactly one cue point at `loop_sample`.
///
/// The point's identifier is [`LOOP_POINT_ID`], its owning chunk is `data`,
/// and both the play-order position and the sample offset carry the loop
/// sample. Chunk start and block start are zero.
pub fn cue_chunk(loop_sample: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(CUE_CHUNK_LEN);
    out.extend_from_slice(&chunk_header(*b"cue ", 4 + CUE_POINT_LEN));
    out.extend_from_slice(&1u32.to_le_bytes()); // point count
    out.extend_from_slice(&LOOP_POINT_ID.to_le_bytes());
    out.extend_from_slice(&loop_sample.to_le_bytes()); // play order position
    out.extend_from_slice(b"data");
    out.extend_from_slice(&0u32.to_le_bytes()); // chunk start
    out.extend_from_slice(&0u32.to_le_bytes()); // block start
    out.extend_from_slice(&loop_sample.to_le_bytes());
    out
}

/// Encode a `LIST/adtl/labl` chunk naming the cue point `point_id`.
///
/// The `labl` payload is the point id plus the NUL-terminated label; the
/// outer `LIST` size covers the `adtl` tag, the nested `labl` header, and
/// the `labl` payload.
pub fn label_chunk(point_id: u32, label: &str) -> Vec<u8> {
    let labl_size = 4 + label.len() as u32 + 1;
    let list_size = 4 + 8 + labl_size;

    let mut out = Vec::with_capacity(8 + list_size as usize);
    out.extend_from_slice(&chunk_header(*b"LIST", list_size));
    out.extend_from_slice(b"adtl");
    out.extend_from_slice(&chunk_header(*b"labl", labl_size));
    out.extend_from_slice(&point_id.to_le_bytes());
    out.extend_from_slice(label.as_bytes());
    out.push(0);
    out
}
