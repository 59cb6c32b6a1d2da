pub mod codec;
pub mod parse;

pub use codec::{
    chunk_header, cue_chunk, label_chunk, wave_header, CUE_CHUNK_LEN, LOOP_LABEL, LOOP_POINT_ID,
    WAVE_HEADER_LEN,
};
pub use parse::{parse_cue, parse_fmt, parse_label, wave_chunks, Chunk, PcmFormat};
