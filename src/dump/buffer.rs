//! Growable byte store backing the non-seekable sink.

use crate::error::DumpError;

/// Initial allocation for a buffered dump, enough for several minutes of
/// 16-bit stereo audio before the first regrow.
pub const INITIAL_CAPACITY: usize = 8 * 1024 * 1024;

/// Factor applied to capacity when an append would overflow it.
const GROWTH_NUM: usize = 3;
const GROWTH_DEN: usize = 2;

/// Exclusively-owned, dynamically grown byte buffer.
///
/// Allocation failures surface as [`DumpError::Allocation`] instead of
/// aborting the process, so embedders can recover.
pub struct GrowBuf {
    bytes: Vec<u8>,
}

impl GrowBuf {
    /// Allocate an empty buffer with [`INITIAL_CAPACITY`] reserved.
    pub fn new() -> Result<Self, DumpError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(INITIAL_CAPACITY)
            .map_err(|_| DumpError::Allocation {
                requested: INITIAL_CAPACITY,
            })?;
        Ok(Self { bytes })
    }

    /// Append `src`, growing capacity geometrically (x1.5) as needed.
    pub fn append(&mut self, src: &[u8]) -> Result<(), DumpError> {
        let needed = self.bytes.len() + src.len();
        if needed > self.bytes.capacity() {
            let mut target = self.bytes.capacity().max(1);
            while target < needed {
                target = target * GROWTH_NUM / GROWTH_DEN;
            }
            self.bytes
                .try_reserve_exact(target - self.bytes.len())
                .map_err(|_| DumpError::Allocation { requested: target })?;
        }
        self.bytes.extend_from_slice(src);
        Ok(())
    }

    /// Overwrite `src.len()` bytes at `offset`. The range must already be
    /// within the buffer; used to patch the header placeholder.
    pub fn patch(&mut self, offset: usize, src: &[u8]) {
        self.bytes[offset..offset + src.len()].copy_from_slice(src);
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}
