use memchr::{memchr, memrchr};
use std::fs;
use std::io;
use std::path::Path;

/// An immutable byte sequence read fully into memory.
///
/// Target files are small (schema/config text), so a whole-file read is fine;
/// the file handle is released before any inspection logic runs.
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let data = fs::read(path)?;
        Ok(ByteBuffer { data })
    }

    pub fn from_bytes(data: Vec<u8>) -> Self {
        ByteBuffer { data }
    }

    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn byte_at(&self, offset: u64) -> Option<u8> {
        self.data.get(offset as usize).copied()
    }

    /// Symmetric window of `window` bytes on each side of `target`, clamped
    /// to the buffer. Returns `(start, end)` with `end` exclusive.
    pub fn window_bounds(&self, target: u64, window: u64) -> (u64, u64) {
        let start = target.saturating_sub(window);
        let end = target
            .saturating_add(window)
            .saturating_add(1)
            .min(self.len());
        (start, end)
    }

    /// Bounds of the line of text containing `offset`.
    ///
    /// `start` is one past the nearest newline strictly before `offset`
    /// (0 if there is none); `end` is the offset of the nearest newline at or
    /// after `offset` (buffer length if there is none). Neither newline is
    /// included in the range. If the byte at `offset` is itself a newline,
    /// the range is the line that newline terminates.
    pub fn line_bounds(&self, offset: u64) -> (u64, u64) {
        let off = offset as usize;
        let start = match memrchr(b'\n', &self.data[..off.min(self.data.len())]) {
            Some(i) => (i + 1) as u64,
            None => 0,
        };
        let end = if off < self.data.len() {
            match memchr(b'\n', &self.data[off..]) {
                Some(i) => (off + i) as u64,
                None => self.len(),
            }
        } else {
            self.len()
        };
        (start, end)
    }

    pub fn slice(&self, start: u64, end: u64) -> &[u8] {
        &self.data[start as usize..end as usize]
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        ByteBuffer::from_bytes(data)
    }
}
