//! ByteBuffer: growable owner of a file's bytes.
//!
//! Growth is explicit: when an append finds `len == capacity` the capacity is
//! doubled (or set to the configured default when empty) and the backing
//! storage is reallocated with `try_reserve_exact`, so running out of memory
//! surfaces as an `AllocError` instead of an abort. Views into the buffer are
//! only handed out through `&self`, so the borrow checker rules out a grow
//! while any view is alive.

use crate::config::BufferConfig;
use crate::error::{AllocError, AllocStage, Error, Result};
use crate::view::StrView;
use crate::words::Words;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

const READ_CHUNK: usize = 8 * 1024;

#[derive(Debug, Default)]
pub struct ByteBuffer {
    data: Vec<u8>,
    capacity: usize,
    config: BufferConfig,
}

impl ByteBuffer {
    pub fn new() -> Self {
        Self::with_config(BufferConfig::default())
    }

    /// Empty buffer; nothing is allocated until the first `push`.
    pub fn with_config(config: BufferConfig) -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            config,
        }
    }

    /// Read the whole file at `path` into a fresh buffer.
    pub fn from_path(path: impl AsRef<Path>, config: BufferConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut buf = Self::with_config(config);
        let n = buf.extend_from_reader(file, path)?;
        tracing::debug!(path = %path.display(), bytes = n, capacity = buf.capacity(), "file loaded");
        Ok(buf)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes currently allocated. Always 0 or a doubling of the default.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// View over `len` bytes starting at `start`, or `None` if out of range.
    pub fn view(&self, start: usize, len: usize) -> Option<StrView<'_>> {
        let end = start.checked_add(len)?;
        self.data.get(start..end).map(StrView::new)
    }

    /// Whitespace-delimited words of the buffer contents.
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.data)
    }

    /// Append one byte, growing the storage first if it is full.
    pub fn push(&mut self, byte: u8) -> Result<(), AllocError> {
        if self.data.len() == self.capacity {
            self.grow()?;
        }
        self.data.push(byte);
        Ok(())
    }

    /// Append every byte `reader` yields until EOF. Returns the number of
    /// bytes appended. `origin` names the source in read errors.
    pub fn extend_from_reader<R: Read>(&mut self, mut reader: R, origin: &Path) -> Result<usize> {
        let mut chunk = [0u8; READ_CHUNK];
        let mut total = 0;
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => return Ok(total),
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::Io {
                        path: origin.to_path_buf(),
                        source,
                    })
                }
            };
            for &b in &chunk[..n] {
                self.push(b)?;
            }
            total += n;
        }
    }

    fn grow(&mut self) -> Result<(), AllocError> {
        let requested = if self.capacity == 0 {
            self.config.initial_capacity.max(1)
        } else {
            self.capacity.checked_mul(2).ok_or(AllocError {
                stage: AllocStage::BufferGrow,
                requested: usize::MAX,
            })?
        };
        self.data
            .try_reserve_exact(requested - self.data.len())
            .map_err(|_| AllocError {
                stage: AllocStage::BufferGrow,
                requested,
            })?;
        tracing::trace!(from = self.capacity, to = requested, "buffer grown");
        self.capacity = requested;
        Ok(())
    }
}
