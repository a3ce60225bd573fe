//! Error taxonomy: allocation, I/O and configuration failures.

use std::path::PathBuf;
use thiserror::Error;

/// Which allocation failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AllocStage {
    BufferGrow,
    TableAlloc,
    TableExpand,
}

impl core::fmt::Display for AllocStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            AllocStage::BufferGrow => "reallocation of the file buffer",
            AllocStage::TableAlloc => "allocation of the table",
            AllocStage::TableExpand => "allocation of new space during table rehashing",
        })
    }
}

/// An allocation request could not be satisfied. The structure that asked
/// for the memory is left as it was before the request.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{stage} failed ({requested} elements requested)")]
pub struct AllocError {
    pub stage: AllocStage,
    pub requested: usize,
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("initial table capacity must be nonzero")]
    ZeroTableCapacity,
    #[error("load factor must lie strictly between 0 and 1, got {0}")]
    LoadFactorOutOfRange(f64),
    #[error("scale factor must be at least 2, got {0}")]
    ScaleFactorTooSmall(usize),
    #[error("initial buffer capacity must be nonzero")]
    ZeroBufferCapacity,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Alloc(#[from] AllocError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
