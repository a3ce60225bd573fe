//! wordtable: load a text file, split it into words and deduplicate them in
//! an open-addressing hash table of borrowed byte views.
//!
//! Internal Design:
//!
//! Layers
//! - `fnv`: FNV-1a (32 and 64 bit) and XOR folding. Pure functions.
//! - `view::StrView<'a>`: a `&'a [u8]` window. It never owns or copies, and
//!   its lifetime ties it to whatever owns the bytes.
//! - `byte_buffer::ByteBuffer`: sole owner of the file contents; grows by
//!   doubling with fallible reallocation.
//! - `words::Words`: splits a byte slice on space, tab and newline.
//! - `word_table::WordTable<'a, V>`: fixed slot array, linear probing,
//!   FNV-1a 32 bucket index, explicit expansion.
//! - `ingest`: drives words into the table with value = word length.
//!
//! Ownership
//! - The buffer is filled completely before any view is taken. Views borrow
//!   it through `&self`, so it cannot grow or be dropped while the table
//!   holds keys into it. The compiler enforces buffer-outlives-table.
//!
//! Table invariants
//! - `len() <= capacity()`; every stored key is non-empty and unique.
//! - First insertion wins: a duplicate key leaves the stored value as is.
//! - `insert` never grows. `insert_growing` expands before placing a new key
//!   whenever `(len + 1) / capacity` would exceed the load factor.
//! - `expand` rehashes into `capacity * scale_factor` slots, neither dropping
//!   nor duplicating entries; the table never shrinks.
//! - No deletion, hence no tombstones: an empty slot ends every probe.
//!
//! Failure model
//! - Allocation of buffer growth, table slots or expansion is fallible and
//!   reported as `AllocError` naming the stage. The structure that asked for
//!   memory is left unchanged.
//! - Inserting an absent key into a full table panics; it is a caller bug.
//!
//! Single-threaded; nothing here synchronizes.

pub mod byte_buffer;
pub mod config;
pub mod error;
pub mod fnv;
pub mod ingest;
pub mod view;
pub mod word_table;
mod word_table_proptest;
pub mod words;

// Public surface
pub use byte_buffer::ByteBuffer;
pub use config::{BufferConfig, TableConfig};
pub use error::{AllocError, AllocStage, ConfigError, Error, Result};
pub use fnv::{fnv1a_32, fnv1a_64, xor_fold};
pub use ingest::{ingest, lookup_report, IngestStats};
pub use view::StrView;
pub use word_table::{InsertOutcome, WordTable};
pub use words::Words;
