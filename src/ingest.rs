//! Feed a stream of word views into a `WordTable`.

use crate::error::AllocError;
use crate::view::StrView;
use crate::word_table::{InsertOutcome, WordTable};

/// Tallies for one ingest run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub tokens: usize,
    pub inserted: usize,
    pub duplicates: usize,
    /// Insertions that landed past their home bucket.
    pub collisions: usize,
    pub expansions: usize,
}

/// Insert every word with its byte length as the value.
///
/// The table grows ahead of any insertion that would breach its load
/// factor. An allocation failure stops the run; entries inserted so far stay
/// in the table.
pub fn ingest<'a, I>(words: I, table: &mut WordTable<'a>) -> Result<IngestStats, AllocError>
where
    I: IntoIterator<Item = StrView<'a>>,
{
    let mut stats = IngestStats::default();
    for word in words {
        stats.tokens += 1;
        tracing::trace!(load_factor = table.load_factor(), "table load");

        let before = table.capacity();
        let outcome = table.insert_growing(word, word.len() as i64)?;
        if table.capacity() != before {
            stats.expansions += 1;
        }

        match outcome {
            InsertOutcome::Inserted {
                index,
                displacement,
            } => {
                stats.inserted += 1;
                if displacement > 0 {
                    stats.collisions += 1;
                    tracing::debug!(%word, index, displacement, "collision resolved by probing");
                } else {
                    tracing::trace!(%word, index, "inserted");
                }
            }
            InsertOutcome::Duplicate { index } => {
                stats.duplicates += 1;
                tracing::debug!(%word, index, "already in the table");
            }
        }
    }
    tracing::info!(
        tokens = stats.tokens,
        unique = table.len(),
        capacity = table.capacity(),
        expansions = stats.expansions,
        "ingest complete"
    );
    Ok(stats)
}

/// `key → value` when present, `key not found` otherwise.
pub fn lookup_report(table: &WordTable<'_>, key: StrView<'_>) -> String {
    match table.get(key) {
        Some(value) => format!("{key} → {value}"),
        None => format!("{key} not found"),
    }
}
