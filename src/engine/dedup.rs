//! Duplicate row suppression
//!
//! The same course can appear in the catalog more than once under slightly
//! different listings. Rows are deduplicated on the composite key
//! (title, university); since the input arrives score-descending, keeping
//! the first occurrence keeps the best-scoring listing.

use crate::results::ResultRow;
use ahash::AHashSet;

/// Drop rows whose (title, university) key was already seen
pub fn dedup_rows(rows: Vec<ResultRow>) -> Vec<ResultRow> {
    let mut seen: AHashSet<(String, String)> = AHashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|row| seen.insert((row.title.clone(), row.university.clone())))
        .collect()
}
