//! Result set assembly, dual-mode sorting, and batched delivery
//!
//! A `ResultSet` is per-query, mutable session state: the fixed top-K rows
//! the engine assembled, the active sort mode, and the delivery cursor.
//! Sorting never changes membership, only order; switching mode resets the
//! cursor so the caller re-renders from scratch.

use crate::ranking::SENTINEL_RANK;
use serde::Serialize;
use std::cmp::Ordering;

/// User-selectable ordering of the fixed top-K set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Similarity score descending (the default)
    ByCompatibility,
    /// Fused university rank ascending; sentinel-ranked rows last
    ByBestUniversities,
}

/// One externally visible recommendation row
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    /// Similarity score in [0, 1]
    pub score: f32,
    pub title: String,
    pub university: String,
    pub duration: String,
    pub qualification: String,
    pub study_mode: String,
    pub tariff_points: Option<f32>,
    pub url: String,
    pub explanation: String,
    /// Fused rank; `SENTINEL_RANK` when the university is unranked
    pub rank: u32,
    /// Display label: the rank, or ">MAX"/"unranked" for the sentinel
    pub rank_label: String,
}

impl ResultRow {
    pub fn is_ranked(&self) -> bool {
        self.rank != SENTINEL_RANK
    }
}

/// Ordered result rows with a sort mode tag and delivery cursor
pub struct ResultSet {
    rows: Vec<ResultRow>,
    mode: SortMode,
    cursor: usize,
    batch_size: usize,
}

impl ResultSet {
    /// Wrap assembled rows; applies the default compatibility sort
    pub fn new(rows: Vec<ResultRow>, batch_size: usize) -> Self {
        let mut set = Self {
            rows,
            mode: SortMode::ByCompatibility,
            cursor: 0,
            batch_size: batch_size.max(1),
        };
        sort_rows(&mut set.rows, set.mode);
        set
    }

    /// Re-sort the same rows under `mode`
    ///
    /// Only reorders the existing set; the cursor resets to 0 and any rows
    /// already delivered must be re-rendered by the caller.
    pub fn sort_by(&mut self, mode: SortMode) {
        self.mode = mode;
        sort_rows(&mut self.rows, mode);
        self.cursor = 0;
    }

    /// Next batch of rows under the active order
    ///
    /// Returns up to `batch_size` rows starting at the cursor and advances
    /// the cursor by the number actually returned; empty when exhausted.
    pub fn next_batch(&mut self) -> &[ResultRow] {
        let start = self.cursor;
        let end = (start + self.batch_size).min(self.rows.len());
        self.cursor = end;
        &self.rows[start..end]
    }

    /// True once every row has been delivered since the last sort/reset
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.rows.len()
    }

    /// Rows delivered so far under the active order
    pub fn delivered(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> SortMode {
        self.mode
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn sort_rows(rows: &mut [ResultRow], mode: SortMode) {
    match mode {
        SortMode::ByCompatibility => rows.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.rank.cmp(&b.rank))
        }),
        SortMode::ByBestUniversities => rows.sort_by(|a, b| {
            a.rank
                .cmp(&b.rank)
                .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
        }),
    }
}
