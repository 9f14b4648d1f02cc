//! University rank table and rank fusion
//!
//! Maps university names (exact string match) to their league-table rank.
//! Universities absent from the table receive a sentinel rank that is
//! strictly larger than any real rank, so unranked rows always sort last
//! under rank-ascending order. A missing rank source is non-fatal: the
//! table is simply empty and every course becomes sentinel-ranked.

use ahash::AHashMap;
use std::path::Path;

/// Internal rank for universities with no table entry. Strictly larger than
/// any real rank; string forms like ">131" exist only at output formatting.
pub const SENTINEL_RANK: u32 = 999;

/// Read-only university-name → rank mapping
pub struct RankTable {
    ranks: AHashMap<String, u32>,
    max_rank: u32,
}

impl RankTable {
    /// Load the rank table from a Rank/University CSV
    ///
    /// Missing or unreadable files yield an empty table (with a warning),
    /// never an error. Cells that are not plain integers (e.g. ">131") are
    /// skipped, leaving those universities sentinel-ranked.
    pub fn load(path: &Path) -> Self {
        let mut reader = match csv::Reader::from_path(path) {
            Ok(reader) => reader,
            Err(e) => {
                tracing::warn!(
                    "Rank table unavailable ({}); all universities will be unranked",
                    e
                );
                return Self::empty();
            }
        };

        let (rank_idx, university_idx) = match reader.headers() {
            Ok(headers) => {
                let rank = headers.iter().position(|h| h.trim() == "Rank");
                let university = headers.iter().position(|h| h.trim() == "University");
                match (rank, university) {
                    (Some(r), Some(u)) => (r, u),
                    _ => {
                        tracing::warn!(
                            "Rank table at {} lacks Rank/University columns; ignoring it",
                            path.display()
                        );
                        return Self::empty();
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Failed to read rank table headers: {}", e);
                return Self::empty();
            }
        };

        let mut ranks = AHashMap::new();
        let mut max_rank = 0;
        for record in reader.records().flatten() {
            let university = record.get(university_idx).unwrap_or("").trim();
            let rank_cell = record.get(rank_idx).unwrap_or("").trim();
            let rank_cell = rank_cell.strip_prefix('=').unwrap_or(rank_cell);
            if university.is_empty() {
                continue;
            }
            if let Ok(rank) = rank_cell.parse::<u32>() {
                max_rank = max_rank.max(rank);
                ranks.entry(university.to_string()).or_insert(rank);
            }
        }

        tracing::info!("Loaded {} university ranks from {}", ranks.len(), path.display());
        Self { ranks, max_rank }
    }

    /// Empty table; every lookup yields the sentinel
    pub fn empty() -> Self {
        Self {
            ranks: AHashMap::new(),
            max_rank: 0,
        }
    }

    /// Build a table from (university, rank) pairs
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let mut ranks = AHashMap::new();
        let mut max_rank = 0;
        for (university, rank) in entries {
            max_rank = max_rank.max(rank);
            ranks.insert(university, rank);
        }
        Self { ranks, max_rank }
    }

    /// Fused rank for a university: its real rank, or the sentinel
    pub fn rank_of(&self, university: &str) -> u32 {
        self.ranks.get(university).copied().unwrap_or(SENTINEL_RANK)
    }

    /// Display label for a fused rank
    ///
    /// Real ranks render as-is; the sentinel renders as ">{max known rank}"
    /// or "unranked" when the table is empty.
    pub fn label(&self, rank: u32) -> String {
        if rank == SENTINEL_RANK {
            if self.max_rank > 0 {
                format!(">{}", self.max_rank)
            } else {
                "unranked".to_string()
            }
        } else {
            rank.to_string()
        }
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_lookup() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Rank,University").unwrap();
        writeln!(file, "1,University of Testshire").unwrap();
        writeln!(file, "=25,Testford University").unwrap();
        writeln!(file, ">131,Fringe College").unwrap();

        let table = RankTable::load(file.path());
        assert_eq!(table.len(), 2);
        assert_eq!(table.rank_of("University of Testshire"), 1);
        assert_eq!(table.rank_of("Testford University"), 25);
        assert_eq!(table.rank_of("Fringe College"), SENTINEL_RANK);
        assert_eq!(table.rank_of("Unknown University"), SENTINEL_RANK);
    }

    #[test]
    fn test_missing_file_yields_empty_table() {
        let table = RankTable::load(Path::new("/nonexistent/ranks.csv"));
        assert!(table.is_empty());
        assert_eq!(table.rank_of("Anywhere"), SENTINEL_RANK);
        assert_eq!(table.label(SENTINEL_RANK), "unranked");
    }

    #[test]
    fn test_sentinel_label_uses_max_known_rank() {
        let table = RankTable::from_entries(vec![
            ("A".to_string(), 3),
            ("B".to_string(), 131),
        ]);
        assert_eq!(table.label(3), "3");
        assert_eq!(table.label(SENTINEL_RANK), ">131");
    }
}
