//! End-to-end recommendation pipeline test
//!
//! Loads a realistic catalog and rank table from disk, runs profile and
//! free-text queries through the full pipeline, and checks ordering,
//! filtering, deduplication, and pagination behavior.

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use unimatch::catalog::Catalog;
use unimatch::config::EngineConfig;
use unimatch::engine::RecommendationEngine;
use unimatch::explain::Explainer;
use unimatch::profile::{GradeEntry, Profile, Query};
use unimatch::ranking::{RankTable, SENTINEL_RANK};
use unimatch::results::SortMode;

const CATALOG_CSV: &str = "\
Course Title,Qualification,University Name,Duration,Study Mode,UCAS Tariff Points,Course URL
Biology and Biomedical Science,BSc (Hons),University of Testshire,3 years,Full-time,104-112,https://example.org/testshire-biology
Biology and Biomedical Science,BSc (Hons),University of Testshire,3 years,Full-time,104-112,https://example.org/testshire-biology-dup
Marine Biology,BSc (Hons),Coastal University,3 years,Full-time,96,https://example.org/coastal-marine
Biology,BSc (Hons),Northland University,4 years,Full-time,104,https://example.org/northland-biology
Computer Science,BSc (Hons),Techford University,3 years,Full-time,120,https://example.org/techford-cs
Fine Art,BA (Hons),Testshire College,3 years,Full-time,AAB,https://example.org/college-art
History,BA (Hons),Testford University,3 years,Part-time,88,https://example.org/testford-history
";

const RANKINGS_CSV: &str = "\
Rank,University
2,Techford University
5,University of Testshire
=12,Coastal University
30,Testford University
>131,Fringe College
";

fn write_fixtures(dir: &TempDir) -> (PathBuf, PathBuf) {
    let courses = dir.path().join("courses.csv");
    let rankings = dir.path().join("rankings.csv");
    let mut f = std::fs::File::create(&courses).unwrap();
    f.write_all(CATALOG_CSV.as_bytes()).unwrap();
    let mut f = std::fs::File::create(&rankings).unwrap();
    f.write_all(RANKINGS_CSV.as_bytes()).unwrap();
    (courses, rankings)
}

fn build_engine(config: EngineConfig) -> RecommendationEngine {
    let dir = TempDir::new().unwrap();
    let (courses, rankings) = write_fixtures(&dir);
    let catalog = Catalog::load(&courses).unwrap();
    let ranks = RankTable::load(&rankings);
    RecommendationEngine::new(catalog, ranks, config)
        .unwrap()
        .with_explainer(Explainer::with_chooser(|_| 0))
}

#[test]
fn test_biology_profile_end_to_end() {
    let engine = build_engine(EngineConfig::default());
    let profile = Profile {
        interests: vec!["biology".to_string(), "medicine".to_string()],
        hobbies: "volunteering at a hospital".to_string(),
        career_goals: "working in healthcare research".to_string(),
        ..Profile::default()
    };

    let results = engine.recommend(&profile);
    assert!(!results.is_empty());

    let top = &results.rows()[0];
    assert!(top.title.contains("Biology"));

    for row in results.rows() {
        assert!(row.score > 0.0 && row.score <= 1.0);
        assert!(!row.explanation.is_empty());
        assert!(row.explanation.contains(&row.title));
        assert!(row.explanation.contains(&row.university));
    }
}

#[test]
fn test_duplicate_listing_is_suppressed() {
    let engine = build_engine(EngineConfig::default());
    let results = engine.recommend_query(&Query::from_text("biology"));

    let testshire_rows = results
        .rows()
        .iter()
        .filter(|r| {
            r.title == "Biology and Biomedical Science" && r.university == "University of Testshire"
        })
        .count();
    assert_eq!(testshire_rows, 1);
}

#[test]
fn test_university_sort_puts_unranked_last() {
    let engine = build_engine(EngineConfig::default());
    let mut results = engine.recommend_query(&Query::from_text("biology"));
    assert!(results.len() >= 3);

    results.sort_by(SortMode::ByBestUniversities);
    let ranks: Vec<u32> = results.rows().iter().map(|r| r.rank).collect();
    for window in ranks.windows(2) {
        assert!(window[0] <= window[1]);
    }
    // Northland University is absent from the rank table
    let last = results.rows().last().unwrap();
    assert_eq!(last.rank, SENTINEL_RANK);
    // ">131" cells are skipped at load, so 30 is the largest known rank
    assert_eq!(last.rank_label, ">30");
}

#[test]
fn test_duration_preference_filters_courses() {
    let engine = build_engine(EngineConfig::default());
    let profile = Profile {
        interests: vec!["biology".to_string()],
        durations: vec!["3 years".to_string()],
        ..Profile::default()
    };

    let results = engine.recommend(&profile);
    assert!(!results.is_empty());
    assert!(results
        .rows()
        .iter()
        .all(|row| row.university != "Northland University"));
}

#[test]
fn test_predicted_grades_impose_points_ceiling() {
    let engine = build_engine(EngineConfig::default());
    // One subject at grade 4, confidence 3: 40 points total
    let profile = Profile {
        interests: vec!["fine art".to_string(), "biology".to_string()],
        grades: vec![GradeEntry {
            subject: "Art".to_string(),
            grade: 4,
            confidence: 3,
        }],
        ..Profile::default()
    };

    let results = engine.recommend(&profile);
    // Every course with a known requirement needs more than 40 points;
    // only the unparsable-tariff listing survives the filter.
    for row in results.rows() {
        assert_eq!(row.title, "Fine Art");
        assert_eq!(row.tariff_points, None);
    }
}

#[test]
fn test_region_selection_constrains_universities() {
    let engine = build_engine(EngineConfig::default());
    let profile = Profile {
        interests: vec!["biology".to_string()],
        regions: vec!["North East".to_string()],
        ..Profile::default()
    };

    // None of the fixture universities are in the North East
    let results = engine.recommend(&profile);
    assert!(results.is_empty());
}

#[test]
fn test_pagination_and_mode_switch() {
    let config = EngineConfig {
        batch_size: 2,
        ..EngineConfig::default()
    };
    let engine = build_engine(config);
    let mut results = engine.recommend_query(&Query::from_text("biology"));
    let total = results.len();
    assert!(total >= 3);

    let mut delivered = 0;
    while !results.is_exhausted() {
        let batch = results.next_batch();
        assert!(!batch.is_empty());
        assert!(batch.len() <= 2);
        delivered += batch.len();
    }
    assert_eq!(delivered, total);

    // Switching sort mode keeps the rows but restarts delivery
    results.sort_by(SortMode::ByBestUniversities);
    assert_eq!(results.delivered(), 0);
    assert_eq!(results.len(), total);
}

#[test]
fn test_empty_query_falls_back_cleanly() {
    let engine = build_engine(EngineConfig::default());
    let results = engine.recommend_query(&Query::from_text("   "));

    // The neutral fallback text shares no vocabulary with this catalog
    for row in results.rows() {
        assert!(row.score > 0.0);
    }
}

#[test]
fn test_irrelevant_query_yields_no_rows() {
    let engine = build_engine(EngineConfig::default());
    let results = engine.recommend_query(&Query::from_text("quantum entanglement lasers"));
    assert!(results.is_empty());
}
