//! Recommendation engine
//!
//! Owns the loaded catalog, the rank table, and the term index built once at
//! construction. Each query runs the same pipeline: structural eligibility,
//! similarity scoring, relevance filtering, rank fusion, ordering,
//! deduplication, truncation to the fixed top set, and explanation assembly.

pub mod dedup;
pub mod eligibility;

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::explain::Explainer;
use crate::index::{cosine_similarity, TfidfIndex};
use crate::profile::{Profile, Query};
use crate::ranking::RankTable;
use crate::results::{ResultRow, ResultSet};
use crate::text::Normalizer;
use std::cmp::Ordering;

pub struct RecommendationEngine {
    catalog: Catalog,
    ranks: RankTable,
    index: TfidfIndex,
    normalizer: Normalizer,
    explainer: Explainer,
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Build the engine, fitting the term index over the catalog
    ///
    /// # Errors
    /// Returns `EmptyCatalog` when the catalog has no courses; an engine is
    /// never constructed over an unusable corpus.
    pub fn new(catalog: Catalog, ranks: RankTable, config: EngineConfig) -> Result<Self> {
        let index = TfidfIndex::fit(&catalog.descriptions(), config.max_features)?;
        tracing::info!(
            courses = catalog.len(),
            vocabulary = index.vocabulary_size(),
            ranked_universities = ranks.len(),
            "Recommendation engine ready"
        );
        Ok(Self {
            catalog,
            ranks,
            index,
            normalizer: Normalizer::new(),
            explainer: Explainer::new(),
            config,
        })
    }

    /// Replace the explainer (deterministic template choice in tests)
    pub fn with_explainer(mut self, explainer: Explainer) -> Self {
        self.explainer = explainer;
        self
    }

    /// Recommend for a structured profile
    pub fn recommend(&self, profile: &Profile) -> ResultSet {
        let query = Query::from_profile(profile);
        self.run(&query, &profile.input_summary())
    }

    /// Recommend for a prebuilt query; explanations quote the query text
    pub fn recommend_query(&self, query: &Query) -> ResultSet {
        let summary = format!("your interests in {}", query.text);
        self.run(query, &summary)
    }

    fn run(&self, query: &Query, user_input: &str) -> ResultSet {
        let query_vector = self.index.transform(&self.normalizer.normalize(&query.text));

        // Eligibility, scoring, relevance filter, rank fusion
        let mut candidates: Vec<(usize, f32, u32)> = Vec::new();
        for (doc, course) in self.catalog.courses().iter().enumerate() {
            if !eligibility::is_eligible(course, query) {
                continue;
            }
            let score = cosine_similarity(&query_vector, self.index.vector(doc));
            if score <= 0.0 {
                continue;
            }
            candidates.push((doc, score, self.ranks.rank_of(&course.university)));
        }

        // Score descending, rank ascending on ties
        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.2.cmp(&b.2))
        });

        let rows: Vec<ResultRow> = candidates
            .into_iter()
            .map(|(doc, score, rank)| {
                let course = &self.catalog.courses()[doc];
                ResultRow {
                    score,
                    title: course.title.clone(),
                    university: course.university.clone(),
                    duration: course.duration.clone(),
                    qualification: course.qualification.clone(),
                    study_mode: course.study_mode.clone(),
                    tariff_points: course.tariff_points,
                    url: course.url.clone(),
                    explanation: String::new(),
                    rank,
                    rank_label: self.ranks.label(rank),
                }
            })
            .collect();

        // Dedup before truncation so suppressed rows free up slots
        let mut rows = dedup::dedup_rows(rows);
        rows.truncate(self.config.top_k);

        for row in &mut rows {
            row.explanation = self.explainer.explain(
                &row.title,
                &row.university,
                row.score,
                user_input,
                &query.text,
            );
        }

        tracing::debug!(results = rows.len(), "Assembled recommendation set");
        ResultSet::new(rows, self.config.batch_size)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ranks(&self) -> &RankTable {
        &self.ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CourseRecord;
    use crate::profile::GradeEntry;

    fn record(title: &str, university: &str, tariff: Option<f32>) -> CourseRecord {
        let normalizer = Normalizer::new();
        CourseRecord {
            title: title.to_string(),
            qualification: "BSc (Hons)".to_string(),
            university: university.to_string(),
            duration: "3 years".to_string(),
            study_mode: "Full-time".to_string(),
            tariff_points: tariff,
            url: format!("https://example.org/{}", title.to_lowercase().replace(' ', "-")),
            description: normalizer.normalize(&format!("{} BSc (Hons) {}", title, university)),
        }
    }

    fn engine(records: Vec<CourseRecord>, ranks: RankTable) -> RecommendationEngine {
        RecommendationEngine::new(Catalog::from_records(records), ranks, EngineConfig::default())
            .unwrap()
            .with_explainer(Explainer::with_chooser(|_| 0))
    }

    fn sample_engine() -> RecommendationEngine {
        engine(
            vec![
                record("Biology and Biomedical Science", "University of Testshire", Some(104.0)),
                record("Fine Art", "Testshire College", Some(80.0)),
                record("Computer Science", "University of Testshire", Some(120.0)),
            ],
            RankTable::from_entries(vec![("University of Testshire".to_string(), 5)]),
        )
    }

    #[test]
    fn test_empty_catalog_is_fatal() {
        let result = RecommendationEngine::new(
            Catalog::from_records(Vec::new()),
            RankTable::empty(),
            EngineConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_relevant_course_ranks_first() {
        let engine = sample_engine();
        let results = engine.recommend_query(&Query::from_text("I love biology"));

        assert!(!results.is_empty());
        let top = &results.rows()[0];
        assert_eq!(top.title, "Biology and Biomedical Science");
        assert!(top.score > 0.0);
        assert!(!top.explanation.is_empty());
    }

    #[test]
    fn test_irrelevant_courses_are_filtered() {
        let engine = sample_engine();
        let results = engine.recommend_query(&Query::from_text("I love biology"));

        assert!(results
            .rows()
            .iter()
            .all(|row| row.title != "Fine Art" || row.score > 0.0));
        // No shared terms at all means no row
        let none = engine.recommend_query(&Query::from_text("quantum entanglement"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_tariff_constraint_excludes_courses() {
        let engine = sample_engine();
        let profile = Profile {
            interests: vec!["computer science".to_string()],
            grades: vec![GradeEntry {
                subject: "Maths".to_string(),
                grade: 4,
                confidence: 3,
            }],
            ..Profile::default()
        };
        // 40 points: every course with a known requirement above that drops
        let results = engine.recommend(&profile);
        assert!(results.rows().iter().all(|row| row.title != "Computer Science"));
    }

    #[test]
    fn test_duplicate_listings_collapse_to_best() {
        let engine = engine(
            vec![
                record("Biology", "University of Testshire", None),
                record("Biology", "University of Testshire", None),
            ],
            RankTable::empty(),
        );
        let results = engine.recommend_query(&Query::from_text("biology"));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_result_set_is_capped() {
        let records: Vec<CourseRecord> = (0..30)
            .map(|i| record(&format!("Biology Pathway {}", i), &format!("University {}", i), None))
            .collect();
        let engine = engine(records, RankTable::empty());
        let results = engine.recommend_query(&Query::from_text("biology"));
        assert_eq!(results.len(), 15);
    }

    #[test]
    fn test_unranked_university_gets_sentinel_label() {
        let engine = sample_engine();
        let results = engine.recommend_query(&Query::from_text("fine art"));

        let row = results
            .rows()
            .iter()
            .find(|r| r.university == "Testshire College")
            .unwrap();
        assert!(!row.is_ranked());
        assert_eq!(row.rank_label, ">5");
    }
}
