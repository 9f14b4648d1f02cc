//! Course catalog loading
//!
//! Loads the tabular course dataset, validates that every required column is
//! present, parses tariff points to their lower bound, and synthesizes the
//! normalized description each course is indexed under. Records are immutable
//! once the catalog is loaded.

use crate::error::{Result, UnimatchError};
use crate::text::Normalizer;
use serde::Serialize;
use std::path::Path;

mod tariff;

pub use tariff::parse_lower_bound;

/// Columns the catalog must provide; missing any is a load-time fatal error
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Course Title",
    "Qualification",
    "University Name",
    "Duration",
    "Study Mode",
    "UCAS Tariff Points",
    "Course URL",
];

/// One catalog course, immutable after load
#[derive(Debug, Clone, Serialize)]
pub struct CourseRecord {
    pub title: String,
    pub qualification: String,
    pub university: String,
    pub duration: String,
    pub study_mode: String,
    /// Lower bound of the advertised tariff range; None when unparsable
    pub tariff_points: Option<f32>,
    pub url: String,
    /// Normalized concatenation of title, qualification, and university;
    /// this is the text the vector index is built from
    pub description: String,
}

/// Loaded course catalog
pub struct Catalog {
    courses: Vec<CourseRecord>,
}

impl Catalog {
    /// Load the catalog from a CSV file
    ///
    /// # Errors
    /// * `CatalogNotFound` when the file does not exist
    /// * `MissingColumns` enumerating exactly which required columns are absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(UnimatchError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h.trim() == **column))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(UnimatchError::MissingColumns { columns: missing });
        }

        let column = |name: &str| -> usize {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .unwrap_or_default()
        };
        let title_idx = column("Course Title");
        let qualification_idx = column("Qualification");
        let university_idx = column("University Name");
        let duration_idx = column("Duration");
        let study_mode_idx = column("Study Mode");
        let tariff_idx = column("UCAS Tariff Points");
        let url_idx = column("Course URL");

        let normalizer = Normalizer::new();
        let mut courses = Vec::new();
        let mut unparsable_tariffs = 0usize;

        for record in reader.records() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();

            let title = field(title_idx);
            let qualification = field(qualification_idx);
            let university = field(university_idx);

            let tariff_raw = field(tariff_idx);
            let tariff_points = parse_lower_bound(&tariff_raw);
            if tariff_points.is_none() && !tariff_raw.is_empty() {
                unparsable_tariffs += 1;
            }

            let description =
                normalizer.normalize(&format!("{} {} {}", title, qualification, university));

            courses.push(CourseRecord {
                title,
                qualification,
                university,
                duration: field(duration_idx),
                study_mode: field(study_mode_idx),
                tariff_points,
                url: field(url_idx),
                description,
            });
        }

        if unparsable_tariffs > 0 {
            tracing::debug!(
                "{} courses have unparsable tariff points and are exempt from the points filter",
                unparsable_tariffs
            );
        }
        tracing::info!("Loaded {} courses from {}", courses.len(), path.display());

        Ok(Self { courses })
    }

    /// Build a catalog directly from records (used by the engine's tests)
    pub fn from_records(courses: Vec<CourseRecord>) -> Self {
        Self { courses }
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    /// Normalized descriptions in catalog order, the index-build corpus
    pub fn descriptions(&self) -> Vec<String> {
        self.courses.iter().map(|c| c.description.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
