//! User profiles and query construction
//!
//! A `Profile` is the structured answer set the presentation layer collects
//! (interests, hobbies, strengths, career goals, graded subjects, duration
//! and qualification preferences, selected regions). A `Query` is what the
//! engine actually evaluates: combined text plus the hard-constraint set.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

pub mod regions;

/// Substituted when the combined query text is empty or whitespace-only.
/// Deliberate policy, not a bug: an empty profile still gets scored against
/// a neutral description of general interests instead of failing.
pub const FALLBACK_QUERY: &str = "general interests and goals";

/// One predicted-grade entry: subject, grade band 1-6, confidence 1-5
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeEntry {
    pub subject: String,
    pub grade: u8,
    pub confidence: u8,
}

/// UCAS points for a grade band; unknown bands contribute nothing
pub fn grade_points(grade: u8) -> f32 {
    match grade {
        1 => 16.0,
        2 => 24.0,
        3 => 32.0,
        4 => 40.0,
        5 => 48.0,
        6 => 56.0,
        _ => 0.0,
    }
}

/// Confidence adjustment factor applied to a grade's points
pub fn confidence_multiplier(confidence: u8) -> f32 {
    match confidence {
        1 => 0.75,
        2 => 0.9,
        3 | 4 => 1.0,
        5 => 1.5,
        _ => 1.0,
    }
}

/// Structured user profile collected by the presentation layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub interests: Vec<String>,
    pub hobbies: String,
    pub strengths: Vec<String>,
    pub career_goals: String,
    pub grades: Vec<GradeEntry>,
    pub durations: Vec<String>,
    pub qualifications: Vec<String>,
    pub regions: Vec<String>,
}

impl Profile {
    /// Combined free-text view of the profile, the scoring input
    pub fn combined_text(&self) -> String {
        [
            self.interests.join(" "),
            self.hobbies.clone(),
            self.strengths.join(" "),
            self.career_goals.clone(),
        ]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Total UCAS points: Σ grade points × confidence multiplier.
    /// None when no grades were entered, imposing no points constraint.
    pub fn ucas_points(&self) -> Option<f32> {
        if self.grades.is_empty() {
            return None;
        }
        Some(
            self.grades
                .iter()
                .map(|entry| grade_points(entry.grade) * confidence_multiplier(entry.confidence))
                .sum(),
        )
    }

    /// Readable summary of the profile for explanation text
    pub fn input_summary(&self) -> String {
        let interests = if self.interests.is_empty() {
            "various topics".to_string()
        } else {
            self.interests.join(", ")
        };
        let hobbies = if self.hobbies.trim().is_empty() {
            "exploring new activities"
        } else {
            self.hobbies.trim()
        };
        let strengths = if self.strengths.is_empty() {
            "being adaptable".to_string()
        } else {
            self.strengths.join(", ")
        };
        let goals = if self.career_goals.trim().is_empty() {
            "finding a fulfilling career"
        } else {
            self.career_goals.trim()
        };
        format!(
            "your interests in {}, your hobbies such as {}, your strengths like {}, \
             and your career goals of {}",
            interests, hobbies, strengths, goals
        )
    }

    /// Union of the allow-lists for the selected regions.
    /// None when no region is selected (no university constraint).
    pub fn allowed_universities(&self) -> Option<AHashSet<String>> {
        if self.regions.is_empty() {
            return None;
        }
        let mut allowed = AHashSet::new();
        for region in &self.regions {
            if let Some(universities) = regions::universities_in(region) {
                allowed.extend(universities.iter().map(|u| u.to_string()));
            } else {
                tracing::debug!("Ignoring unknown region '{}'", region);
            }
        }
        Some(allowed)
    }
}

/// What the engine evaluates: text plus the hard-constraint set
#[derive(Debug, Clone)]
pub struct Query {
    /// Raw (un-normalized) user text; never empty thanks to the fallback
    pub text: String,
    /// Computed UCAS points ceiling; None imposes no restriction
    pub max_points: Option<f32>,
    /// Allowed durations; empty imposes no restriction
    pub durations: Vec<String>,
    /// Allowed qualifications; empty imposes no restriction
    pub qualifications: Vec<String>,
    /// Allowed universities from region selection; None imposes no restriction
    pub universities: Option<AHashSet<String>>,
}

impl Query {
    /// Query from free text, with the empty-input fallback applied
    pub fn from_text(text: &str) -> Self {
        Self {
            text: fallback_if_empty(text),
            max_points: None,
            durations: Vec::new(),
            qualifications: Vec::new(),
            universities: None,
        }
    }

    /// Query derived from a structured profile
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            text: fallback_if_empty(&profile.combined_text()),
            max_points: profile.ucas_points(),
            durations: profile.durations.clone(),
            qualifications: profile.qualifications.clone(),
            universities: profile.allowed_universities(),
        }
    }
}

fn fallback_if_empty(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        tracing::debug!("Empty query text; substituting the neutral fallback query");
        FALLBACK_QUERY.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ucas_points_worked_examples() {
        let profile = Profile {
            grades: vec![GradeEntry {
                subject: "Biology".to_string(),
                grade: 4,
                confidence: 3,
            }],
            ..Profile::default()
        };
        assert_eq!(profile.ucas_points(), Some(40.0));

        let profile = Profile {
            grades: vec![GradeEntry {
                subject: "Maths".to_string(),
                grade: 6,
                confidence: 5,
            }],
            ..Profile::default()
        };
        assert_eq!(profile.ucas_points(), Some(84.0));
    }

    #[test]
    fn test_ucas_points_accumulate() {
        let profile = Profile {
            grades: vec![
                GradeEntry {
                    subject: "Biology".to_string(),
                    grade: 4,
                    confidence: 3,
                },
                GradeEntry {
                    subject: "Chemistry".to_string(),
                    grade: 1,
                    confidence: 1,
                },
            ],
            ..Profile::default()
        };
        assert_eq!(profile.ucas_points(), Some(40.0 + 12.0));
    }

    #[test]
    fn test_no_grades_means_no_constraint() {
        assert_eq!(Profile::default().ucas_points(), None);
    }

    #[test]
    fn test_empty_text_falls_back() {
        let query = Query::from_text("   ");
        assert_eq!(query.text, FALLBACK_QUERY);

        let query = Query::from_profile(&Profile::default());
        assert_eq!(query.text, FALLBACK_QUERY);
    }

    #[test]
    fn test_combined_text_joins_sections() {
        let profile = Profile {
            interests: vec!["biology".to_string(), "medicine".to_string()],
            hobbies: "volunteering".to_string(),
            career_goals: "helping patients".to_string(),
            ..Profile::default()
        };
        assert_eq!(
            profile.combined_text(),
            "biology medicine volunteering helping patients"
        );
    }

    #[test]
    fn test_region_constraint() {
        let profile = Profile {
            regions: vec!["North East".to_string(), "Atlantis".to_string()],
            ..Profile::default()
        };
        let allowed = profile.allowed_universities().unwrap();
        assert!(allowed.contains("Durham University"));
        assert!(!allowed.contains("University of Oxford"));
    }

    #[test]
    fn test_input_summary_fallbacks() {
        let summary = Profile::default().input_summary();
        assert!(summary.contains("various topics"));
        assert!(summary.contains("finding a fulfilling career"));
    }
}
