//! Structural eligibility checks applied before any scoring
//!
//! Each constraint only binds when the query carries it and the course
//! carries the data to check it against. A course with an unparsable
//! tariff requirement is never excluded on points.

use crate::catalog::CourseRecord;
use crate::profile::Query;

/// True when the course passes every hard constraint in the query
pub fn is_eligible(course: &CourseRecord, query: &Query) -> bool {
    if let (Some(tariff), Some(max_points)) = (course.tariff_points, query.max_points) {
        if tariff > max_points {
            return false;
        }
    }

    if !query.durations.is_empty() && !query.durations.iter().any(|d| d == &course.duration) {
        return false;
    }

    if !query.qualifications.is_empty()
        && !query.qualifications.iter().any(|q| q == &course.qualification)
    {
        return false;
    }

    if let Some(allowed) = &query.universities {
        if !allowed.contains(&course.university) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    fn course(tariff: Option<f32>, duration: &str, qualification: &str, university: &str) -> CourseRecord {
        CourseRecord {
            title: "Biology BSc".to_string(),
            qualification: qualification.to_string(),
            university: university.to_string(),
            duration: duration.to_string(),
            study_mode: "Full-time".to_string(),
            tariff_points: tariff,
            url: "https://example.org".to_string(),
            description: "biolog bsc".to_string(),
        }
    }

    #[test]
    fn test_unconstrained_query_accepts_everything() {
        let query = Query::from_text("biology");
        assert!(is_eligible(
            &course(Some(999.0), "3 years", "BSc (Hons)", "Anywhere"),
            &query,
        ));
    }

    #[test]
    fn test_tariff_ceiling() {
        let mut query = Query::from_text("biology");
        query.max_points = Some(104.0);

        assert!(is_eligible(&course(Some(104.0), "3 years", "BSc (Hons)", "A"), &query));
        assert!(!is_eligible(&course(Some(120.0), "3 years", "BSc (Hons)", "A"), &query));
        // Unknown requirement imposes nothing
        assert!(is_eligible(&course(None, "3 years", "BSc (Hons)", "A"), &query));
    }

    #[test]
    fn test_duration_filter() {
        let mut query = Query::from_text("biology");
        query.durations = vec!["3 years".to_string()];

        assert!(is_eligible(&course(None, "3 years", "BSc (Hons)", "A"), &query));
        assert!(!is_eligible(&course(None, "4 years", "BSc (Hons)", "A"), &query));
    }

    #[test]
    fn test_qualification_filter() {
        let mut query = Query::from_text("biology");
        query.qualifications = vec!["MSci".to_string()];

        assert!(!is_eligible(&course(None, "3 years", "BSc (Hons)", "A"), &query));
        assert!(is_eligible(&course(None, "4 years", "MSci", "A"), &query));
    }

    #[test]
    fn test_university_allow_list() {
        let mut query = Query::from_text("biology");
        let mut allowed = AHashSet::new();
        allowed.insert("Durham University".to_string());
        query.universities = Some(allowed);

        assert!(is_eligible(
            &course(None, "3 years", "BSc (Hons)", "Durham University"),
            &query,
        ));
        assert!(!is_eligible(
            &course(None, "3 years", "BSc (Hons)", "University of Oxford"),
            &query,
        ));
    }
}
