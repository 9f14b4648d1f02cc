//! Per-row explanation generation
//!
//! For each recommended course, term weights are fitted fresh on the
//! two-document pair {combined user text, course title}; terms weighing
//! more than 0.1 in both documents become the matched keywords. The final
//! sentence substitutes course, university, score, and matched context into
//! one of several equivalent phrasing templates. Template choice is
//! cosmetic only and runs through an injectable choice function so tests
//! can pin the output while production randomizes.

use crate::index::TfidfIndex;
use crate::text::Normalizer;
use rand::Rng;

const TEMPLATES: [&str; 4] = [
    "Based on {user_input}, the {course_title} program at {university} is a great match. \
     {context_match} The compatibility score for this recommendation is {similarity_score}.",
    "Your aspirations and interests, {user_input}, align strongly with the {course_title} \
     course at {university}. {context_match} It achieved a similarity score of {similarity_score}.",
    "Given {user_input}, the {course_title} program at {university} is highly recommended. \
     {context_match} It stands out with a compatibility score of {similarity_score}.",
    "With your goals and interests, {user_input}, the {course_title} at {university} is an \
     excellent fit. {context_match} This recommendation achieved a score of {similarity_score}.",
];

/// Keyword weight threshold for counting a term as matched in both documents
const KEYWORD_THRESHOLD: f32 = 0.1;

type ChoiceFn = Box<dyn Fn(usize) -> usize + Send + Sync>;

/// Explanation generator with an injectable template chooser
pub struct Explainer {
    normalizer: Normalizer,
    choose: ChoiceFn,
}

impl Explainer {
    /// Production explainer with uniformly random template choice
    pub fn new() -> Self {
        Self::with_chooser(|n| rand::thread_rng().gen_range(0..n))
    }

    /// Explainer with a caller-supplied choice function (deterministic tests)
    pub fn with_chooser(choose: impl Fn(usize) -> usize + Send + Sync + 'static) -> Self {
        Self {
            normalizer: Normalizer::new(),
            choose: Box::new(choose),
        }
    }

    /// Generate the explanation for one result row
    ///
    /// # Arguments
    /// * `course_title` / `university` - Course identity
    /// * `score` - Similarity score in [0, 1]
    /// * `user_input` - Readable summary of the user's interests and goals
    /// * `user_text` - Combined raw user text for keyword matching
    pub fn explain(
        &self,
        course_title: &str,
        university: &str,
        score: f32,
        user_input: &str,
        user_text: &str,
    ) -> String {
        let context_match = self.context_match(user_text, course_title);
        let template = TEMPLATES[(self.choose)(TEMPLATES.len()).min(TEMPLATES.len() - 1)];

        template
            .replace("{user_input}", user_input.trim())
            .replace("{course_title}", course_title.trim())
            .replace("{university}", university.trim())
            .replace("{context_match}", &context_match)
            .replace("{similarity_score}", &format!("{:.2}", score))
    }

    /// Sentence linking matched keywords, or the generic fallback
    fn context_match(&self, user_text: &str, course_title: &str) -> String {
        let keywords = self.matched_keywords(user_text, course_title);
        if keywords.is_empty() {
            "This course offers a unique opportunity to explore new areas aligned with your \
             aspirations."
                .to_string()
        } else {
            format!(
                "This program directly matches your interest in {}.",
                keywords.join(" and ")
            )
        }
    }

    /// Terms weighing over the threshold in both user text and course title
    fn matched_keywords(&self, user_text: &str, course_title: &str) -> Vec<String> {
        let documents = vec![
            self.normalizer.normalize(user_text),
            self.normalizer.normalize(course_title),
        ];
        let index = match TfidfIndex::fit(&documents, usize::MAX) {
            Ok(index) => index,
            Err(_) => return Vec::new(),
        };

        let user_vector = index.vector(0);
        let title_vector = index.vector(1);

        let mut keywords: Vec<String> = user_vector
            .iter()
            .filter(|(_, weight)| *weight > KEYWORD_THRESHOLD)
            .filter_map(|&(id, _)| {
                title_vector
                    .iter()
                    .find(|&&(tid, tw)| tid == id && tw > KEYWORD_THRESHOLD)
                    .map(|_| index.term(id).to_string())
            })
            // bigram matches are already covered by their unigrams
            .filter(|term| !term.contains(' '))
            .collect();
        keywords.sort();
        keywords
    }
}

impl Default for Explainer {
    fn default() -> Self {
        Self::new()
    }
}
