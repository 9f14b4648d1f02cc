//! TF-IDF vector-space index over course descriptions
//!
//! Builds a weighted term-vector representation for every catalog course
//! from unigrams and bigrams of the normalized description, with the
//! vocabulary capped to the most frequent terms corpus-wide. The vocabulary
//! and IDF weights are learned exactly once at build time; `transform`
//! projects query text into the same fixed space and never refits.

use crate::error::{Result, UnimatchError};
use ahash::AHashMap;

/// Sparse term-weight vector: (term id, weight) pairs sorted by term id.
/// All vectors produced by the index are L2-normalized, so the dot product
/// of two vectors is their cosine similarity.
pub type SparseVector = Vec<(u32, f32)>;

/// TF-IDF index with a fixed vocabulary and per-document vectors
pub struct TfidfIndex {
    vocabulary: AHashMap<String, u32>,
    terms: Vec<String>,
    idf: Vec<f32>,
    vectors: Vec<SparseVector>,
}

impl TfidfIndex {
    /// Build the index from normalized document strings
    ///
    /// # Arguments
    /// * `documents` - One normalized description per course
    /// * `max_features` - Vocabulary cap; the most frequent terms corpus-wide
    ///   are kept, ties broken alphabetically for determinism
    ///
    /// # Errors
    /// Returns `EmptyCatalog` if `documents` is empty: no partial index is
    /// ever built.
    pub fn fit(documents: &[String], max_features: usize) -> Result<Self> {
        if documents.is_empty() {
            return Err(UnimatchError::EmptyCatalog);
        }

        // Corpus-wide term counts and document frequencies
        let mut corpus_counts: AHashMap<String, u64> = AHashMap::new();
        let mut doc_freq: AHashMap<String, u32> = AHashMap::new();
        let per_doc: Vec<AHashMap<String, u32>> = documents
            .iter()
            .map(|doc| {
                let counts = term_counts(doc);
                for (term, count) in &counts {
                    *corpus_counts.entry(term.clone()).or_insert(0) += u64::from(*count);
                    *doc_freq.entry(term.clone()).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        // Cap the vocabulary to the top terms by corpus frequency
        let mut ranked: Vec<(String, u64)> = corpus_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_features);

        // Assign term ids in alphabetical order so vectors are deterministic
        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort();

        let n_docs = documents.len() as f32;
        let mut vocabulary = AHashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (id, term) in terms.iter().enumerate() {
            let df = doc_freq[term] as f32;
            idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term.clone(), id as u32);
        }

        let vectors = per_doc
            .into_iter()
            .map(|counts| weigh(&counts, &vocabulary, &idf))
            .collect();

        Ok(Self {
            vocabulary,
            terms,
            idf,
            vectors,
        })
    }

    /// Project normalized text into the fixed vocabulary space
    ///
    /// Terms outside the learned vocabulary are ignored; text sharing no
    /// vocabulary terms yields an empty vector (cosine 0 against anything).
    pub fn transform(&self, normalized_text: &str) -> SparseVector {
        weigh(&term_counts(normalized_text), &self.vocabulary, &self.idf)
    }

    /// Stored vector for document `doc`
    pub fn vector(&self, doc: usize) -> &SparseVector {
        &self.vectors[doc]
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Number of vocabulary terms retained at build time
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Vocabulary term for a term id
    pub fn term(&self, id: u32) -> &str {
        &self.terms[id as usize]
    }
}

/// Unigram + bigram counts over a whitespace-tokenized normalized string
fn term_counts(normalized_text: &str) -> AHashMap<String, u32> {
    let tokens: Vec<&str> = normalized_text.split_whitespace().collect();
    let mut counts = AHashMap::new();
    for token in &tokens {
        *counts.entry((*token).to_string()).or_insert(0) += 1;
    }
    for pair in tokens.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}

/// TF × IDF weighting with L2 normalization, sorted by term id
fn weigh(
    counts: &AHashMap<String, u32>,
    vocabulary: &AHashMap<String, u32>,
    idf: &[f32],
) -> SparseVector {
    let mut vector: SparseVector = counts
        .iter()
        .filter_map(|(term, count)| {
            vocabulary
                .get(term)
                .map(|&id| (id, *count as f32 * idf[id as usize]))
        })
        .collect();
    vector.sort_by_key(|&(id, _)| id);

    let norm = vector.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, w) in &mut vector {
            *w /= norm;
        }
    }
    vector
}

/// Cosine similarity between two L2-normalized sparse vectors
///
/// Merge-join over sorted term ids; result is clamped to [0, 1].
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f32 {
    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot.clamp(0.0, 1.0)
}
