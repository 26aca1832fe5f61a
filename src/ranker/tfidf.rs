use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

use super::tokenize::Tokenizer;

/// Sparse vector as (term index, weight) pairs, sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(i, _)| i);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut a, mut b) = (self.entries.iter().peekable(), other.entries.iter().peekable());
        let mut sum = 0.0;
        while let (Some(&&(ia, wa)), Some(&&(ib, wb))) = (a.peek(), b.peek()) {
            match ia.cmp(&ib) {
                std::cmp::Ordering::Less => {
                    a.next();
                }
                std::cmp::Ordering::Greater => {
                    b.next();
                }
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    a.next();
                    b.next();
                }
            }
        }
        sum
    }

    fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }
}

/// Cosine similarity; 0 when either vector is all zeros.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm = a.norm() * b.norm();
    if norm == 0.0 {
        return 0.0;
    }
    a.dot(b) / norm
}

/// TF-IDF transform fitted on a fixed corpus. Raw term counts weighted by
/// smoothed IDF, `ln((1 + n) / (1 + df)) + 1`, rows scaled to unit length.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn fit<S: AsRef<str>>(tokenizer: Tokenizer, documents: &[S]) -> Result<Self, VectorizeError> {
        if documents.is_empty() {
            return Err(VectorizeError::EmptyCorpus);
        }

        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: HashSet<String> = tokenizer.tokenize(doc.as_ref()).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        // BTreeMap iteration gives lexicographic column order.
        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (index, (term, df)) in doc_freq.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Fitted TF-IDF vocabulary"
        );

        Ok(Self {
            tokenizer,
            vocabulary,
            idf,
        })
    }

    /// Project text into the fitted space. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in self.tokenizer.tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = SparseVector::from_entries(
            counts
                .into_iter()
                .map(|(index, tf)| (index, tf * self.idf[index]))
                .collect(),
        );
        vector.normalize();
        vector
    }

    pub fn fit_transform<S: AsRef<str>>(
        tokenizer: Tokenizer,
        documents: &[S],
    ) -> Result<(Self, Vec<SparseVector>), VectorizeError> {
        let vectorizer = Self::fit(tokenizer, documents)?;
        let matrix = documents
            .iter()
            .map(|doc| vectorizer.transform(doc.as_ref()))
            .collect();
        Ok((vectorizer, matrix))
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|i| self.idf[i])
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VectorizeError {
    #[error("Cannot fit on an empty corpus")]
    EmptyCorpus,
    #[error("Empty vocabulary; the documents may only contain stop words")]
    EmptyVocabulary,
    #[error("Invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}
