use std::collections::HashMap;
use tracing::{debug, info};

use super::mood::Mood;
use super::tfidf::{cosine_similarity, SparseVector, TfidfVectorizer, VectorizeError};
use super::tokenize::Tokenizer;
use crate::corpus::Corpus;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub index: usize,
    pub title: String,
    pub overview: String,
    pub genres: String,
    pub score: f64,
}

/// Fitted vector space over a movie corpus plus the projected mood vectors.
/// Immutable once built.
pub struct Recommender {
    corpus: Corpus,
    vectorizer: TfidfVectorizer,
    matrix: Vec<SparseVector>,
    mood_vectors: HashMap<Mood, SparseVector>,
    limit: usize,
}

impl Recommender {
    pub fn build(corpus: Corpus, limit: usize) -> Result<Self, VectorizeError> {
        if corpus.is_empty() {
            return Err(VectorizeError::EmptyCorpus);
        }

        let tokenizer = Tokenizer::english()?;
        let (vectorizer, matrix) = TfidfVectorizer::fit_transform(tokenizer, &corpus.descriptions())?;

        let mood_vectors: HashMap<Mood, SparseVector> = Mood::ALL
            .into_iter()
            .map(|mood| (mood, vectorizer.transform(mood.keywords())))
            .collect();

        for (mood, vector) in &mood_vectors {
            if vector.is_zero() {
                debug!("None of the {} keywords occur in the corpus", mood);
            }
        }

        info!(
            movies = corpus.len(),
            vocabulary = vectorizer.vocabulary_size(),
            "Built recommender"
        );

        Ok(Self {
            corpus,
            vectorizer,
            matrix,
            mood_vectors,
            limit: limit.max(1),
        })
    }

    /// Similarity of every movie to the mood, in corpus order.
    pub fn scores(&self, mood: Mood) -> Vec<f64> {
        match self.mood_vectors.get(&mood) {
            Some(mood_vector) => self
                .matrix
                .iter()
                .map(|row| cosine_similarity(mood_vector, row))
                .collect(),
            None => vec![0.0; self.matrix.len()],
        }
    }

    /// Top movies for a mood, best first. Equal scores keep corpus order.
    pub fn recommend(&self, mood: &str) -> Result<Vec<Recommendation>, RecommendError> {
        let mood = Mood::from_name(mood).ok_or_else(|| RecommendError::InvalidMood(mood.to_string()))?;

        let mut ranked: Vec<(usize, f64)> = self.scores(mood).into_iter().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(self.limit);

        Ok(ranked
            .into_iter()
            .filter_map(|(index, score)| {
                self.corpus.get(index).map(|movie| Recommendation {
                    index,
                    title: movie.title().to_string(),
                    overview: movie.overview().to_string(),
                    genres: movie.clean_genres.clone(),
                    score,
                })
            })
            .collect())
    }

    pub fn moods(&self) -> impl Iterator<Item = (Mood, &'static str)> {
        Mood::ALL.into_iter().map(|m| (m, m.keywords()))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn movie_count(&self) -> usize {
        self.corpus.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecommendError {
    #[error("Invalid mood: {0:?}")]
    InvalidMood(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"genres,overview,title
"[{'id': 35, 'name': 'Comedy'}]",A joyful uplifting comedy about friends,Best Buddies
"[{'id': 18, 'name': 'Drama'}]",A grim tale of loss and war,Dark Days
"[{'id': 9648, 'name': 'Mystery'}]",A detective follows secrets and a puzzle to an unknown killer,The Riddle
"[{'id': 12, 'name': 'Adventure'}]",A daring expedition across the ocean,Far Shores
{{broken,A mystery investigation with a twist,Broken Genres
,,Nothing Here
"[{'id': 28, 'name': 'Action'}]",An intense explosive thriller with wild car chases,Full Throttle
"[{'id': 10751, 'name': 'Family'}]",A heartwarming story of a brave dog,Good Boy
"[{'id': 36, 'name': 'History'}]",A classic vintage tale of memory and the past,Yesterday
"[{'id': 99, 'name': 'Documentary'}]",A calm peaceful look at gentle rivers,Still Water
"[{'id': 18, 'name': 'Drama'}]",A thoughtful intricate cerebral drama,Deep Thought
"[{'id': 18, 'name': 'Drama'}]",Brave heroic soldiers triumph through perseverance,Glory
"#;

    fn recommender(limit: usize) -> Recommender {
        let corpus = Corpus::from_reader(DATASET.as_bytes()).unwrap();
        Recommender::build(corpus, limit).unwrap()
    }

    #[test]
    fn test_happy_ranks_joyful_comedy_first() {
        let rec = recommender(DEFAULT_LIMIT);
        let results = rec.recommend("Happy").unwrap();
        assert_eq!(results[0].title, "Best Buddies");
        assert_eq!(results[0].genres, "Comedy");
        assert!(results[0].score > 0.0);
    }

    #[test]
    fn test_all_moods_return_ordered_results() {
        let rec = recommender(DEFAULT_LIMIT);
        for mood in Mood::ALL {
            let results = rec.recommend(mood.as_str()).unwrap();
            assert_eq!(results.len(), DEFAULT_LIMIT, "mood {}", mood);
            for pair in results.windows(2) {
                assert!(pair[0].score >= pair[1].score, "mood {}", mood);
            }
            assert!(results.iter().all(|r| (0.0..=1.0 + 1e-9).contains(&r.score)));
        }
    }

    #[test]
    fn test_invalid_mood() {
        let rec = recommender(DEFAULT_LIMIT);
        assert_eq!(
            rec.recommend("Grumpy"),
            Err(RecommendError::InvalidMood("Grumpy".to_string()))
        );
        assert!(rec.recommend("happy").is_err());
        assert!(rec.recommend("").is_err());
    }

    #[test]
    fn test_malformed_genres_still_recommended() {
        let rec = recommender(DEFAULT_LIMIT);
        let results = rec.recommend("Curious").unwrap();
        let broken = results.iter().find(|r| r.title == "Broken Genres").unwrap();
        assert_eq!(broken.genres, "");
        assert!(broken.score > 0.0);
        assert_eq!(results[0].title, "Broken Genres");
    }

    #[test]
    fn test_empty_description_scores_zero() {
        let rec = recommender(DEFAULT_LIMIT);
        let nothing = rec.corpus().get(5).unwrap();
        assert_eq!(nothing.description, " ");
        for mood in Mood::ALL {
            assert_eq!(rec.scores(mood)[5], 0.0);
        }
    }

    #[test]
    fn test_idempotent() {
        let rec = recommender(DEFAULT_LIMIT);
        for mood in Mood::ALL {
            assert_eq!(
                rec.recommend(mood.as_str()).unwrap(),
                rec.recommend(mood.as_str()).unwrap()
            );
        }
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let data = "genres,overview,title\n[],zebra,First\n[],joyful,Second\n[],zebra,Third\n[],joyful,Fourth\n";
        let corpus = Corpus::from_reader(data.as_bytes()).unwrap();
        let rec = Recommender::build(corpus, DEFAULT_LIMIT).unwrap();

        let titles: Vec<String> = rec.recommend("Happy").unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Second", "Fourth", "First", "Third"]);
    }

    #[test]
    fn test_limit() {
        let rec = recommender(3);
        assert_eq!(rec.recommend("Excited").unwrap().len(), 3);
        assert_eq!(rec.recommend("Excited").unwrap()[0].title, "Full Throttle");
    }

    #[test]
    fn test_small_corpus_returns_everything() {
        let data = "genres,overview,title\n[],joyful day,Only\n";
        let corpus = Corpus::from_reader(data.as_bytes()).unwrap();
        let rec = Recommender::build(corpus, DEFAULT_LIMIT).unwrap();
        assert_eq!(rec.recommend("Relaxed").unwrap().len(), 1);
    }

    #[test]
    fn test_stop_word_only_corpus_fails() {
        let data = "genres,overview,title\n[],the and of,A\n";
        let corpus = Corpus::from_reader(data.as_bytes()).unwrap();
        assert!(matches!(
            Recommender::build(corpus, DEFAULT_LIMIT),
            Err(VectorizeError::EmptyVocabulary)
        ));
    }
}
