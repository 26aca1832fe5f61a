pub mod mood;
pub mod recommender;
pub mod tfidf;
pub mod tokenize;

pub use mood::Mood;
pub use recommender::{Recommendation, RecommendError, Recommender, DEFAULT_LIMIT};
pub use tfidf::{cosine_similarity, SparseVector, TfidfVectorizer, VectorizeError};
pub use tokenize::Tokenizer;
