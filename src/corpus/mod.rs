pub mod genres;
pub mod literal;
pub mod loader;
pub mod movie;

pub use genres::{clean_genres, parse_genre_names, GenreParseError};
pub use loader::{Corpus, CorpusError};
pub use movie::MovieRecord;
