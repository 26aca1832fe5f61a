use super::genres::clean_genres;

/// One row of the movie dataset plus the fields derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub clean_genres: String,
    pub description: String,
}

impl MovieRecord {
    pub fn new(title: Option<String>, overview: Option<String>, raw_genres: Option<&str>) -> Self {
        let clean_genres = clean_genres(raw_genres);
        let description = make_description(overview.as_deref(), &clean_genres);
        Self {
            title,
            overview,
            clean_genres,
            description,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn overview(&self) -> &str {
        self.overview.as_deref().unwrap_or("")
    }
}

pub fn make_description(overview: Option<&str>, clean_genres: &str) -> String {
    format!("{} {}", overview.unwrap_or(""), clean_genres)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_record() {
        let movie = MovieRecord::new(
            Some("Toy Story".to_string()),
            Some("Led by Woody, Andy's toys live happily in his room.".to_string()),
            Some("[{'id': 16, 'name': 'Animation'}, {'id': 35, 'name': 'Comedy'}]"),
        );
        assert_eq!(movie.clean_genres, "Animation Comedy");
        assert_eq!(
            movie.description,
            "Led by Woody, Andy's toys live happily in his room. Animation Comedy"
        );
        assert_eq!(movie.title(), "Toy Story");
    }

    #[test]
    fn test_empty_description() {
        let movie = MovieRecord::new(None, None, Some("garbage"));
        assert_eq!(movie.clean_genres, "");
        assert_eq!(movie.description, " ");
        assert_eq!(movie.title(), "");
        assert_eq!(movie.overview(), "");
    }
}
