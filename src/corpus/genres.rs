use super::literal::{parse_literal, Literal, LiteralError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenreParseError {
    #[error("genre field is missing")]
    Missing,
    #[error("genre field is not a valid literal: {0}")]
    Literal(#[from] LiteralError),
    #[error("genre field is not a list")]
    NotAList,
    #[error("genre entry {0} has no string \"name\"")]
    MissingName(usize),
}

/// Parse a serialized genre list and return the genre names in order.
pub fn parse_genre_names(raw: Option<&str>) -> Result<Vec<String>, GenreParseError> {
    let raw = raw.ok_or(GenreParseError::Missing)?;

    let items = match parse_literal(raw)? {
        Literal::List(items) | Literal::Tuple(items) => items,
        // Iterating a string yields characters, and those cannot be indexed
        // by "name"; only an empty string gets through.
        // The same goes for the keys of a dict.
        Literal::Str(s) if s.is_empty() => Vec::new(),
        Literal::Dict(entries) if entries.is_empty() => Vec::new(),
        Literal::Str(_) | Literal::Dict(_) => return Err(GenreParseError::MissingName(0)),
        _ => return Err(GenreParseError::NotAList),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.get("name")
                .and_then(Literal::as_str)
                .map(str::to_string)
                .ok_or(GenreParseError::MissingName(i))
        })
        .collect()
}

/// Space-joined genre names, or the empty string when the field cannot be
/// parsed.
pub fn clean_genres(raw: Option<&str>) -> String {
    parse_genre_names(raw)
        .map(|names| names.join(" "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_genres() {
        assert_eq!(
            clean_genres(Some("[{'id': 16, 'name': 'Animation'}, {'id': 35, 'name': 'Comedy'}, {'id': 10751, 'name': 'Family'}]")),
            "Animation Comedy Family"
        );
        assert_eq!(clean_genres(Some(r#"[{"name":"Comedy"}]"#)), "Comedy");
        assert_eq!(clean_genres(Some("[]")), "");
    }

    #[test]
    fn test_clean_genres_degrades_to_empty() {
        assert_eq!(clean_genres(None), "");
        assert_eq!(clean_genres(Some("not a list")), "");
        assert_eq!(clean_genres(Some("[{'name': 'Drama'")), "");
        assert_eq!(clean_genres(Some("[{'id': 18}]")), "");
        assert_eq!(clean_genres(Some("[{'name': 18}]")), "");
        assert_eq!(clean_genres(Some("['Drama']")), "");
        assert_eq!(clean_genres(Some("{'name': 'Drama'}")), "");
        assert_eq!(clean_genres(Some("42")), "");
    }

    #[test]
    fn test_clean_genres_python_quirks() {
        assert_eq!(clean_genres(Some("[{'name': u'Comedy'}, {'name': r'Drama'}]")), "Comedy Drama");
        assert_eq!(clean_genres(Some("[{'name': 'A', 'name': 'B'}]")), "B");
        assert_eq!(clean_genres(Some("[{'name': b'Comedy'}]")), "");
    }

    #[test]
    fn test_deeply_nested_genre_cell() {
        assert_eq!(clean_genres(Some(&"[".repeat(200_000))), "");
        assert!(matches!(
            parse_genre_names(Some(&"[".repeat(200_000))),
            Err(GenreParseError::Literal(LiteralError::TooDeep))
        ));
    }

    #[test]
    fn test_parse_genre_names_errors() {
        assert_eq!(parse_genre_names(None), Err(GenreParseError::Missing));
        assert_eq!(parse_genre_names(Some("7")), Err(GenreParseError::NotAList));
        assert_eq!(
            parse_genre_names(Some("[{'name': 'Drama'}, {'id': 1}]")),
            Err(GenreParseError::MissingName(1))
        );
        assert!(matches!(
            parse_genre_names(Some("[")),
            Err(GenreParseError::Literal(_))
        ));
    }
}
