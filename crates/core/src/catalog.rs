//! Catalog rules shared by the film store and the HTTP layer.

use std::str::FromStr;

use crate::error::CoreError;

/// Minimum film name length, in characters.
pub const FILM_NAME_MIN_LEN: u64 = 1;
/// Maximum film name length, in characters.
pub const FILM_NAME_MAX_LEN: u64 = 150;
/// Maximum film description length, in characters.
pub const FILM_DESCRIPTION_MAX_LEN: u64 = 1000;
/// Lowest allowed film rating.
pub const FILM_RATING_MIN: i32 = 0;
/// Highest allowed film rating.
pub const FILM_RATING_MAX: i32 = 10;

/// Column a film listing can be ordered by.
///
/// Unknown keys are rejected with [`CoreError::InvalidSortField`]; there is
/// no default ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilmSortField {
    Rating,
    Name,
    CreatedAt,
}

impl FilmSortField {
    /// The `ORDER BY` column for this key. Always one of a fixed set of
    /// identifiers, never user text.
    pub fn column(self) -> &'static str {
        match self {
            FilmSortField::Rating => "rating",
            FilmSortField::Name => "name",
            FilmSortField::CreatedAt => "created_at",
        }
    }
}

impl FromStr for FilmSortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(FilmSortField::Rating),
            "name" => Ok(FilmSortField::Name),
            "created_at" => Ok(FilmSortField::CreatedAt),
            other => Err(CoreError::InvalidSortField(other.to_string())),
        }
    }
}

/// Which name a film substring search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilmSearchKind {
    /// Match the film's own name.
    FilmName,
    /// Match the name of any actor associated with the film.
    ActorName,
}

impl FromStr for FilmSearchKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FilmSearchKind::FilmName),
            "actor" => Ok(FilmSearchKind::ActorName),
            other => Err(CoreError::Validation(format!(
                "unknown search kind '{other}', expected 'name' or 'actor'"
            ))),
        }
    }
}

/// Build a `LIKE` pattern that matches `part` anywhere in a string.
///
/// `%`, `_` and the escape character itself are escaped so user input is
/// matched literally. Queries using the result must declare `ESCAPE '\'`.
pub fn contains_pattern(part: &str) -> String {
    let mut pattern = String::with_capacity(part.len() + 2);
    pattern.push('%');
    for c in part.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_parses_known_keys() {
        assert_eq!("rating".parse::<FilmSortField>().unwrap(), FilmSortField::Rating);
        assert_eq!("name".parse::<FilmSortField>().unwrap(), FilmSortField::Name);
        assert_eq!(
            "created_at".parse::<FilmSortField>().unwrap(),
            FilmSortField::CreatedAt
        );
    }

    #[test]
    fn sort_field_rejects_unknown_key() {
        let err = "bogus".parse::<FilmSortField>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidSortField(ref f) if f == "bogus"));
    }

    #[test]
    fn sort_field_columns_are_fixed_identifiers() {
        assert_eq!(FilmSortField::CreatedAt.column(), "created_at");
        assert_eq!(FilmSortField::Rating.column(), "rating");
    }

    #[test]
    fn search_kind_parses() {
        assert_eq!("name".parse::<FilmSearchKind>().unwrap(), FilmSearchKind::FilmName);
        assert_eq!("actor".parse::<FilmSearchKind>().unwrap(), FilmSearchKind::ActorName);
        assert!(matches!(
            "title".parse::<FilmSearchKind>(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn contains_pattern_wraps_plain_text() {
        assert_eq!(contains_pattern("War"), "%War%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\"), "%c:\\\\%");
    }

    #[test]
    fn contains_pattern_leaves_quotes_alone() {
        // Quotes are harmless because the pattern is always bound.
        assert_eq!(contains_pattern("'; DROP TABLE films; --"), "%'; DROP TABLE films; --%");
    }
}
