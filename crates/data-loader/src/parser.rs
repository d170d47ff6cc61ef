//! Parser for the MovieLens-style CSV files.
//!
//! Two files are expected:
//! - movies.csv:  movieId,title,genres
//! - ratings.csv: userId,movieId,rating,timestamp
//!
//! Titles may be quoted and contain commas, so lines are split with a
//! quote-aware scanner rather than a plain `split(',')`. The `genres`
//! field uses a pipe-delimited multi-value encoding which is split into
//! a set here; the literal `(no genres listed)` marker becomes an empty
//! set and is handled at catalog insertion.

use crate::error::{DataLoadError, Result};
use crate::types::{Movie, Rating};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const NO_GENRES_MARKER: &str = "(no genres listed)";

/// Split one CSV line into fields, honoring double-quoted fields with
/// `""` escapes.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    // Escaped quote inside a quoted field
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_error(file: &str, line: usize, reason: impl Into<String>) -> DataLoadError {
    DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: reason.into(),
    }
}

/// Parse pipe-separated genre labels into a set.
///
/// Example: "Action|Adventure|Sci-Fi" -> {"Action", "Adventure", "Sci-Fi"}
fn parse_genres(s: &str) -> BTreeSet<String> {
    if s.is_empty() || s == NO_GENRES_MARKER {
        return BTreeSet::new();
    }
    s.split('|')
        .filter(|g| !g.is_empty())
        .map(|g| g.to_string())
        .collect()
}

/// Parse the movies.csv file.
///
/// Format: movieId,title,genres (with a header line)
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let content = fs::read_to_string(path)?;
    let mut movies = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Skip the header line
        if line_no == 1 && line.starts_with("movieId") {
            continue;
        }

        let fields = split_csv_line(line);
        if fields.len() != 3 {
            return Err(parse_error(
                "movies.csv",
                line_no,
                format!("Expected 3 fields, found {}", fields.len()),
            ));
        }

        let id = fields[0].parse().map_err(|e| {
            parse_error("movies.csv", line_no, format!("Invalid movieId: {}", e))
        })?;

        movies.push(Movie {
            id,
            title: fields[1].clone(),
            genres: parse_genres(&fields[2]),
        });
    }
    Ok(movies)
}

/// Parse the ratings.csv file.
///
/// Format: userId,movieId,rating,timestamp (with a header line)
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    let content = fs::read_to_string(path)?;
    let mut ratings = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line_no == 1 && line.starts_with("userId") {
            continue;
        }

        let fields = split_csv_line(line);
        if fields.len() != 4 {
            return Err(parse_error(
                "ratings.csv",
                line_no,
                format!("Expected 4 fields, found {}", fields.len()),
            ));
        }

        let rating = Rating {
            user_id: fields[0].parse().map_err(|e| {
                parse_error("ratings.csv", line_no, format!("Invalid userId: {}", e))
            })?,
            movie_id: fields[1].parse().map_err(|e| {
                parse_error("ratings.csv", line_no, format!("Invalid movieId: {}", e))
            })?,
            rating: fields[2].parse().map_err(|e| {
                parse_error("ratings.csv", line_no, format!("Invalid rating: {}", e))
            })?,
            timestamp: fields[3].parse().map_err(|e| {
                parse_error("ratings.csv", line_no, format!("Invalid timestamp: {}", e))
            })?,
        };
        ratings.push(rating);
    }
    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_line() {
        assert_eq!(
            split_csv_line("1,Toy Story (1995),Animation|Comedy"),
            vec!["1", "Toy Story (1995)", "Animation|Comedy"]
        );
    }

    #[test]
    fn test_split_quoted_title_with_comma() {
        assert_eq!(
            split_csv_line("11,\"American President, The (1995)\",Comedy|Drama|Romance"),
            vec!["11", "American President, The (1995)", "Comedy|Drama|Romance"]
        );
    }

    #[test]
    fn test_split_escaped_quote() {
        assert_eq!(
            split_csv_line("5,\"Say \"\"hi\"\" (2001)\",Comedy"),
            vec!["5", "Say \"hi\" (2001)", "Comedy"]
        );
    }

    #[test]
    fn test_parse_genres() {
        let genres = parse_genres("Action|Adventure|Sci-Fi");
        assert_eq!(genres.len(), 3);
        assert!(genres.contains("Sci-Fi"));
    }

    #[test]
    fn test_no_genres_marker_yields_empty_set() {
        assert!(parse_genres("(no genres listed)").is_empty());
    }

    #[test]
    fn test_non_numeric_rating_is_a_parse_error() {
        let dir = std::env::temp_dir().join("parser-bad-rating");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ratings.csv");
        std::fs::write(
            &path,
            "userId,movieId,rating,timestamp\n1,1,great,964982703\n",
        )
        .unwrap();

        match parse_ratings(&path).unwrap_err() {
            DataLoadError::ParseError { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("Invalid rating"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
