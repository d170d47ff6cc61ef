//! Core domain types for the movie catalog and ratings corpus.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

/// A movie in the catalog. Immutable after load.
///
/// Genres are kept as a set of labels from the ingestion boundary onward,
/// so membership and intersection checks downstream never re-parse the
/// pipe-delimited source encoding. `BTreeSet` keeps display order stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genres: BTreeSet<String>,
}

/// A single historical rating of a movie by a user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Rating value, 0.5 to 5.0 in the source data
    pub rating: f32,
    /// Unix timestamp when the rating was made
    pub timestamp: i64,
}

/// In-memory movie catalog with a genre index for fast per-genre lookups.
///
/// Movies with an empty genre set are rejected at insertion and counted,
/// so every stored movie can participate in genre scoring and diversity
/// checks.
#[derive(Debug, Default)]
pub struct Catalog {
    movies: HashMap<MovieId, Movie>,
    /// Movies grouped by genre (one movie can appear in multiple lists)
    genre_index: HashMap<String, Vec<MovieId>>,
    dropped_movies: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a movie, updating the genre index.
    ///
    /// Returns `false` (and counts the record as dropped) if the movie has
    /// no genres; such a movie could never be scored or diversified.
    pub fn insert_movie(&mut self, movie: Movie) -> bool {
        if movie.genres.is_empty() {
            self.dropped_movies += 1;
            return false;
        }
        for genre in &movie.genres {
            self.genre_index
                .entry(genre.clone())
                .or_default()
                .push(movie.id);
        }
        self.movies.insert(movie.id, movie);
        true
    }

    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// All movies carrying the given genre label.
    ///
    /// Returns an empty slice for unknown genres.
    pub fn movies_in_genre(&self, genre: &str) -> &[MovieId] {
        self.genre_index
            .get(genre)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over all movies in the catalog (unordered).
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    /// Every genre label present in the catalog, sorted.
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = self.genre_index.keys().map(String::as_str).collect();
        genres.sort_unstable();
        genres
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Number of movies rejected at insertion for having no genres.
    pub fn dropped_movies(&self) -> usize {
        self.dropped_movies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, title: &str, genres: &[&str]) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert_movie(movie(1, "Toy Story (1995)", &["Animation", "Comedy"])));

        let retrieved = catalog.get_movie(1).unwrap();
        assert_eq!(retrieved.title, "Toy Story (1995)");
        assert!(retrieved.genres.contains("Animation"));
        assert_eq!(catalog.movies_in_genre("Comedy"), &[1]);
        assert!(catalog.movies_in_genre("Horror").is_empty());
    }

    #[test]
    fn test_empty_genre_set_is_dropped() {
        let mut catalog = Catalog::new();
        assert!(!catalog.insert_movie(movie(7, "Untagged", &[])));
        assert!(catalog.get_movie(7).is_none());
        assert_eq!(catalog.dropped_movies(), 1);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_genre_listing_is_sorted() {
        let mut catalog = Catalog::new();
        catalog.insert_movie(movie(1, "A", &["Western", "Action"]));
        catalog.insert_movie(movie(2, "B", &["Drama"]));
        assert_eq!(catalog.genres(), vec!["Action", "Drama", "Western"]);
    }
}
