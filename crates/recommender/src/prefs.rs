//! Per-session preference state.
//!
//! Both containers are owned by one session and passed explicitly into
//! the scoring and selection functions, so the engine itself stays free
//! of hidden mutable state.

use data_loader::MovieId;
use std::collections::HashMap;

/// Weight at or above which a preferred genre counts as *primary* for
/// diversity enforcement.
pub const PRIMARY_GENRE_THRESHOLD: f32 = 4.0;

/// The user's per-genre affinity weights on a 1-5 scale.
#[derive(Debug, Clone, Default)]
pub struct GenrePreferences {
    weights: HashMap<String, f32>,
}

impl GenrePreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an affinity weight for a genre.
    ///
    /// Returns `false` without storing anything if the weight is outside
    /// the 1-5 scale.
    pub fn set(&mut self, genre: impl Into<String>, weight: f32) -> bool {
        if !weight.is_finite() || !(1.0..=5.0).contains(&weight) {
            return false;
        }
        self.weights.insert(genre.into(), weight);
        true
    }

    pub fn weight(&self, genre: &str) -> Option<f32> {
        self.weights.get(genre).copied()
    }

    /// Whether the genre is both rated and rated highly (>= 4).
    ///
    /// Primary genres drive diversity enforcement only, never scoring.
    pub fn is_primary(&self, genre: &str) -> bool {
        self.weight(genre)
            .is_some_and(|w| w >= PRIMARY_GENRE_THRESHOLD)
    }

    /// The user's `n` most-preferred genres, highest weight first.
    ///
    /// Ties are broken by genre name so the order is deterministic.
    pub fn top_genres(&self, n: usize) -> Vec<&str> {
        let mut genres: Vec<(&str, f32)> = self
            .weights
            .iter()
            .map(|(g, &w)| (g.as_str(), w))
            .collect();
        genres.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(b.0))
        });
        genres.into_iter().take(n).map(|(g, _)| g).collect()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Explicit per-movie ratings the user has supplied this session.
///
/// A rating of 0 means "do not record": it removes any stored entry
/// instead of storing a zero, otherwise "skipped" and "rated zero stars"
/// would be indistinguishable.
#[derive(Debug, Clone, Default)]
pub struct UserRatings {
    ratings: HashMap<MovieId, f32>,
}

impl UserRatings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an explicit rating in (0, 5]; 0 clears the entry.
    ///
    /// Returns `false` for ratings outside [0, 5].
    pub fn rate(&mut self, movie_id: MovieId, rating: f32) -> bool {
        if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
            return false;
        }
        if rating == 0.0 {
            self.ratings.remove(&movie_id);
        } else {
            self.ratings.insert(movie_id, rating);
        }
        true
    }

    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.ratings.contains_key(&movie_id)
    }

    pub fn get(&self, movie_id: MovieId) -> Option<f32> {
        self.ratings.get(&movie_id).copied()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_out_of_scale_weights() {
        let mut prefs = GenrePreferences::new();
        assert!(prefs.set("Action", 5.0));
        assert!(!prefs.set("Drama", 0.5));
        assert!(!prefs.set("Comedy", 6.0));
        assert!(!prefs.set("Horror", f32::NAN));

        assert_eq!(prefs.weight("Action"), Some(5.0));
        assert_eq!(prefs.len(), 1);
    }

    #[test]
    fn test_primary_threshold() {
        let mut prefs = GenrePreferences::new();
        prefs.set("Action", 4.0);
        prefs.set("Drama", 3.5);

        assert!(prefs.is_primary("Action"));
        assert!(!prefs.is_primary("Drama"));
        assert!(!prefs.is_primary("Unrated"));
    }

    #[test]
    fn test_top_genres_deterministic_order() {
        let mut prefs = GenrePreferences::new();
        prefs.set("Western", 4.0);
        prefs.set("Action", 4.0);
        prefs.set("Drama", 5.0);

        assert_eq!(prefs.top_genres(2), vec!["Drama", "Action"]);
        assert_eq!(prefs.top_genres(10).len(), 3);
    }

    #[test]
    fn test_zero_rating_is_not_stored() {
        let mut ratings = UserRatings::new();
        assert!(ratings.rate(1, 0.0));
        assert!(!ratings.contains(1));

        assert!(ratings.rate(1, 4.5));
        assert!(ratings.contains(1));

        // Re-rating with 0 clears the stored entry
        assert!(ratings.rate(1, 0.0));
        assert!(!ratings.contains(1));
        assert!(ratings.is_empty());
    }

    #[test]
    fn test_rate_rejects_out_of_range() {
        let mut ratings = UserRatings::new();
        assert!(!ratings.rate(1, -1.0));
        assert!(!ratings.rate(1, 5.5));
        assert!(ratings.is_empty());
    }
}
