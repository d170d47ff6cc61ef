//! Blended match scoring for statistically-eligible movies.
//!
//! Every movie that survived the evidence floor gets a 0-5 match score
//! from three components: genre affinity, historical average rating, and
//! popularity. The component weights are fixed design constants; changing
//! them changes documented behavior, so they live here as named values
//! rather than configuration.

use crate::prefs::GenrePreferences;
use crate::stats::{MovieStats, StatsSnapshot};
use data_loader::{Catalog, Movie, MovieId};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Weight of the user's genre affinity in the final score.
pub const GENRE_WEIGHT: f32 = 0.6;
/// Weight of the historical average rating in the final score.
pub const RATING_WEIGHT: f32 = 0.25;
/// Weight of the popularity score in the final score.
pub const POPULARITY_WEIGHT: f32 = 0.15;

/// A movie joined with its statistics and computed match score.
///
/// Ephemeral: recomputed on every call, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: BTreeSet<String>,
    pub rating_mean: f32,
    pub rating_count: u32,
    pub score: f32,
}

/// Compute the blended 0-5 match score for one movie.
///
/// The genre component is the mean preference weight over the movie's
/// genres that carry an explicit entry; a movie outside every rated
/// genre scores 0 on that component rather than being skipped. The
/// rating component maps the 1-5 historical scale onto 0-1 (clamped at
/// 0 so a degenerate sub-1.0 mean cannot push the score below scale).
pub fn score_movie(movie: &Movie, stats: &MovieStats, prefs: &GenrePreferences) -> f32 {
    let mut sum = 0.0;
    let mut matched = 0u32;
    for genre in &movie.genres {
        if let Some(weight) = prefs.weight(genre) {
            sum += weight;
            matched += 1;
        }
    }
    let genre_score = if matched > 0 { sum / matched as f32 } else { 0.0 };

    let rating_score = ((stats.rating_mean - 1.0) / 4.0).max(0.0);

    genre_score * GENRE_WEIGHT
        + rating_score * 5.0 * RATING_WEIGHT
        + stats.popularity_score * 5.0 * POPULARITY_WEIGHT
}

/// Score every statistically-eligible movie in the catalog.
///
/// Movies absent from the snapshot never appear here; they are excluded
/// by the inner join, not scored as zero. The result is sorted by score
/// descending with ties broken by ascending movie id, so identical
/// inputs always produce the identical ranking.
pub fn score_movies(
    catalog: &Catalog,
    stats: &StatsSnapshot,
    prefs: &GenrePreferences,
) -> Vec<ScoredMovie> {
    let mut scored: Vec<ScoredMovie> = catalog
        .movies()
        .filter_map(|movie| {
            stats.get(movie.id).map(|movie_stats| ScoredMovie {
                movie_id: movie.id,
                title: movie.title.clone(),
                genres: movie.genres.clone(),
                rating_mean: movie_stats.rating_mean,
                rating_count: movie_stats.rating_count,
                score: score_movie(movie, movie_stats, prefs),
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.movie_id.cmp(&b.movie_id))
    });

    debug!(candidates = scored.len(), "scored eligible movies");
    scored
}
