//! Aggregate rating statistics over the corpus.
//!
//! The aggregator reduces the ratings table to per-movie count and mean,
//! drops movies below the evidence floor, and min-max normalizes the
//! surviving counts into a popularity score. The result is a read-only
//! snapshot for the lifetime of a recommendation session; there is no
//! automatic invalidation, a stale snapshot stays stale until recomputed.

use data_loader::{MovieId, Rating};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Evidence floor: minimum rating count before a movie's average is
/// trusted.
pub const DEFAULT_MIN_RATINGS: u32 = 1000;

/// Derived statistics for one movie that passed the evidence floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovieStats {
    pub rating_count: u32,
    pub rating_mean: f32,
    /// Min-max normalized rating count among surviving movies, in [0,1]
    pub popularity_score: f32,
}

/// Read-only per-movie statistics, keyed by movie id.
#[derive(Debug, Default)]
pub struct StatsSnapshot {
    by_movie: HashMap<MovieId, MovieStats>,
    dropped_ratings: usize,
}

impl StatsSnapshot {
    pub fn get(&self, movie_id: MovieId) -> Option<&MovieStats> {
        self.by_movie.get(&movie_id)
    }

    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.by_movie.contains_key(&movie_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MovieId, &MovieStats)> {
        self.by_movie.iter().map(|(&id, stats)| (id, stats))
    }

    pub fn len(&self) -> usize {
        self.by_movie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_movie.is_empty()
    }

    /// Number of malformed rating records rejected before aggregation.
    pub fn dropped_ratings(&self) -> usize {
        self.dropped_ratings
    }
}

/// Compute the statistics snapshot for the full ratings corpus.
///
/// Ratings outside (0, 5] (or non-finite) are dropped and counted rather
/// than allowed to poison a movie's mean. An empty corpus produces an
/// empty snapshot; downstream code treats "no scorable movies" as a valid
/// state, not an error.
pub fn compute_stats(ratings: &[Rating], min_ratings: u32) -> StatsSnapshot {
    let mut groups: HashMap<MovieId, Vec<f32>> = HashMap::new();
    let mut dropped = 0usize;
    for r in ratings {
        if !r.rating.is_finite() || r.rating <= 0.0 || r.rating > 5.0 {
            dropped += 1;
            continue;
        }
        groups.entry(r.movie_id).or_default().push(r.rating);
    }
    if dropped > 0 {
        warn!(dropped, "dropped out-of-range rating records");
    }

    // Count and mean per movie, keeping only movies at or above the
    // evidence floor.
    let surviving: Vec<(MovieId, u32, f32)> = groups
        .par_iter()
        .filter(|(_, values)| values.len() as u32 >= min_ratings)
        .map(|(&movie_id, values)| {
            let count = values.len() as u32;
            // Accumulate in f64: an f32 running sum drifts visibly on
            // groups with tens of thousands of ratings.
            let sum: f64 = values.iter().map(|&v| v as f64).sum();
            let mean = (sum / count as f64) as f32;
            (movie_id, count, mean)
        })
        .collect();

    // Min-max scale the counts. When every survivor has the same count
    // (including the single-survivor case) the scale collapses; define
    // popularity as 1.0 instead of dividing by zero.
    let min_count = surviving.iter().map(|&(_, c, _)| c).min().unwrap_or(0);
    let max_count = surviving.iter().map(|&(_, c, _)| c).max().unwrap_or(0);
    let spread = (max_count - min_count) as f32;

    let by_movie = surviving
        .into_iter()
        .map(|(movie_id, rating_count, rating_mean)| {
            let popularity_score = if spread > 0.0 {
                (rating_count - min_count) as f32 / spread
            } else {
                1.0
            };
            (
                movie_id,
                MovieStats {
                    rating_count,
                    rating_mean,
                    popularity_score,
                },
            )
        })
        .collect();

    let snapshot = StatsSnapshot {
        by_movie,
        dropped_ratings: dropped,
    };
    debug!(
        movies = snapshot.len(),
        min_ratings, "computed statistics snapshot"
    );
    snapshot
}
