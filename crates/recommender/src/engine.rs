//! Session-facing facade over the recommendation core.
//!
//! The `Recommender` owns the catalog (shared via `Arc`) and the
//! statistics snapshot computed once at construction. The snapshot
//! depends only on the corpus, so one `Recommender` can be shared
//! read-only across sessions; per-session preference state stays outside
//! and is passed explicitly into each call.

use crate::prefs::{GenrePreferences, UserRatings};
use crate::score::{score_movies, ScoredMovie};
use crate::seed::{popular_in_genre, SeedMovie};
use crate::select::select_diverse;
use crate::stats::{compute_stats, StatsSnapshot, DEFAULT_MIN_RATINGS};
use data_loader::{Catalog, Rating};
use std::sync::Arc;
use tracing::info;

/// Default recommendation count for batch callers.
pub const DEFAULT_BATCH_COUNT: usize = 5;
/// Default recommendation count for interactive sessions.
pub const DEFAULT_INTERACTIVE_COUNT: usize = 10;

/// Tunable knobs exposed by the core.
#[derive(Debug, Clone, Copy)]
pub struct RecommenderConfig {
    /// Evidence floor: movies with fewer ratings are never recommended.
    pub min_ratings: u32,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            min_ratings: DEFAULT_MIN_RATINGS,
        }
    }
}

pub struct Recommender {
    catalog: Arc<Catalog>,
    stats: StatsSnapshot,
}

impl Recommender {
    /// Build a recommender, computing the statistics snapshot once.
    pub fn new(catalog: Arc<Catalog>, ratings: &[Rating], config: RecommenderConfig) -> Self {
        let stats = compute_stats(ratings, config.min_ratings);
        info!(
            movies = catalog.len(),
            eligible = stats.len(),
            min_ratings = config.min_ratings,
            "recommender ready"
        );
        Self { catalog, stats }
    }

    /// Top `n` diverse recommendations for the given session state.
    ///
    /// An empty result is a valid outcome (empty corpus, or everything
    /// eligible already rated), never an error.
    pub fn recommend(
        &self,
        prefs: &GenrePreferences,
        user_ratings: &UserRatings,
        n: usize,
    ) -> Vec<ScoredMovie> {
        let scored = score_movies(&self.catalog, &self.stats, prefs);
        select_diverse(scored, user_ratings, prefs, n)
    }

    /// Popular movies within one genre, for the cold-start questionnaire.
    pub fn popular_in_genre(&self, genre: &str, n: usize) -> Vec<SeedMovie> {
        popular_in_genre(&self.catalog, &self.stats, genre, n)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn stats(&self) -> &StatsSnapshot {
        &self.stats
    }
}
