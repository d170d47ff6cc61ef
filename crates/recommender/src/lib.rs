//! # Recommender Crate
//!
//! The recommendation core: aggregate statistics over a ratings corpus,
//! blend them with the user's genre preferences into per-movie match
//! scores, and pick a diverse top-N.
//!
//! ## Components
//!
//! - **stats**: per-movie count/mean/popularity with an evidence floor
//! - **prefs**: per-session genre weights and explicit movie ratings
//! - **score**: the blended 0-5 match score
//! - **select**: greedy diversity-constrained top-N selection
//! - **seed**: popular-in-genre lists for cold-start questionnaires
//! - **engine**: session facade tying the pieces together
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::{GenrePreferences, Recommender, RecommenderConfig, UserRatings};
//! use std::sync::Arc;
//!
//! let recommender = Recommender::new(catalog, &ratings, RecommenderConfig::default());
//!
//! let mut prefs = GenrePreferences::new();
//! prefs.set("Action", 5.0);
//! prefs.set("Comedy", 3.0);
//!
//! let picks = recommender.recommend(&prefs, &UserRatings::new(), 10);
//! for movie in picks {
//!     println!("{} ({:.2}/5)", movie.title, movie.score);
//! }
//! ```
//!
//! Everything here is a pure or near-pure transformation over in-memory
//! tables: no I/O, no shared mutable state. The statistics snapshot is
//! computed once per `Recommender` and shared read-only; session state
//! (`GenrePreferences`, `UserRatings`) is passed explicitly into each
//! call so concurrent sessions stay isolated.

pub mod engine;
pub mod prefs;
pub mod score;
pub mod seed;
pub mod select;
pub mod stats;

// Re-export the main types
pub use engine::{
    Recommender, RecommenderConfig, DEFAULT_BATCH_COUNT, DEFAULT_INTERACTIVE_COUNT,
};
pub use prefs::{GenrePreferences, UserRatings, PRIMARY_GENRE_THRESHOLD};
pub use score::{ScoredMovie, GENRE_WEIGHT, POPULARITY_WEIGHT, RATING_WEIGHT};
pub use seed::SeedMovie;
pub use stats::{compute_stats, MovieStats, StatsSnapshot, DEFAULT_MIN_RATINGS};
