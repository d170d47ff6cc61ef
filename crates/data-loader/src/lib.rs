//! # Data Loader Crate
//!
//! This crate loads a MovieLens-style dataset (movies.csv + ratings.csv)
//! into in-memory tables for the recommendation core.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Rating, Catalog)
//! - **parser**: Parse the CSV files into Rust structs
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::load_from_files;
//! use std::path::Path;
//!
//! let (catalog, ratings) = load_from_files(Path::new("data/ml-25m"))?;
//! println!("{} movies, {} ratings", catalog.len(), ratings.len());
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Catalog, Movie, MovieId, Rating, UserId};

use std::path::Path;
use tracing::{info, warn};

/// Load the movie catalog and ratings corpus from a dataset directory.
///
/// The two files are parsed in parallel. Movies with no genres are
/// dropped at catalog insertion and the count is logged; structural
/// damage (bad line, missing column) fails the whole load with a
/// descriptive error instead.
pub fn load_from_files(data_dir: &Path) -> Result<(Catalog, Vec<Rating>)> {
    let movies_path = data_dir.join("movies.csv");
    let ratings_path = data_dir.join("ratings.csv");

    let (movies, ratings) = rayon::join(
        || parser::parse_movies(&movies_path),
        || parser::parse_ratings(&ratings_path),
    );
    let movies = movies?;
    let ratings = ratings?;

    let mut catalog = Catalog::new();
    for movie in movies {
        catalog.insert_movie(movie);
    }

    if catalog.dropped_movies() > 0 {
        warn!(
            dropped = catalog.dropped_movies(),
            "dropped movies with no genre labels"
        );
    }
    info!(
        movies = catalog.len(),
        ratings = ratings.len(),
        "loaded dataset from {}",
        data_dir.display()
    );

    Ok((catalog, ratings))
}
