//! Seed lists for the cold-start questionnaire.
//!
//! Before any preferences exist, the UI asks the user to rate a handful
//! of well-known movies. This module picks those movies: popular titles
//! within one genre, never part of the final recommendation ranking.

use crate::stats::StatsSnapshot;
use data_loader::{Catalog, MovieId};
use serde::Serialize;

/// A popular movie offered for explicit rating during cold start.
#[derive(Debug, Clone, Serialize)]
pub struct SeedMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub rating_mean: f32,
    pub rating_count: u32,
}

/// Top `n` popular movies within `genre`, joined with their statistics.
///
/// Movies below the evidence floor are dropped by the join. Ordering is
/// rating count descending, then mean descending, then movie id, so the
/// questionnaire is stable across runs.
pub fn popular_in_genre(
    catalog: &Catalog,
    stats: &StatsSnapshot,
    genre: &str,
    n: usize,
) -> Vec<SeedMovie> {
    let mut seeds: Vec<SeedMovie> = catalog
        .movies_in_genre(genre)
        .iter()
        .filter_map(|&movie_id| {
            let movie = catalog.get_movie(movie_id)?;
            let movie_stats = stats.get(movie_id)?;
            Some(SeedMovie {
                movie_id,
                title: movie.title.clone(),
                rating_mean: movie_stats.rating_mean,
                rating_count: movie_stats.rating_count,
            })
        })
        .collect();

    seeds.sort_by(|a, b| {
        b.rating_count
            .cmp(&a.rating_count)
            .then(
                b.rating_mean
                    .partial_cmp(&a.rating_mean)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
            .then(a.movie_id.cmp(&b.movie_id))
    });
    seeds.truncate(n);
    seeds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_stats;
    use data_loader::{Movie, Rating};

    fn movie(id: MovieId, title: &str, genres: &[&str]) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn ratings_for(movie_id: MovieId, count: u32, value: f32) -> Vec<Rating> {
        (0..count)
            .map(|u| Rating {
                user_id: u,
                movie_id,
                rating: value,
                timestamp: 0,
            })
            .collect()
    }

    #[test]
    fn test_popular_in_genre_ordering() {
        let mut catalog = Catalog::new();
        catalog.insert_movie(movie(1, "Big Action", &["Action"]));
        catalog.insert_movie(movie(2, "Bigger Action", &["Action", "Thriller"]));
        catalog.insert_movie(movie(3, "Niche Action", &["Action"]));
        catalog.insert_movie(movie(4, "Drama", &["Drama"]));

        let mut ratings = ratings_for(1, 20, 4.0);
        ratings.extend(ratings_for(2, 30, 3.5));
        ratings.extend(ratings_for(3, 2, 5.0)); // below the floor
        ratings.extend(ratings_for(4, 40, 4.5));
        let stats = compute_stats(&ratings, 10);

        let seeds = popular_in_genre(&catalog, &stats, "Action", 5);
        assert_eq!(
            seeds.iter().map(|s| s.movie_id).collect::<Vec<_>>(),
            vec![2, 1]
        );
    }

    #[test]
    fn test_count_ties_break_on_mean() {
        let mut catalog = Catalog::new();
        catalog.insert_movie(movie(1, "Good", &["Action"]));
        catalog.insert_movie(movie(2, "Better", &["Action"]));

        let mut ratings = ratings_for(1, 10, 3.0);
        ratings.extend(ratings_for(2, 10, 4.5));
        let stats = compute_stats(&ratings, 5);

        let seeds = popular_in_genre(&catalog, &stats, "Action", 2);
        assert_eq!(seeds[0].movie_id, 2);
    }

    #[test]
    fn test_unknown_genre_is_empty() {
        let catalog = Catalog::new();
        let stats = compute_stats(&[], 1000);
        assert!(popular_in_genre(&catalog, &stats, "Kaiju", 5).is_empty());
    }

    #[test]
    fn test_truncates_to_n() {
        let mut catalog = Catalog::new();
        let mut ratings = Vec::new();
        for id in 1..=6 {
            catalog.insert_movie(movie(id, &format!("Action {}", id), &["Action"]));
            ratings.extend(ratings_for(id, 10 + id, 4.0));
        }
        let stats = compute_stats(&ratings, 5);
        assert_eq!(popular_in_genre(&catalog, &stats, "Action", 3).len(), 3);
    }
}
