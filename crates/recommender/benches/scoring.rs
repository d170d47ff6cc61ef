//! Benchmarks for scoring and diversity selection.
//!
//! Run with: cargo bench --package recommender
//!
//! Uses a synthetic catalog so the benchmark does not depend on the
//! dataset files being present.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Catalog, Movie, Rating};
use recommender::{GenrePreferences, Recommender, RecommenderConfig, UserRatings};
use std::sync::Arc;

const GENRES: &[&str] = &[
    "Action", "Adventure", "Comedy", "Crime", "Drama", "Fantasy", "Horror", "Romance", "Sci-Fi",
    "Thriller",
];

fn synthetic_setup(movies: u32, ratings_per_movie: u32) -> (Arc<Catalog>, Vec<Rating>) {
    let mut catalog = Catalog::new();
    let mut ratings = Vec::new();

    for id in 1..=movies {
        let genres: Vec<&str> = (0..=(id % 3))
            .map(|k| GENRES[((id + k) as usize) % GENRES.len()])
            .collect();
        catalog.insert_movie(Movie {
            id,
            title: format!("Synthetic Movie {}", id),
            genres: genres.into_iter().map(String::from).collect(),
        });

        // Spread counts and means so popularity scaling has real work
        let count = ratings_per_movie + id % 500;
        let value = 2.5 + (id % 5) as f32 * 0.5;
        for user in 0..count {
            ratings.push(Rating {
                user_id: user,
                movie_id: id,
                rating: value,
                timestamp: 1_000_000,
            });
        }
    }
    (Arc::new(catalog), ratings)
}

fn sample_prefs() -> GenrePreferences {
    let mut prefs = GenrePreferences::new();
    prefs.set("Action", 5.0);
    prefs.set("Thriller", 4.5);
    prefs.set("Sci-Fi", 4.0);
    prefs.set("Comedy", 3.0);
    prefs.set("Drama", 2.0);
    prefs
}

fn bench_compute_stats(c: &mut Criterion) {
    let (_, ratings) = synthetic_setup(2000, 50);

    c.bench_function("compute_stats_2k_movies", |b| {
        b.iter(|| {
            let snapshot = recommender::compute_stats(black_box(&ratings), black_box(25));
            black_box(snapshot)
        })
    });
}

fn bench_recommend(c: &mut Criterion) {
    let (catalog, ratings) = synthetic_setup(2000, 50);
    let recommender =
        Recommender::new(catalog, &ratings, RecommenderConfig { min_ratings: 25 });
    let prefs = sample_prefs();
    let user_ratings = UserRatings::new();

    c.bench_function("recommend_top_10", |b| {
        b.iter(|| {
            let picks =
                recommender.recommend(black_box(&prefs), black_box(&user_ratings), black_box(10));
            black_box(picks)
        })
    });
}

fn bench_popular_in_genre(c: &mut Criterion) {
    let (catalog, ratings) = synthetic_setup(2000, 50);
    let recommender =
        Recommender::new(catalog, &ratings, RecommenderConfig { min_ratings: 25 });

    c.bench_function("popular_in_genre_top_5", |b| {
        b.iter(|| {
            let seeds = recommender.popular_in_genre(black_box("Action"), black_box(5));
            black_box(seeds)
        })
    });
}

criterion_group!(
    benches,
    bench_compute_stats,
    bench_recommend,
    bench_popular_in_genre
);
criterion_main!(benches);
