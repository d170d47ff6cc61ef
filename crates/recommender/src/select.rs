//! Greedy diversity-constrained selection over a ranked candidate list.

use crate::prefs::{GenrePreferences, UserRatings};
use crate::score::ScoredMovie;
use std::collections::HashSet;
use tracing::debug;

/// The first two acceptances skip the genre-overlap check, letting the
/// two globally-best movies through regardless of overlap.
pub const UNCONSTRAINED_SLOTS: usize = 2;

/// Pick up to `n` movies from the ranked list, enforcing genre diversity.
///
/// `scored` must already be ordered best-first (as produced by
/// [`crate::score::score_movies`]). Movies the user has already rated are
/// excluded outright. From the third acceptance onward a candidate is
/// skipped when any of its *primary* genres (preference weight >= 4) was
/// already covered by an accepted movie. Running out of candidates before
/// reaching `n` is a valid outcome, not an error.
pub fn select_diverse(
    scored: Vec<ScoredMovie>,
    user_ratings: &UserRatings,
    prefs: &GenrePreferences,
    n: usize,
) -> Vec<ScoredMovie> {
    let candidates = scored.len();
    let mut selected: Vec<ScoredMovie> = Vec::with_capacity(n.min(candidates));
    let mut seen_genres: HashSet<String> = HashSet::new();

    for movie in scored {
        if selected.len() >= n {
            break;
        }
        if user_ratings.contains(movie.movie_id) {
            continue;
        }

        let primary: Vec<&String> = movie
            .genres
            .iter()
            .filter(|genre| prefs.is_primary(genre))
            .collect();
        let overlaps = primary.iter().any(|genre| seen_genres.contains(*genre));

        if !overlaps || selected.len() < UNCONSTRAINED_SLOTS {
            seen_genres.extend(primary.into_iter().cloned());
            selected.push(movie);
        }
    }

    debug!(
        candidates,
        selected = selected.len(),
        covered_genres = seen_genres.len(),
        "diversity selection finished"
    );
    selected
}
