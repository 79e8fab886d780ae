//! Pure filtering of the visible collection.
//!
//! Both functions are side-effect free and order-preserving; they run over
//! whatever cached sequence the controller currently holds, regardless of
//! which backend produced it.

use crate::types::{FilterSpec, Movie};

/// Computes the visible subset of the collection for a filter spec.
///
/// A movie stays visible iff its status matches (or the status filter is
/// all), its genre matches (or the genre filter is all), and its title
/// contains the search term case-insensitively (or the term is empty).
/// Input order is preserved; an empty input yields an empty output.
pub fn visible(movies: &[Movie], filter: &FilterSpec) -> Vec<Movie> {
    let search = filter.search.to_lowercase();

    movies
        .iter()
        .filter(|movie| {
            let matches_status = filter.status.is_none() || filter.status == Some(movie.status);
            let matches_genre = filter
                .genre
                .as_ref()
                .is_none_or(|genre| &movie.genre == genre);
            let matches_search =
                search.is_empty() || movie.title.to_lowercase().contains(&search);
            matches_status && matches_genre && matches_search
        })
        .cloned()
        .collect()
}

/// The genre options offered to the user: the sorted set of distinct
/// non-empty genres present in the collection. Recomputed whenever the
/// collection changes.
pub fn genre_options(movies: &[Movie]) -> Vec<String> {
    let mut genres: Vec<String> = movies
        .iter()
        .map(|movie| movie.genre.clone())
        .filter(|genre| !genre.is_empty())
        .collect();
    genres.sort();
    genres.dedup();
    genres
}
