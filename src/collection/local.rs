use chrono::Utc;

use crate::{
    error::ApiError,
    store::{KEY_MOVIES, KeyValueStore},
    types::{FilterSpec, Movie, MovieDraft, MoviePatch, StatsSummary, WatchStatus},
};

/// Collection backend over the local JSON store.
///
/// The whole collection is read, mutated, and written back per operation;
/// there is a single writer by design, so no locking discipline is needed.
pub struct LocalCollection {
    store: KeyValueStore,
}

impl LocalCollection {
    pub fn new(store: KeyValueStore) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<Movie>, ApiError> {
        Ok(self.store.get::<Vec<Movie>>(KEY_MOVIES).await?.unwrap_or_default())
    }

    async fn persist(&self, movies: &Vec<Movie>) -> Result<(), ApiError> {
        self.store.set(KEY_MOVIES, movies).await?;
        Ok(())
    }

    /// Mints an identifier from the current time, bumped past anything
    /// already in the collection. Unique within a session by construction.
    fn mint_id(movies: &[Movie]) -> i64 {
        let mut id = Utc::now().timestamp_millis();
        while movies.iter().any(|m| m.id == id) {
            id += 1;
        }
        id
    }

    pub async fn list(&self, filter: &FilterSpec) -> Result<Vec<Movie>, ApiError> {
        let mut movies = self.load().await?;
        if let Some(status) = filter.status {
            movies.retain(|m| m.status == status);
        }
        if let Some(genre) = &filter.genre {
            movies.retain(|m| &m.genre == genre);
        }
        Ok(movies)
    }

    pub async fn get(&self, id: i64) -> Result<Movie, ApiError> {
        let movies = self.load().await?;
        movies
            .into_iter()
            .find(|m| m.id == id)
            .ok_or(ApiError::NotFound)
    }

    pub async fn create(&mut self, draft: MovieDraft) -> Result<Movie, ApiError> {
        let mut movies = self.load().await?;

        let movie = Movie {
            id: Self::mint_id(&movies),
            title: draft.title,
            director: draft.director,
            year: draft.year,
            genre: draft.genre,
            rating: draft.rating,
            status: draft.status,
            review: draft.review,
            is_favorite: draft.is_favorite,
            date_added: Some(Utc::now()),
        };

        movies.push(movie.clone());
        self.persist(&movies).await?;
        Ok(movie)
    }

    pub async fn update(&mut self, id: i64, patch: MoviePatch) -> Result<Movie, ApiError> {
        let mut movies = self.load().await?;
        let movie = movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ApiError::NotFound)?;

        patch.apply_to(movie);
        let updated = movie.clone();
        self.persist(&movies).await?;
        Ok(updated)
    }

    pub async fn remove(&mut self, id: i64) -> Result<(), ApiError> {
        let mut movies = self.load().await?;
        let before = movies.len();
        movies.retain(|m| m.id != id);
        if movies.len() == before {
            return Err(ApiError::NotFound);
        }
        self.persist(&movies).await?;
        Ok(())
    }

    pub async fn toggle_favorite(&mut self, id: i64) -> Result<bool, ApiError> {
        let mut movies = self.load().await?;
        let movie = movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ApiError::NotFound)?;

        movie.is_favorite = !movie.is_favorite;
        let flag = movie.is_favorite;
        self.persist(&movies).await?;
        Ok(flag)
    }

    pub async fn stats(&self) -> Result<StatsSummary, ApiError> {
        let movies = self.load().await?;
        let count = |status: WatchStatus| movies.iter().filter(|m| m.status == status).count() as u64;

        Ok(StatsSummary {
            total: movies.len() as u64,
            watched: count(WatchStatus::Watched),
            watching: count(WatchStatus::Watching),
            want_to_watch: count(WatchStatus::WantToWatch),
            favorites: movies.iter().filter(|m| m.is_favorite).count() as u64,
            user_info: None,
        })
    }
}
