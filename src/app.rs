//! Application controller.
//!
//! Ties the session, the collection client, and the cached collection
//! together. The cache is the single authoritative view: every mutation
//! applies the backend's returned record to it atomically, and a failed
//! operation leaves it untouched. Session expiry reported by any operation
//! is handled here, centrally, before the error is re-surfaced.

use crate::{
    api::RemoteApi,
    collection::{CollectionClient, LocalCollection, RemoteCollection},
    config::Mode,
    error::ApiError,
    filter,
    session::SessionManager,
    store::KeyValueStore,
    types::{FilterSpec, Movie, MovieDraft, MoviePatch, Role, StatsSummary},
};

pub struct App {
    pub session: SessionManager,
    client: CollectionClient,
    mode: Mode,
    movies: Vec<Movie>,
    filter: FilterSpec,
    loading_movies: bool,
    last_error: Option<String>,
}

impl App {
    pub fn local(store: KeyValueStore) -> Self {
        Self {
            session: SessionManager::new(store.clone()),
            client: CollectionClient::local(LocalCollection::new(store)),
            mode: Mode::Local,
            movies: Vec::new(),
            filter: FilterSpec::default(),
            loading_movies: false,
            last_error: None,
        }
    }

    pub fn remote(store: KeyValueStore, base_url: impl Into<String>) -> Self {
        Self {
            session: SessionManager::new(store),
            client: CollectionClient::remote(RemoteCollection::new(RemoteApi::new(base_url))),
            mode: Mode::Remote,
            movies: Vec::new(),
            filter: FilterSpec::default(),
            loading_movies: false,
            last_error: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True once collection operations may be issued: always in local mode,
    /// only with a verified session in remote mode.
    pub fn ready(&self) -> bool {
        match self.mode {
            Mode::Local => true,
            Mode::Remote => self.session.is_authenticated(),
        }
    }

    /// Restores the session from the persisted token (remote mode) without
    /// touching the collection.
    pub async fn restore_session(&mut self) -> Result<(), ApiError> {
        if let Some(api) = self.client.remote_api_mut() {
            self.session.initialize(api).await?;
        }
        Ok(())
    }

    /// Restores the session and, once ready, loads the collection with the
    /// current filter hints.
    pub async fn initialize(&mut self) -> Result<(), ApiError> {
        self.restore_session().await?;
        if self.ready() {
            self.load_movies().await?;
        }
        Ok(())
    }

    /// Logs in against the remote backend and loads the collection.
    pub async fn login(&mut self, username: &str, role: Role) -> Result<(), ApiError> {
        let Some(api) = self.client.remote_api_mut() else {
            return Err(ApiError::Auth(
                "login is only available in remote mode".to_string(),
            ));
        };
        self.session.login(api, username, role).await?;
        self.load_movies().await?;
        Ok(())
    }

    pub async fn logout(&mut self) {
        if let Some(api) = self.client.remote_api_mut() {
            self.session.logout(api).await;
        }
        self.movies.clear();
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Installs a filter spec without triggering a load, for callers that
    /// set their hints before initializing.
    pub fn set_filter_hint(&mut self, filter: FilterSpec) {
        self.filter = filter;
    }

    /// Installs a new filter spec and re-loads the collection if ready,
    /// since the status/genre hints narrow the backend query.
    pub async fn set_filter(&mut self, filter: FilterSpec) -> Result<(), ApiError> {
        self.filter = filter;
        if self.ready() {
            self.load_movies().await?;
        }
        Ok(())
    }

    pub fn movies_loading(&self) -> bool {
        self.loading_movies
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Fetches the collection with the current filter's status/genre hints
    /// and replaces the cache with the response as the new authoritative
    /// value. Last write wins if callers overlap loads.
    pub async fn load_movies(&mut self) -> Result<(), ApiError> {
        self.loading_movies = true;
        let result = self.client.list(&self.filter).await;
        self.loading_movies = false;

        let movies = self.absorb(result).await?;
        self.movies = movies;
        Ok(())
    }

    /// The cached collection as loaded, before client-side search.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// The visible subset of the cache under the full filter, including the
    /// free-text search that is always applied client-side.
    pub fn visible_movies(&self) -> Vec<Movie> {
        filter::visible(&self.movies, &self.filter)
    }

    pub fn genre_options(&self) -> Vec<String> {
        filter::genre_options(&self.movies)
    }

    /// Fetches a single record straight from the backend, bypassing the
    /// cache.
    pub async fn movie(&mut self, id: i64) -> Result<Movie, ApiError> {
        let result = self.client.get(id).await;
        self.absorb(result).await
    }

    pub async fn add_movie(&mut self, draft: MovieDraft) -> Result<Movie, ApiError> {
        let result = self.client.create(draft).await;
        let movie = self.absorb(result).await?;
        self.movies.push(movie.clone());
        Ok(movie)
    }

    pub async fn update_movie(&mut self, id: i64, patch: MoviePatch) -> Result<Movie, ApiError> {
        let result = self.client.update(id, patch).await;
        let movie = self.absorb(result).await?;
        if let Some(cached) = self.movies.iter_mut().find(|m| m.id == id) {
            *cached = movie.clone();
        }
        Ok(movie)
    }

    pub async fn delete_movie(&mut self, id: i64) -> Result<(), ApiError> {
        let result = self.client.remove(id).await;
        self.absorb(result).await?;
        self.movies.retain(|m| m.id != id);
        Ok(())
    }

    pub async fn toggle_favorite(&mut self, id: i64) -> Result<bool, ApiError> {
        let result = self.client.toggle_favorite(id).await;
        let flag = self.absorb(result).await?;
        if let Some(cached) = self.movies.iter_mut().find(|m| m.id == id) {
            cached.is_favorite = flag;
        }
        Ok(flag)
    }

    pub async fn stats(&mut self) -> Result<StatsSummary, ApiError> {
        let result = self.client.stats().await;
        self.absorb(result).await
    }

    /// Records the outcome of an operation: success clears the last error,
    /// failure stores it, and an authorization rejection additionally tears
    /// the session down before the error propagates.
    async fn absorb<T>(&mut self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Ok(value)
            }
            Err(err) => {
                if err.is_session_expiry() {
                    if let Some(api) = self.client.remote_api_mut() {
                        self.session.expire(api).await;
                    }
                }
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
