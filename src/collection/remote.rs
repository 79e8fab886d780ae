use crate::{
    api::RemoteApi,
    error::ApiError,
    types::{FilterSpec, Movie, MovieDraft, MoviePatch, StatsSummary},
};

/// Collection backend over the remote movie API.
///
/// A thin adapter: the wire client already speaks the crate's error
/// taxonomy, so this layer only forwards operations and hands the session
/// layer mutable access to the client for token installation.
pub struct RemoteCollection {
    api: RemoteApi,
}

impl RemoteCollection {
    pub fn new(api: RemoteApi) -> Self {
        Self { api }
    }

    pub fn api_mut(&mut self) -> &mut RemoteApi {
        &mut self.api
    }

    pub async fn list(&self, filter: &FilterSpec) -> Result<Vec<Movie>, ApiError> {
        self.api.movies(filter).await
    }

    pub async fn get(&self, id: i64) -> Result<Movie, ApiError> {
        self.api.movie(id).await
    }

    pub async fn create(&mut self, draft: MovieDraft) -> Result<Movie, ApiError> {
        self.api.create_movie(&draft).await
    }

    pub async fn update(&mut self, id: i64, patch: MoviePatch) -> Result<Movie, ApiError> {
        self.api.update_movie(id, &patch).await
    }

    pub async fn remove(&mut self, id: i64) -> Result<(), ApiError> {
        self.api.delete_movie(id).await
    }

    pub async fn toggle_favorite(&mut self, id: i64) -> Result<bool, ApiError> {
        let response = self.api.toggle_favorite(id).await?;
        Ok(response.is_favorite)
    }

    pub async fn stats(&self) -> Result<StatsSummary, ApiError> {
        self.api.stats().await
    }
}
