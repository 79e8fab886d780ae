//! Movie collection clients.
//!
//! One external contract, two backends selected at construction time:
//! [`LocalCollection`] keeps the collection in the JSON key-value store,
//! [`RemoteCollection`] talks to the movie API. The [`CollectionClient`]
//! enum dispatches between them so the filter engine and the application
//! controller stay variant-agnostic.
//!
//! Drafts and patches are validated here, before either backend is touched:
//! a validation failure names the offending fields and performs no
//! persistence call and no network call.

mod local;
mod remote;

pub use local::LocalCollection;
pub use remote::RemoteCollection;

use chrono::{Datelike, Utc};

use crate::{
    api::RemoteApi,
    error::{ApiError, ValidationIssues},
    types::{FilterSpec, Movie, MovieDraft, MoviePatch, StatsSummary},
};

pub const YEAR_MIN: i32 = 1900;

/// Upper year bound: five years into the future, for announced releases.
pub fn year_max() -> i32 {
    Utc::now().year() + 5
}

/// Validates an unsaved draft, collecting every offending field.
pub fn validate_draft(draft: &MovieDraft) -> Result<(), ApiError> {
    let mut issues = ValidationIssues::default();

    if draft.title.trim().is_empty() {
        issues.push("title", "Title is required");
    }
    if draft.director.trim().is_empty() {
        issues.push("director", "Director is required");
    }
    if draft.year < YEAR_MIN || draft.year > year_max() {
        issues.push("year", "Please enter a valid year");
    }
    if draft.genre.trim().is_empty() {
        issues.push("genre", "Genre is required");
    }
    if let Some(rating) = draft.rating {
        if !(1.0..=10.0).contains(&rating) {
            issues.push("rating", "Rating must be between 1-10");
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(issues))
    }
}

/// Validates the fields present in a partial update; absent fields pass.
pub fn validate_patch(patch: &MoviePatch) -> Result<(), ApiError> {
    let mut issues = ValidationIssues::default();

    if let Some(title) = &patch.title {
        if title.trim().is_empty() {
            issues.push("title", "Title is required");
        }
    }
    if let Some(director) = &patch.director {
        if director.trim().is_empty() {
            issues.push("director", "Director is required");
        }
    }
    if let Some(year) = patch.year {
        if year < YEAR_MIN || year > year_max() {
            issues.push("year", "Please enter a valid year");
        }
    }
    if let Some(genre) = &patch.genre {
        if genre.trim().is_empty() {
            issues.push("genre", "Genre is required");
        }
    }
    if let Some(rating) = patch.rating {
        if !(1.0..=10.0).contains(&rating) {
            issues.push("rating", "Rating must be between 1-10");
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(issues))
    }
}

/// Polymorphic collection client, local or remote.
pub enum CollectionClient {
    Local(LocalCollection),
    Remote(RemoteCollection),
}

impl CollectionClient {
    pub fn local(collection: LocalCollection) -> Self {
        CollectionClient::Local(collection)
    }

    pub fn remote(collection: RemoteCollection) -> Self {
        CollectionClient::Remote(collection)
    }

    /// The wire client, for the session layer to install tokens on.
    pub fn remote_api_mut(&mut self) -> Option<&mut RemoteApi> {
        match self {
            CollectionClient::Remote(collection) => Some(collection.api_mut()),
            CollectionClient::Local(_) => None,
        }
    }

    /// Returns the collection narrowed by the filter's status and genre
    /// hints. Free-text search is applied by the filter engine afterwards.
    /// An empty collection is `[]`, never an error.
    pub async fn list(&self, filter: &FilterSpec) -> Result<Vec<Movie>, ApiError> {
        match self {
            CollectionClient::Local(collection) => collection.list(filter).await,
            CollectionClient::Remote(collection) => collection.list(filter).await,
        }
    }

    /// Fetches a single record. An unknown id is `NotFound`.
    pub async fn get(&self, id: i64) -> Result<Movie, ApiError> {
        match self {
            CollectionClient::Local(collection) => collection.get(id).await,
            CollectionClient::Remote(collection) => collection.get(id).await,
        }
    }

    /// Validates and persists a new movie, returning the canonical stored
    /// record (never the submitted draft).
    pub async fn create(&mut self, draft: MovieDraft) -> Result<Movie, ApiError> {
        validate_draft(&draft)?;
        match self {
            CollectionClient::Local(collection) => collection.create(draft).await,
            CollectionClient::Remote(collection) => collection.create(draft).await,
        }
    }

    /// Merges partial fields into an existing record.
    pub async fn update(&mut self, id: i64, patch: MoviePatch) -> Result<Movie, ApiError> {
        validate_patch(&patch)?;
        match self {
            CollectionClient::Local(collection) => collection.update(id, patch).await,
            CollectionClient::Remote(collection) => collection.update(id, patch).await,
        }
    }

    /// Removes a record. An unknown id is `NotFound` in both modes.
    pub async fn remove(&mut self, id: i64) -> Result<(), ApiError> {
        match self {
            CollectionClient::Local(collection) => collection.remove(id).await,
            CollectionClient::Remote(collection) => collection.remove(id).await,
        }
    }

    /// Flips the favorite flag and returns the new value.
    pub async fn toggle_favorite(&mut self, id: i64) -> Result<bool, ApiError> {
        match self {
            CollectionClient::Local(collection) => collection.toggle_favorite(id).await,
            CollectionClient::Remote(collection) => collection.toggle_favorite(id).await,
        }
    }

    /// Aggregate counts over the whole collection.
    pub async fn stats(&self) -> Result<StatsSummary, ApiError> {
        match self {
            CollectionClient::Local(collection) => collection.stats().await,
            CollectionClient::Remote(collection) => collection.stats().await,
        }
    }
}
