use crate::{
    api::RemoteApi,
    error::ApiError,
    types::{FavoriteResponse, FilterSpec, Movie, MovieDraft, MoviePatch},
};

impl RemoteApi {
    /// Fetches the collection, narrowed server-side by the filter's status
    /// and genre hints. Free-text search is always applied client-side
    /// afterwards, never here.
    pub async fn movies(&self, filter: &FilterSpec) -> Result<Vec<Movie>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(status) = filter.status {
            query.push(("status", status.to_string()));
        }
        if let Some(genre) = &filter.genre {
            query.push(("genre", genre.clone()));
        }

        let response = self
            .send(self.http.get(self.url("/movies/")).query(&query))
            .await?;
        Ok(response.json::<Vec<Movie>>().await?)
    }

    pub async fn movie(&self, id: i64) -> Result<Movie, ApiError> {
        let response = self
            .send(self.http.get(self.url(&format!("/movies/{id}"))))
            .await?;
        Ok(response.json::<Movie>().await?)
    }

    pub async fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, ApiError> {
        let response = self
            .send(self.http.post(self.url("/movies/")).json(draft))
            .await?;
        Ok(response.json::<Movie>().await?)
    }

    pub async fn update_movie(&self, id: i64, patch: &MoviePatch) -> Result<Movie, ApiError> {
        let response = self
            .send(self.http.put(self.url(&format!("/movies/{id}"))).json(patch))
            .await?;
        Ok(response.json::<Movie>().await?)
    }

    /// Deletes a movie. The server answers 204 on success; an unknown id
    /// surfaces as [`ApiError::NotFound`].
    pub async fn delete_movie(&self, id: i64) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(&format!("/movies/{id}"))))
            .await?;
        Ok(())
    }

    /// Flips the favorite flag in one atomic server operation, avoiding a
    /// lost-update race against concurrent modifications.
    pub async fn toggle_favorite(&self, id: i64) -> Result<FavoriteResponse, ApiError> {
        let response = self
            .send(self.http.patch(self.url(&format!("/movies/{id}/favorite"))))
            .await?;
        Ok(response.json::<FavoriteResponse>().await?)
    }
}
