use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Genres offered for input assistance. Genre itself is an open string;
/// filtering derives its options from the data, not from this list.
pub const SUGGESTED_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "Horror",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Thriller",
    "War",
    "Western",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WatchStatus {
    WantToWatch,
    Watching,
    Watched,
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WatchStatus::WantToWatch => "want-to-watch",
            WatchStatus::Watching => "watching",
            WatchStatus::Watched => "watched",
        };
        write!(f, "{}", s)
    }
}

/// Access roles accepted by the remote API. Enforcement is server-side;
/// the client only passes the requested role along at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
#[value(rename_all = "UPPER")]
pub enum Role {
    Visitor,
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Visitor => "VISITOR",
            Role::User => "USER",
            Role::Admin => "ADMIN",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        write!(f, "{}", s)
    }
}

/// A stored movie record, the canonical shape returned by both collection
/// backends. `id` and `date_added` are assigned by the backend on creation
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    pub rating: Option<f64>,
    pub status: WatchStatus,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
}

/// An unsaved movie as provided by user input, validated before submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    pub rating: Option<f64>,
    pub status: WatchStatus,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Partial fields for an update; absent fields are left untouched.
///
/// A patch can set `rating` and `review` but never clear them back to
/// absent: `None` means "leave as is", not "remove". Clearing is not
/// expressible through this type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoviePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WatchStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.director.is_none()
            && self.year.is_none()
            && self.genre.is_none()
            && self.rating.is_none()
            && self.status.is_none()
            && self.review.is_none()
            && self.is_favorite.is_none()
    }

    /// Merges the present fields into an existing record.
    pub fn apply_to(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(director) = &self.director {
            movie.director = director.clone();
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(genre) = &self.genre {
            movie.genre = genre.clone();
        }
        if let Some(rating) = self.rating {
            movie.rating = Some(rating);
        }
        if let Some(status) = self.status {
            movie.status = status;
        }
        if let Some(review) = &self.review {
            movie.review = Some(review.clone());
        }
        if let Some(is_favorite) = self.is_favorite {
            movie.is_favorite = is_favorite;
        }
    }
}

/// The visible-subset specification. `None` means "all" for status and
/// genre; the search term always matches case-insensitively against the
/// title. Never persisted, reset on explicit clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub status: Option<WatchStatus>,
    pub genre: Option<String>,
    pub search: String,
}

impl FilterSpec {
    pub fn clear(&mut self) {
        *self = FilterSpec::default();
    }

    pub fn is_unfiltered(&self) -> bool {
        self.status.is_none() && self.genre.is_none() && self.search.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// The identity confirmed by the protected stats probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub role: Role,
}

/// Aggregate collection counts. The remote variant also carries the
/// authenticated identity, which doubles as the session verification probe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub watched: u64,
    #[serde(default)]
    pub watching: u64,
    #[serde(default)]
    pub want_to_watch: u64,
    #[serde(default)]
    pub favorites: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteResponse {
    pub is_favorite: bool,
}

/// Error body shape of the remote API (`{"detail": "..."}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

#[derive(Tabled)]
pub struct MovieTableRow {
    pub id: String,
    pub title: String,
    pub director: String,
    pub year: String,
    pub genre: String,
    pub rating: String,
    pub status: String,
    pub fav: String,
}

impl From<&Movie> for MovieTableRow {
    fn from(movie: &Movie) -> Self {
        MovieTableRow {
            id: movie.id.to_string(),
            title: movie.title.clone(),
            director: movie.director.clone(),
            year: movie.year.to_string(),
            genre: movie.genre.clone(),
            rating: movie
                .rating
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|| "-".to_string()),
            status: movie.status.to_string(),
            fav: if movie.is_favorite { "★" } else { "" }.to_string(),
        }
    }
}
