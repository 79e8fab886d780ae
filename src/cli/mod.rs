//! # CLI Module
//!
//! The user-facing command layer. Each function here backs one subcommand,
//! builds the application controller for the configured storage mode, runs
//! the operation, and reports the outcome through the colored output macros.
//!
//! ## Command Categories
//!
//! ### Authentication (remote mode)
//!
//! - [`login`] - Obtains and verifies a bearer token for a username/role pair
//! - [`logout`] - Clears the stored token
//! - [`whoami`] - Verifies the stored token and prints the identity
//! - [`roles`] - Lists roles the backend accepts
//!
//! ### Collection
//!
//! - [`list`] - Filtered table of the collection plus derived genre options
//! - [`show`] - One movie in full, review and timestamp included
//! - [`add`] - Validates and creates a movie
//! - [`update`] - Partial update of an existing movie
//! - [`remove`] - Deletes a movie
//! - [`favorite`] - Toggles the favorite flag
//! - [`stats`] - Aggregate counts over the collection
//!
//! ### Settings
//!
//! - [`theme`] - Reads or changes the persisted theme
//!
//! ## Error Handling Philosophy
//!
//! Validation failures are reported next to their fields before anything is
//! persisted or sent. A session expiry is reported as "please log in again",
//! distinct from operation failures. Everything else surfaces as a single
//! dismissible message; nothing is retried automatically.

mod auth;
mod movies;
mod theme;

pub use auth::{login, logout, roles, whoami};
pub use movies::{add, favorite, list, remove, show, stats, update};
pub use theme::theme;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    app::App,
    config::{self, Mode},
    store::KeyValueStore,
};

/// Builds the application controller for the configured storage mode.
pub(crate) fn build_app() -> App {
    let store = KeyValueStore::open_default();
    match config::mode() {
        Mode::Local => App::local(store),
        Mode::Remote => App::remote(store, config::api_url()),
    }
}

/// Spinner shown while a remote request is in flight. Operations are not
/// blocked or queued; this is feedback, not coordination.
pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
