//! Configuration management for the movie collection tracker.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It decides which storage mode the
//! application runs in and where the remote movie API lives.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use dotenv;

/// The storage mode selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Collection persisted as JSON under the local data directory.
    Local,
    /// Collection persisted via the remote movie API.
    Remote,
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `cinelog/.env`. A missing `.env` file is not
/// an error; all settings have defaults.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/cinelog/.env`
/// - macOS: `~/Library/Application Support/cinelog/.env`
/// - Windows: `%LOCALAPPDATA%/cinelog/.env`
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("cinelog/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the storage mode, read from `CINELOG_MODE`.
///
/// Accepts `local` and `remote` (case-insensitive). Anything else, including
/// an unset variable, falls back to local mode.
///
/// # Example
///
/// ```
/// let mode = config::mode(); // Mode::Local unless configured otherwise
/// ```
pub fn mode() -> Mode {
    match env::var("CINELOG_MODE") {
        Ok(value) if value.eq_ignore_ascii_case("remote") => Mode::Remote,
        _ => Mode::Local,
    }
}

/// Returns the base URL of the remote movie API.
///
/// Retrieves the `CINELOG_API_URL` environment variable, falling back to
/// `http://localhost:8000` when unset. Only consulted in remote mode.
///
/// # Example
///
/// ```
/// let url = config::api_url(); // e.g., "http://localhost:8000"
/// ```
pub fn api_url() -> String {
    env::var("CINELOG_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}
