//! Movie Collection Tracker CLI Library
//!
//! This library provides functionality for tracking a personal movie
//! collection: recording movies with a watch status and genre, rating and
//! reviewing them, marking favorites, and filtering the collection. The
//! collection lives either in local JSON state files or behind a remote
//! REST API with role-based token authentication.
//!
//! # Modules
//!
//! - `api` - HTTP client for the remote movie API
//! - `app` - Application controller tying session, client, and cache together
//! - `cli` - Command-line interface implementations
//! - `collection` - Movie collection clients (local store and remote API)
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared across the crate
//! - `filter` - Pure filtering of the visible collection
//! - `session` - Authentication session lifecycle
//! - `store` - JSON key-value persistence under the data directory
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use cinelog::{config, store::KeyValueStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await.ok();
//!     let store = KeyValueStore::open_default();
//!     // Use CLI functions...
//! }
//! ```

pub mod api;
pub mod app;
pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod filter;
pub mod session;
pub mod store;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Loading collection...");
/// info!("Found {} movies", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Logged in as {}", username);
/// success!("Added \"{}\"", title);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program
/// termination.
///
/// # Example
///
/// ```
/// warning!("No theme persisted yet, defaulting to light");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
