//! Build script for the cinelog CLI.
//!
//! Copies the `.env.example` configuration template from the crate root into
//! the user's local data directory so that a freshly installed binary finds a
//! ready-to-edit configuration example in the place it actually reads from.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` to the platform-specific local data directory.
///
/// The template ends up at:
/// - Linux: `~/.local/share/cinelog/.env.example`
/// - macOS: `~/Library/Application Support/cinelog/.env.example`
/// - Windows: `%LOCALAPPDATA%/cinelog/.env.example`
///
/// A missing template produces a cargo warning instead of failing the build;
/// directory-creation or copy failures are propagated as build errors.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("cinelog");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
