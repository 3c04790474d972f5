//! Spotify Track Dump Library
//!
//! This library saves the tracks of a Spotify user's saved-tracks library or
//! playlists as newline-delimited JSON. It authenticates on behalf of one user,
//! pages through the requested listing and writes one summary line per track.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints served by the local OAuth callback server
//! - `cli` - Mode selection and the run driver used by the binary
//! - `config` - `.env` loading and the explicit [`config::Config`] object
//! - `error` - The [`DumpError`] taxonomy
//! - `management` - Token caching and refresh
//! - `output` - JSON-lines writer for track summaries
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Catalog capability, pagination, playlist lookup and the Web API client
//! - `tracks` - Raw track to summary conversion
//! - `types` - Data structures and type definitions
//! - `utils` - PKCE helpers and filename sanitizing
//!
//! # Example
//!
//! ```
//! use spotdump::{cli, config::Config, spotify};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> spotdump::Result<()> {
//!     let config = Config::from_env()?;
//!     let session = spotify::init_session(&config, "someone").await?;
//!     let mode = cli::select_mode(true, None, false, "tracks.json".as_ref())?;
//!     cli::run(session.catalog(), session.user(), &mode, "tracks.json".as_ref(), config.tracks_limit).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod output;
pub mod server;
pub mod spotify;
pub mod tracks;
pub mod types;
pub mod utils;

pub use error::{DumpError, Result};

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Writing to file: {}", path.display());
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
/// # Example
///
/// ```
/// success!("Wrote {} tracks", count);
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
/// The process terminates with exit code 1 right after printing, so this is
/// reserved for the binary's fatal paths: failed login, unknown playlist,
/// usage errors and failures while fetching or writing tracks.
///
/// # Example
///
/// ```
/// error!("Cannot find playlist: {}", name);
/// // Program exits here
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
/// Used for recoverable issues such as a token cache that could not be written.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
