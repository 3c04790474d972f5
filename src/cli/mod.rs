//! # CLI Module
//!
//! The driver behind the `spotdump` binary: picks the track source from the
//! command-line flags, then wires pagination, summarizing and output together.
//!
//! ## Modes
//!
//! Flags are checked in a fixed priority order:
//!
//! 1. `--use_music_library` - the user's saved tracks go to one file
//! 2. `--playlist NAME` - the tracks of the first playlist the user owns with
//!    exactly that name go to one file
//! 3. `--all_playlists` - every owned playlist goes to its own file inside
//!    the output directory
//!
//! With none of them set the run stops with a usage error. All argument
//! checks happen in [`select_mode`], before any request reaches Spotify.
//!
//! ## Execution Model
//!
//! Everything runs sequentially: one page request at a time, one open file
//! at a time. In all-playlists mode a playlist is completely written and its
//! file closed before the next one is fetched. Playlists whose names sanitize
//! to the same filename overwrite each other.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotdump someone library.json --use_music_library
//! spotdump someone road.json --playlist "Road Trip"
//! spotdump someone ./playlists --all_playlists
//! ```

mod all_playlists;
mod library;
mod playlist;

use std::{path::Path, time::Duration};

use futures::{Stream, TryStreamExt};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error::{DumpError, Result},
    info, output,
    spotify::CatalogService,
    success,
    types::TrackItem,
};

pub use all_playlists::save_all_playlists;
pub use library::save_library;
pub use playlist::save_playlist;

/// Track source selected for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Library,
    Playlist(String),
    AllPlaylists,
}

/// Picks the mode from the flags.
///
/// An empty playlist name counts as not given. In all-playlists mode the
/// output path has to be an existing directory.
///
/// # Errors
///
/// Returns [`DumpError::Usage`] when no mode is selected or the
/// all-playlists target is not a directory.
pub fn select_mode(
    use_music_library: bool,
    playlist: Option<&str>,
    all_playlists: bool,
    output_path: &Path,
) -> Result<Mode> {
    if use_music_library {
        return Ok(Mode::Library);
    }

    if let Some(name) = playlist.filter(|name| !name.is_empty()) {
        return Ok(Mode::Playlist(name.to_string()));
    }

    if all_playlists {
        if !output_path.is_dir() {
            return Err(DumpError::Usage(
                "Output path must be an existing directory for saving all playlists".into(),
            ));
        }
        return Ok(Mode::AllPlaylists);
    }

    Err(DumpError::Usage(
        "Must specify --playlist, --use_music_library or --all_playlists".into(),
    ))
}

/// Runs the selected mode against `catalog` on behalf of `user`.
///
/// `limit` is the page size for track listings.
pub async fn run<C>(catalog: &C, user: &str, mode: &Mode, output_path: &Path, limit: u32) -> Result<()>
where
    C: CatalogService,
{
    match mode {
        Mode::Library => save_library(catalog, output_path, limit).await,
        Mode::Playlist(name) => save_playlist(catalog, user, name, output_path, limit).await,
        Mode::AllPlaylists => save_all_playlists(catalog, user, output_path, limit).await,
    }
}

/// Writes a track stream to `path` while showing a running count.
async fn write_tracks<S>(tracks: S, path: &Path) -> Result<u64>
where
    S: Stream<Item = Result<TrackItem>>,
{
    info!("Writing to file: {}", path.display());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let mut fetched = 0u64;
    let tracks = tracks.inspect_ok(|_| {
        fetched += 1;
        pb.set_message(format!("Fetched {} tracks...", fetched));
    });

    let written = output::save_tracks_to_path(tracks, path).await;
    pb.finish_and_clear();

    let written = written?;
    success!("Wrote {} tracks to {}", written, path.display());
    Ok(written)
}
