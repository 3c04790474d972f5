use std::path::Path;

use futures::TryStreamExt;

use super::write_tracks;
use crate::{
    error::Result,
    info,
    spotify::{CatalogService, owned_playlists, paginate},
    utils,
};

/// Saves every playlist owned by `user` into its own file under `output_dir`.
///
/// Files are named after the sanitized playlist name. A later playlist with
/// the same sanitized name replaces the earlier file.
pub async fn save_all_playlists<C>(catalog: &C, user: &str, output_dir: &Path, limit: u32) -> Result<()>
where
    C: CatalogService,
{
    let playlists = owned_playlists(catalog, user);
    let mut playlists = std::pin::pin!(playlists);
    let mut saved = 0;

    while let Some(playlist) = playlists.try_next().await? {
        let output_path = output_dir.join(utils::make_playlist_filename(&playlist.name));
        let first = catalog.playlist_tracks(&playlist.id, limit).await?;
        write_tracks(paginate(catalog, first), &output_path).await?;
        saved += 1;
    }

    info!("Saved {} playlists to {}", saved, output_dir.display());
    Ok(())
}
