use std::path::Path;

use super::write_tracks;
use crate::{
    error::{DumpError, Result},
    spotify::{CatalogService, find_playlist_id, paginate},
};

/// Saves the tracks of the playlist `user` owns under `name`.
///
/// Nothing is written when the playlist cannot be found.
pub async fn save_playlist<C>(
    catalog: &C,
    user: &str,
    name: &str,
    output_path: &Path,
    limit: u32,
) -> Result<()>
where
    C: CatalogService,
{
    let Some(playlist_id) = find_playlist_id(catalog, user, name).await? else {
        return Err(DumpError::PlaylistNotFound(name.to_string()));
    };

    let first = catalog.playlist_tracks(&playlist_id, limit).await?;
    write_tracks(paginate(catalog, first), output_path).await?;
    Ok(())
}
