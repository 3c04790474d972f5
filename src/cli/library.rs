use std::path::Path;

use super::write_tracks;
use crate::{
    error::Result,
    spotify::{CatalogService, paginate},
};

/// Saves the current user's saved tracks to `output_path`.
pub async fn save_library<C>(catalog: &C, output_path: &Path, limit: u32) -> Result<()>
where
    C: CatalogService,
{
    let first = catalog.saved_tracks(limit).await?;
    write_tracks(paginate(catalog, first), output_path).await?;
    Ok(())
}
