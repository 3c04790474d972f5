use futures::{Stream, TryStreamExt, future};

use super::{catalog::CatalogService, pagination::paginate};
use crate::{
    config::DEFAULT_PLAYLISTS_LIMIT,
    error::Result,
    types::{Page, Playlist},
};

/// Streams the playlists owned by `user`, in listing order.
///
/// The listing for a profile also contains playlists the user merely
/// follows; those are skipped. The first listing page is requested when the
/// stream is first polled.
pub fn owned_playlists<'a, C>(catalog: &'a C, user: &'a str) -> impl Stream<Item = Result<Playlist>> + 'a
where
    C: CatalogService,
{
    futures::stream::once(catalog.user_playlists(user, DEFAULT_PLAYLISTS_LIMIT))
        .map_ok(move |first: Page<Playlist>| paginate(catalog, first))
        .try_flatten()
        .try_filter(move |playlist: &Playlist| future::ready(playlist.owner_id() == user))
}

/// Returns the id of the first playlist owned by `user` named exactly `name`.
///
/// `Ok(None)` means the whole listing was read without a match.
pub async fn find_playlist_id<C>(catalog: &C, user: &str, name: &str) -> Result<Option<String>>
where
    C: CatalogService,
{
    let playlists = owned_playlists(catalog, user);
    let mut playlists = std::pin::pin!(playlists);

    while let Some(playlist) = playlists.try_next().await? {
        if playlist.name == name {
            return Ok(Some(playlist.id));
        }
    }

    Ok(None)
}
