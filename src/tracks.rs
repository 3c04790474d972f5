//! Conversion of raw catalog entries into the records that get written.

use crate::types::{TrackItem, TrackSummary};

/// Key in a track's external ids that holds its recording code.
const ISRC_KEY: &str = "isrc";

/// Summarizes one saved-track or playlist-track entry.
///
/// Copies album name, album type, track name and artist names in their
/// listed order. `isrc` is set only when the track's external ids carry one.
pub fn make_track_summary(item: &TrackItem) -> TrackSummary {
    let track = &item.track;

    TrackSummary {
        album: track.album.name.clone(),
        album_type: track.album.kind.clone(),
        name: track.name.clone(),
        artists: track.artists.iter().map(|a| a.name.clone()).collect(),
        isrc: track.external_ids.get(ISRC_KEY).cloned(),
    }
}

impl From<&TrackItem> for TrackSummary {
    fn from(item: &TrackItem) -> Self {
        make_track_summary(item)
    }
}
