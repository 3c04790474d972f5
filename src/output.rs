//! JSON-lines output.
//!
//! Every summary becomes one compact JSON object followed by `\n`, written in
//! the order the tracks arrive. Nothing is batched or reordered, and a failed
//! run leaves whatever was already written in place.

use std::path::Path;

use futures::{AsyncWrite, AsyncWriteExt, Stream, TryStreamExt};

use crate::{
    error::Result,
    tracks::make_track_summary,
    types::{TrackItem, TrackSummary},
};

/// Serializes one summary without the trailing newline.
pub fn serialize_track(summary: &TrackSummary) -> Result<String> {
    Ok(serde_json::to_string(summary)?)
}

/// Writes one line per track to `writer` and returns the number of lines.
///
/// The stream is pulled one item at a time; an error from it or from the
/// writer stops the write and is returned as is.
pub async fn save_tracks_to_writer<S, W>(tracks: S, writer: &mut W) -> Result<u64>
where
    S: Stream<Item = Result<TrackItem>>,
    W: AsyncWrite + Unpin,
{
    let mut tracks = std::pin::pin!(tracks);
    let mut written = 0;

    while let Some(item) = tracks.try_next().await? {
        let mut line = serialize_track(&make_track_summary(&item))?;
        line.push('\n');
        writer.write_all(line.as_bytes()).await?;
        written += 1;
    }

    writer.flush().await?;
    Ok(written)
}

/// Creates (or truncates) `path` and writes the tracks to it.
///
/// The file is closed before returning, also when writing fails.
pub async fn save_tracks_to_path<S>(tracks: S, path: &Path) -> Result<u64>
where
    S: Stream<Item = Result<TrackItem>>,
{
    let mut file = async_fs::File::create(path).await?;
    let written = save_tracks_to_writer(tracks, &mut file).await;
    let closed = file.close().await;

    let written = written?;
    closed?;
    Ok(written)
}
