use crate::clients::{
    entities::{PageToken, TrackPage},
    errors::Result,
};
use crate::playlist_link::PlaylistRef;

/// A paginated, already-authenticated query capability over a playlist's tracks.
///
/// `SpotifyClient` is the real implementation; tests substitute an in-memory stub.
#[allow(async_fn_in_trait)]
pub trait TrackSource {
    /// Request the first page of the playlist's tracks.
    async fn first_page(&self, playlist: &PlaylistRef) -> Result<TrackPage>;

    /// Request the page identified by a token from a previous page.
    async fn next_page(&self, playlist: &PlaylistRef, token: PageToken) -> Result<TrackPage>;
}
