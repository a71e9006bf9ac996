use log::{debug, warn};
use rspotify::{
    ClientCredsSpotify, Credentials,
    model::{FullEpisode, FullTrack, Page, PlayableItem, PlaylistId, PlaylistItem},
    prelude::*,
};

use crate::clients::{
    entities::{Artist, PageToken, Track, TrackPage},
    errors::Result,
    source::TrackSource,
};
use crate::playlist_link::PlaylistRef;

// Largest page the playlist items endpoint hands out.
const PAGE_LIMIT: u32 = 100;

impl From<FullTrack> for Track {
    fn from(f: FullTrack) -> Track {
        Track {
            name: f.name,
            artists: f
                .artists
                .into_iter()
                .map(|a| Artist { name: a.name })
                .collect(),
        }
    }
}

// Podcast episodes have no artists, the show's publisher stands in for one.
impl From<FullEpisode> for Track {
    fn from(f: FullEpisode) -> Track {
        Track {
            name: f.name,
            artists: vec![Artist {
                name: f.show.publisher,
            }],
        }
    }
}

fn into_track_page(page: Page<PlaylistItem>) -> TrackPage {
    let next = page
        .next
        .as_ref()
        .map(|_| PageToken(page.offset + page.limit));

    let total = page.items.len();
    let items: Vec<Track> = page
        .items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match item.track {
            Some(PlayableItem::Track(track)) => Some(Track::from(track)),
            Some(PlayableItem::Episode(episode)) => Some(Track::from(episode)),
            _ => {
                warn!(
                    "Skipping playlist entry {} without playable item",
                    page.offset as usize + i
                );
                None
            }
        })
        .collect();

    TrackPage {
        skipped: total - items.len(),
        items,
        next,
    }
}

/// Spotify Web API access through the client credentials flow.
pub struct SpotifyClient {
    /// Underlying rspotify client
    pub spotify: ClientCredsSpotify,
}

impl SpotifyClient {
    /// Create an unauthorized client; call `authorize_client` before paging.
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        let creds = Credentials::new(client_id, client_secret);
        SpotifyClient {
            spotify: ClientCredsSpotify::new(creds),
        }
    }

    /// Request an app token with the client credentials flow.
    /// No user interaction, so only public playlists are reachable.
    pub async fn authorize_client(&self) -> Result<()> {
        debug!("Requesting Spotify client credentials token ...");
        self.spotify.request_token().await?;
        debug!("Spotify token acquired");
        Ok(())
    }

    async fn fetch_page(&self, playlist: &PlaylistRef, offset: u32) -> Result<TrackPage> {
        let playlist_id = PlaylistId::from_id(playlist.id())?;
        debug!("Fetching tracks of playlist {playlist} from offset {offset}");
        let page = self
            .spotify
            .playlist_items_manual(playlist_id, None, None, Some(PAGE_LIMIT), Some(offset))
            .await?;
        Ok(into_track_page(page))
    }
}

impl TrackSource for SpotifyClient {
    async fn first_page(&self, playlist: &PlaylistRef) -> Result<TrackPage> {
        self.fetch_page(playlist, 0).await
    }

    async fn next_page(&self, playlist: &PlaylistRef, token: PageToken) -> Result<TrackPage> {
        self.fetch_page(playlist, token.0).await
    }
}
