use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::clients::{
    entities::Track,
    errors::{Error, Result},
    source::TrackSource,
};
use crate::csv_output::{self, ArtistSpacing};
use crate::playlist_link::PlaylistRef;

/// Environment key of the Spotify client id (required)
pub const CLIENT_ID_KEY: &str = "CLIENT_ID";
/// Environment key of the Spotify client secret (required)
pub const CLIENT_SECRET_KEY: &str = "CLIENT_SECRET";
/// Environment key of the playlist share link (required)
pub const PLAYLIST_LINK_KEY: &str = "PLAYLIST_LINK";
/// Environment key of the output path (optional)
pub const OUTPUT_FILE_KEY: &str = "OUTPUT_FILE_NAME";
/// Output path used when none is configured
pub const DEFAULT_OUTPUT_FILE: &str = "track_info.csv";

/// Configuration for the Exporter struct
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify app client id
    pub client_id: String,
    /// Spotify app client secret
    pub client_secret: String,
    /// Playlist share link, parsed when the export starts
    pub playlist_link: String,
    /// Destination CSV file, truncated if it exists
    pub output_file: PathBuf,
    /// Formatting of the artist column
    pub artist_spacing: ArtistSpacing,
}

/// Builds a `Config`; unset values fall back to the environment, then defaults.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    playlist_link: Option<String>,
    output_file: Option<PathBuf>,
    artist_spacing: Option<ArtistSpacing>,
}

impl ConfigBuilder {
    /// Empty builder, everything resolved at build time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spotify app client id, overrides `CLIENT_ID`.
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Spotify app client secret, overrides `CLIENT_SECRET`.
    #[must_use]
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Playlist share link, overrides `PLAYLIST_LINK`.
    #[must_use]
    pub fn playlist_link(mut self, playlist_link: impl Into<String>) -> Self {
        self.playlist_link = Some(playlist_link.into());
        self
    }

    /// Destination path, overrides `OUTPUT_FILE_NAME`.
    #[must_use]
    pub fn output_file(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = Some(output_file.into());
        self
    }

    /// Artist column formatting, `Clean` when unset.
    #[must_use]
    pub fn artist_spacing(mut self, spacing: ArtistSpacing) -> Self {
        self.artist_spacing = Some(spacing);
        self
    }

    /// Fill unset values from the process environment.
    pub fn build(self) -> Result<Config> {
        self.try_build_with(|key| match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(Error::ConfigurationError(format!("{key}: {e}"))),
        })
    }

    /// Fill unset values from `lookup` instead of the process environment.
    pub fn build_with<F>(self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.try_build_with(|key| Ok(lookup(key)))
    }

    fn try_build_with<F>(self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        // Empty values count as missing.
        let resolve = |set: Option<String>, key: &str| -> Result<Option<String>> {
            let value = match set {
                Some(v) => Some(v),
                None => lookup(key)?,
            };
            Ok(value.filter(|v| !v.is_empty()))
        };

        let client_id = resolve(self.client_id, CLIENT_ID_KEY)?;
        let client_secret = resolve(self.client_secret, CLIENT_SECRET_KEY)?;
        let playlist_link = resolve(self.playlist_link, PLAYLIST_LINK_KEY)?;
        let output_file = match self.output_file {
            Some(path) => Some(path),
            None => resolve(None, OUTPUT_FILE_KEY)?.map(PathBuf::from),
        };

        let (Some(client_id), Some(client_secret), Some(playlist_link)) =
            (&client_id, &client_secret, &playlist_link)
        else {
            let missing = [
                (CLIENT_ID_KEY, client_id.is_none()),
                (CLIENT_SECRET_KEY, client_secret.is_none()),
                (PLAYLIST_LINK_KEY, playlist_link.is_none()),
            ]
            .into_iter()
            .filter_map(|(key, absent)| absent.then_some(key))
            .collect();
            return Err(Error::ConfigurationMissing(missing));
        };

        Ok(Config {
            client_id: client_id.clone(),
            client_secret: client_secret.clone(),
            playlist_link: playlist_link.clone(),
            output_file: output_file.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            artist_spacing: self.artist_spacing.unwrap_or_default(),
        })
    }
}

/// Fetch every track of `playlist`, following continuation tokens until the
/// source reports no further page. Items keep the order they arrived in.
pub async fn fetch_tracks<S: TrackSource>(
    source: &S,
    playlist: &PlaylistRef,
) -> Result<Vec<Track>> {
    let (tracks, _skipped) = collect_pages(source, playlist).await?;
    Ok(tracks)
}

// Returns the tracks along with the number of entries the source skipped.
async fn collect_pages<S: TrackSource>(
    source: &S,
    playlist: &PlaylistRef,
) -> Result<(Vec<Track>, usize)> {
    let mut page = source.first_page(playlist).await?;
    let mut tracks = std::mem::take(&mut page.items);
    let mut skipped = page.skipped;

    while let Some(token) = page.next {
        debug!("Requesting next page of playlist {playlist} ({token:?})");
        page = source.next_page(playlist, token).await?;
        tracks.append(&mut page.items);
        skipped += page.skipped;
    }

    if skipped == 0 {
        info!("Found {} tracks in playlist", tracks.len());
    } else {
        info!(
            "Found {} tracks in playlist, skipped {skipped} unavailable entries",
            tracks.len()
        );
    }
    Ok((tracks, skipped))
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Where the CSV was written
    pub output_file: PathBuf,
    /// Data rows written, header excluded
    pub rows: usize,
    /// Playlist entries dropped because they had no playable item
    pub skipped: usize,
}

/// The main Exporter struct that runs parse -> fetch -> write
pub struct Exporter {
    config: Config,
}

impl Exporter {
    /// Wrap a resolved configuration.
    pub fn new(config: Config) -> Self {
        Exporter { config }
    }

    /// The configuration this exporter runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse the configured link. Fails before any request is made.
    pub fn playlist(&self) -> Result<PlaylistRef> {
        PlaylistRef::parse(&self.config.playlist_link)
    }

    /// Parse the link, then fetch and write.
    pub async fn run<S: TrackSource>(&self, source: &S) -> Result<ExportSummary> {
        let playlist = self.playlist()?;
        self.export(source, &playlist).await
    }

    /// Fetch `playlist` from `source` and write it to the configured file.
    pub async fn export<S: TrackSource>(
        &self,
        source: &S,
        playlist: &PlaylistRef,
    ) -> Result<ExportSummary> {
        info!("Starting export of playlist {playlist} ...");
        let (tracks, skipped) = collect_pages(source, playlist).await?;

        let output_file: &Path = &self.config.output_file;
        csv_output::write_csv(&tracks, output_file, self.config.artist_spacing)?;

        Ok(ExportSummary {
            output_file: output_file.to_path_buf(),
            rows: tracks.len(),
            skipped,
        })
    }
}
