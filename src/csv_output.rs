use std::{fs::File, io, path::Path};

use log::debug;
use serde::Serialize;

use crate::clients::{entities::Track, errors::Result};

/// How the joined artist names are written to the `artist` column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArtistSpacing {
    /// `Y, Z`
    #[default]
    Clean,
    /// ` Y, Z`, with the leading space older exports carried.
    Legacy,
}

#[derive(Serialize)]
struct OutputRow<'a> {
    track: &'a str,
    artist: String,
}

impl<'a> OutputRow<'a> {
    fn new(track: &'a Track, spacing: ArtistSpacing) -> Self {
        let joined = track.joined_artists();
        let artist = match spacing {
            ArtistSpacing::Clean => joined,
            ArtistSpacing::Legacy => format!(" {joined}"),
        };
        OutputRow {
            track: &track.name,
            artist,
        }
    }
}

/// Write the `track,artist` header followed by one row per track, in order.
pub fn write_tracks<W: io::Write>(
    tracks: &[Track],
    writer: W,
    spacing: ArtistSpacing,
) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written by hand so an empty playlist still gets a header.
    csv_writer.write_record(["track", "artist"])?;
    for track in tracks {
        csv_writer.serialize(OutputRow::new(track, spacing))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the tracks to it as UTF-8 CSV.
pub fn write_csv(tracks: &[Track], path: &Path, spacing: ArtistSpacing) -> Result<()> {
    let file = File::create(path)?;
    write_tracks(tracks, file, spacing)?;
    debug!("Wrote {} rows to {}", tracks.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tracks: &[Track], spacing: ArtistSpacing) -> String {
        let mut buf = Vec::new();
        write_tracks(tracks, &mut buf, spacing).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> Vec<Track> {
        vec![Track::new("A", &["X"]), Track::new("B", &["Y", "Z"])]
    }

    #[test]
    fn test_clean_rows() {
        assert_eq!(
            render(&sample(), ArtistSpacing::Clean),
            "track,artist\nA,X\nB,\"Y, Z\"\n"
        );
    }

    #[test]
    fn test_legacy_rows_keep_leading_space() {
        assert_eq!(
            render(&sample(), ArtistSpacing::Legacy),
            "track,artist\nA, X\nB,\" Y, Z\"\n"
        );
    }

    #[test]
    fn test_empty_playlist_writes_header_only() {
        assert_eq!(render(&[], ArtistSpacing::Clean), "track,artist\n");
    }

    #[test]
    fn test_track_without_artists_still_written() {
        let out = render(&[Track::new("Silence", &[])], ArtistSpacing::Clean);
        assert_eq!(out, "track,artist\nSilence,\n");

        let out = render(&[Track::new("Silence", &[])], ArtistSpacing::Legacy);
        assert_eq!(out, "track,artist\nSilence, \n");
    }

    #[test]
    fn test_quotes_and_unicode() {
        let out = render(
            &[Track::new("Say \"Hi\"", &["Sigur Rós", "björk"])],
            ArtistSpacing::Clean,
        );
        assert_eq!(
            out,
            "track,artist\n\"Say \"\"Hi\"\"\",\"Sigur Rós, björk\"\n"
        );
    }
}
