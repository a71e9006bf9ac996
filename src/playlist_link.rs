use std::{fmt, str::FromStr, sync::LazyLock};

use fancy_regex::Regex;

use crate::clients::errors::{Error, Result};

/// Message carried by `Error::InvalidInput` for a malformed link.
pub const EXPECTED_FORMAT: &str =
    "Expected format: https://open.spotify.com/playlist/<playlist_id>";

// Anchored at the start only. The id may be followed by a query string, a
// fragment or a path separator, but not by any other character.
static PLAYLIST_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://open\.spotify\.com/playlist/([a-zA-Z0-9]+)(?=$|[?#/])")
        .expect("playlist url pattern is valid")
});

/// Identifier of a Spotify playlist, as found in its share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRef(String);

impl PlaylistRef {
    /// Extract the id from a `https://open.spotify.com/playlist/<id>` link.
    pub fn parse(link: &str) -> Result<Self> {
        let captures = PLAYLIST_URL_REGEX
            .captures(link)
            .map_err(|e| Error::InvalidInput(format!("{EXPECTED_FORMAT} ({e})")))?
            .ok_or_else(|| Error::InvalidInput(EXPECTED_FORMAT.to_string()))?;

        let id = captures
            .get(1)
            .ok_or_else(|| Error::InvalidInput(EXPECTED_FORMAT.to_string()))?;
        Ok(PlaylistRef(id.as_str().to_string()))
    }

    /// The bare playlist id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl FromStr for PlaylistRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PlaylistRef::parse(s)
    }
}

impl AsRef<str> for PlaylistRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(link: &str) {
        match PlaylistRef::parse(link) {
            Err(Error::InvalidInput(msg)) => assert!(msg.contains(EXPECTED_FORMAT)),
            other => panic!("expected InvalidInput for {link:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_plain_link() {
        let playlist =
            PlaylistRef::parse("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M")
                .unwrap();
        assert_eq!(playlist.id(), "37i9dQZF1DXcBWIGoYBM5M");
    }

    #[test]
    fn test_parse_share_link_with_query() {
        let playlist: PlaylistRef = "https://open.spotify.com/playlist/abc123?si=xyz"
            .parse()
            .unwrap();
        assert_eq!(playlist.to_string(), "abc123");
    }

    #[test]
    fn test_parse_allows_fragment_and_trailing_slash() {
        assert_eq!(
            PlaylistRef::parse("https://open.spotify.com/playlist/abc#top")
                .unwrap()
                .id(),
            "abc"
        );
        assert_eq!(
            PlaylistRef::parse("https://open.spotify.com/playlist/abc/")
                .unwrap()
                .id(),
            "abc"
        );
    }

    #[test]
    fn test_parse_rejects_other_prefixes() {
        assert_invalid("");
        assert_invalid("open.spotify.com/playlist/abc");
        assert_invalid("http://open.spotify.com/playlist/abc");
        assert_invalid("https://open.spotify.com/album/abc");
        assert_invalid(" https://open.spotify.com/playlist/abc");
        assert_invalid("see https://open.spotify.com/playlist/abc");
    }

    #[test]
    fn test_parse_rejects_empty_or_non_alphanumeric_id() {
        assert_invalid("https://open.spotify.com/playlist/");
        assert_invalid("https://open.spotify.com/playlist/?si=1");
        assert_invalid("https://open.spotify.com/playlist/abc-def");
        assert_invalid("https://open.spotify.com/playlist/abc_def");
    }
}
