/// A credited artist of a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// Display name
    pub name: String,
}

/// One playlist entry, as written to the CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Track title
    pub name: String,
    /// Credited artists, in the order the source lists them
    pub artists: Vec<Artist>,
}

impl Track {
    /// Build a track from plain artist names.
    pub fn new(name: impl Into<String>, artists: &[&str]) -> Self {
        Track {
            name: name.into(),
            artists: artists
                .iter()
                .map(|a| Artist {
                    name: (*a).to_string(),
                })
                .collect(),
        }
    }

    /// Artist names joined with `", "`.
    pub fn joined_artists(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Opaque continuation marker handed back to the source for the next page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageToken(pub u32);

/// One page of a playlist. `next == None` means there are no more pages.
#[derive(Debug, Clone, Default)]
pub struct TrackPage {
    /// Tracks on this page, in playlist order
    pub items: Vec<Track>,
    /// Token for the following page, if any
    pub next: Option<PageToken>,
    /// Entries on this page the source could not turn into a track
    pub skipped: usize,
}
