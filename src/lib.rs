//! Playlist CSV - export a Spotify playlist's track listing to a CSV file
//!
//! The export is a linear pipeline: parse the playlist link, page through the
//! playlist's tracks, then write one `track,artist` row per track.

/// Client modules for interacting with external services
pub mod clients;
/// CSV serialization of fetched tracks
pub mod csv_output;
/// Configuration and the parse, fetch and write pipeline
pub mod exporter;
/// Playlist share link parsing
pub mod playlist_link;
