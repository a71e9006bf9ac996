/// Data entities for tracks, artists and pages
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Paginated track source abstraction
pub mod source;
/// Spotify API client
pub mod spotify;

pub use source::TrackSource;
pub use spotify::SpotifyClient;
