use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};
use playlist_csv::clients::{SpotifyClient, errors::Result};
use playlist_csv::csv_output::ArtistSpacing;
use playlist_csv::exporter::{ConfigBuilder, ExportSummary, Exporter};

/// Values given here take precedence over the environment and `.env`.
#[derive(Parser, Debug)]
#[command(name = "playlist-csv")]
#[command(version, about = "Export a Spotify playlist's tracks to a CSV file", long_about = None)]
pub struct Cli {
    /// Playlist link, overrides PLAYLIST_LINK
    #[arg(long, value_name = "URL")]
    playlist: Option<String>,

    /// Output CSV path, overrides OUTPUT_FILE_NAME
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Prefix the artist column with a space, like older exports did
    #[arg(long)]
    legacy_artist_spacing: bool,

    /// Load environment from this file instead of ./.env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,
}

pub async fn run() -> Result<ExportSummary> {
    let cli = Cli::parse();
    load_env(cli.env_file.as_ref())?;

    info!("Building config ...");
    let mut builder = ConfigBuilder::new();
    if let Some(link) = cli.playlist {
        builder = builder.playlist_link(link);
    }
    if let Some(output) = cli.output {
        builder = builder.output_file(output);
    }
    if cli.legacy_artist_spacing {
        builder = builder.artist_spacing(ArtistSpacing::Legacy);
    }
    let config = builder.build()?;

    let exporter = Exporter::new(config);
    // Reject a bad link before talking to Spotify
    let playlist = exporter.playlist()?;

    info!("Authorizing client ...");
    let config = exporter.config();
    let spotify = SpotifyClient::new(&config.client_id, &config.client_secret);
    spotify.authorize_client().await?;

    exporter.export(&spotify, &playlist).await
}

fn load_env(env_file: Option<&PathBuf>) -> Result<()> {
    match env_file {
        Some(path) => {
            dotenvy::from_path(path)?;
            debug!("Loaded environment from {}", path.display());
        }
        // A missing ./.env is fine, the variables may already be set
        None => match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(e) => return Err(e.into()),
        },
    }
    Ok(())
}
