//! Command line entry point of playlist-csv.

use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli::run().await {
        Ok(summary) => {
            println!(
                "Export complete! Saved {} tracks to {}",
                summary.rows,
                summary.output_file.display()
            );
            if summary.skipped > 0 {
                println!(
                    "{} playlist entries were unavailable and left out",
                    summary.skipped
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
