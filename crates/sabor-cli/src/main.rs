//! Sabor Express command-line tools.
//!
//! `fetch-data` downloads the restaurant dataset into menu files, `serve`
//! runs the API, and `menu` starts the interactive console client.

mod api;
mod input;
mod menu;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use sabor_client::fetch::{fetch_and_save, DATASET_URL};
use sabor_client::{Client, ClientConfig};
use sabor_core::DataPaths;
use sabor_server::{init_tracing, serve, ServerArgs, ServerConfig};
use tracing::info;

use crate::input::EditorInput;
use crate::menu::MenuApp;

/// Sabor Express command-line tools
#[derive(Parser, Debug)]
#[command(name = "sabor")]
#[command(version, about = "Sabor Express restaurant catalog tools")]
pub struct Args {
    /// Log level (trace, debug, info, warn, error). Defaults to `info` for
    /// `serve` and `warn` otherwise.
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download the restaurant dataset and save one menu file per restaurant
    FetchData {
        /// Dataset URL
        #[arg(long, default_value = DATASET_URL)]
        url: String,

        /// Project root; menus are written to `<root>/data/restaurants`
        #[arg(long, env = "SABOR_DATA_ROOT", default_value = ".")]
        data_root: PathBuf,
    },

    /// Run the HTTP API
    Serve {
        #[command(flatten)]
        server: ServerArgs,
    },

    /// Start the interactive console menu
    Menu {
        /// API base URL
        #[arg(long, default_value = sabor_client::config::DEFAULT_BASE_URL)]
        base_url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 5)]
        timeout_secs: u64,

        /// Don't clear the screen between views
        #[arg(long, default_value_t = false)]
        no_clear: bool,
    },
}

impl Args {
    /// The requested log level, or the command's default.
    pub fn effective_log_level(&self) -> &str {
        match (&self.log_level, &self.command) {
            (Some(level), _) => level.as_str(),
            // The console stays quiet so logs do not interleave with the menu.
            (None, Command::Serve { .. }) => "info",
            (None, _) => "warn",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(args.effective_log_level());

    match args.command {
        Command::FetchData { url, data_root } => {
            let dir = DataPaths::from_root(&data_root).menu_dir;
            println!("Fetching restaurant data from {url}...");
            let written = fetch_and_save(&url, &dir).await?;
            println!("Saved {} menu files to {}", written.len(), dir.display());
        }
        Command::Serve { server } => {
            serve(ServerConfig::from(&server)).await?;
        }
        Command::Menu {
            base_url,
            timeout_secs,
            no_clear,
        } => {
            let config =
                ClientConfig::new(base_url).with_timeout(Duration::from_secs(timeout_secs));
            let client = Client::new(config)?;
            info!(base_url = %client.base_url(), "Starting console");

            let mut input = EditorInput::new()?;
            {
                let mut app =
                    MenuApp::new(client, &mut input, std::io::stdout()).with_clear(!no_clear);
                app.run().await?;
            }
            input.save_history();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_defaults_per_command() {
        assert_eq!(Args::parse_from(["sabor", "serve"]).effective_log_level(), "info");
        assert_eq!(Args::parse_from(["sabor", "menu"]).effective_log_level(), "warn");
        assert_eq!(Args::parse_from(["sabor", "fetch-data"]).effective_log_level(), "warn");
    }

    #[test]
    fn test_explicit_log_level_is_kept() {
        let args = Args::parse_from(["sabor", "--log-level", "warn", "serve"]);
        assert_eq!(args.effective_log_level(), "warn");

        let args = Args::parse_from(["sabor", "--log-level", "debug", "menu"]);
        assert_eq!(args.effective_log_level(), "debug");
    }
}
