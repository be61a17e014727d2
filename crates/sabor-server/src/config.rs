//! Server configuration.

use std::path::PathBuf;

use clap::Parser;
use sabor_core::DataPaths;

/// Sabor Express API server command line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "sabor-server")]
#[command(about = "HTTP/JSON API for the Sabor Express restaurant catalog")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Listen address and data locations, shared with the `sabor serve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, default_value = "127.0.0.1:8000")]
    pub listen: String,

    /// Project root holding `data/restaurants` and `data/restaurants_metadata.json`.
    #[arg(long, env = "SABOR_DATA_ROOT", default_value = ".")]
    pub data_root: PathBuf,

    /// Override the menu directory.
    #[arg(long)]
    pub menu_dir: Option<PathBuf>,

    /// Override the metadata file.
    #[arg(long)]
    pub metadata_file: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Where the catalog is loaded from.
    pub data: DataPaths,
}

impl From<&ServerArgs> for ServerConfig {
    fn from(args: &ServerArgs) -> Self {
        let mut data = DataPaths::from_root(&args.data_root);
        if let Some(dir) = &args.menu_dir {
            data = data.with_menu_dir(dir);
        }
        if let Some(file) = &args.metadata_file {
            data = data.with_metadata_file(file);
        }

        Self {
            listen_addr: args.listen.clone(),
            data,
        }
    }
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        Self::from(&args.server)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8000".to_string(),
            data: DataPaths::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["sabor-server"]);
        let config = ServerConfig::from(&args);
        assert_eq!(config.listen_addr, "127.0.0.1:8000");
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_path_overrides() {
        let args = Args::parse_from([
            "sabor-server",
            "--listen",
            "0.0.0.0:9000",
            "--data-root",
            "/srv/sabor",
            "--menu-dir",
            "/tmp/menus",
        ]);
        let config = ServerConfig::from(&args);
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.data.menu_dir, PathBuf::from("/tmp/menus"));
        assert_eq!(
            config.data.metadata_file,
            PathBuf::from("/srv/sabor/data/restaurants_metadata.json")
        );
    }
}
