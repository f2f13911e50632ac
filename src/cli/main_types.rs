use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flick-finder")]
#[command(about = "Find a random Flickr photo by phrase or by location")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[arg(long, global = true, env = "FLICKR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for a random photo
    Search {
        #[command(subcommand)]
        command: SearchCommands,
    },
    /// API key management
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum SearchCommands {
    /// Search photos matching a text phrase
    Phrase {
        /// Text to search for
        text: String,
        /// Write the image bytes to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Seed the photo choice for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Search photos inside a bounding box around the equator and prime meridian
    Location {
        /// Latitude magnitude in whole degrees (-90..=90)
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        /// Longitude magnitude in whole degrees (-180..=180)
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
        /// Write the image bytes to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Seed the photo choice for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Store the Flickr API key in the OS keyring
    SetKey {
        /// Key to store; prompted for when omitted
        #[arg(long)]
        key: Option<String>,
    },
    /// Remove the stored API key
    Clear,
    /// Show where the API key comes from
    Status,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set a profile field (url, count-field, highlight-errors)
    Set {
        /// Field name
        field: String,
        /// New value
        value: String,
    },
}
