//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// tagshort - tag-indexed URL shortener
#[derive(Parser, Debug)]
#[command(name = "tagshort")]
#[command(version)]
#[command(about = "A tag-indexed URL shortener service", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Write a sample configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "config.example.toml")]
    pub generate_config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Store a URL and print its code
    Add {
        /// Destination URL; `http://` is prepended when no scheme is given
        url: String,

        /// Comma separated tags
        #[arg(long, short = 't')]
        tags: Option<String>,

        /// Creator display name (default: anonymous)
        #[arg(long)]
        creator: Option<String>,
    },

    /// Show one URL with its creator and tags
    Show {
        code: String,
    },

    /// List every stored URL
    List,

    /// Tag counts, or the URLs carrying one tag
    Tags {
        tag: Option<String>,
    },

    /// Encode an integer id as a code
    Encode {
        id: u64,
    },

    /// Decode a code into its integer id
    Decode {
        code: String,
    },
}
