//! CLI interface module
//!
//! One-shot commands run directly against the store, no server needed.

pub mod commands;

use std::fmt;

use crate::cli::Commands;
use crate::errors::TagshortError;
use crate::storage::StorageFactory;
use commands::{add_url, decode_code, encode_id, list_urls, show_url, show_tags};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<TagshortError> for CliError {
    fn from(err: TagshortError) -> Self {
        match err {
            TagshortError::InvalidCode(msg) | TagshortError::Validation(msg) => {
                CliError::ParseError(msg)
            }
            other => CliError::StorageError(other.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        // 编解码不需要数据库
        Commands::Encode { id } => encode_id(id),
        Commands::Decode { code } => decode_code(&code),
        Commands::Serve => Err(CliError::CommandError(
            "serve is handled by server mode".to_string(),
        )),
        Commands::Add { url, tags, creator } => {
            let store = StorageFactory::create().await?;
            add_url(&store, &url, tags.as_deref(), creator.as_deref()).await
        }
        Commands::Show { code } => {
            let store = StorageFactory::create().await?;
            show_url(&store, &code).await
        }
        Commands::List => {
            let store = StorageFactory::create().await?;
            list_urls(&store).await
        }
        Commands::Tags { tag } => {
            let store = StorageFactory::create().await?;
            show_tags(&store, tag.as_deref()).await
        }
    }
}
