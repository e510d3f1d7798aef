//! Command-line surface: argument parsing and dispatch to [`Actions`].
//!
//! # Usage
//!
//! ```bash
//! urlshortener add https://example.com/some/long/path
//! urlshortener get Hpa3t2B
//! urlshortener list --limit 10 --offset 20
//! urlshortener delete Hpa3t2B
//! ```

use clap::{Parser, Subcommand};
use std::io::Write;

use crate::actions::Actions;
use crate::application::services::Shortener;
use crate::error::ActionError;

/// Shorten URLs and manage the stored mappings.
#[derive(Debug, Parser)]
#[command(name = "urlshortener")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Store a URL and print its new short code
    #[command(visible_alias = "a")]
    Add {
        /// Absolute http(s) URL to shorten
        url: Option<String>,
    },

    /// Print the URL a short code resolves to
    #[command(visible_alias = "g")]
    Get {
        /// Short code to resolve
        code: Option<String>,
    },

    /// Print stored mappings, newest first
    #[command(visible_alias = "l")]
    List {
        /// Maximum number of items to print
        #[arg(short, long, default_value_t = 20, allow_negative_numbers = true)]
        limit: i64,

        /// Number of newest items to skip
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },

    /// Remove the mapping for a short code
    #[command(visible_alias = "d")]
    Delete {
        /// Short code to delete
        code: Option<String>,
    },
}

/// Runs one parsed command, writing its JSON record to `out`.
pub async fn execute<S, W>(
    command: Commands,
    actions: &Actions<S>,
    out: &mut W,
) -> Result<(), ActionError>
where
    S: Shortener,
    W: Write + ?Sized,
{
    match command {
        Commands::Add { url } => actions.add(out, url.as_slice()).await,
        Commands::Get { code } => actions.get(out, code.as_slice()).await,
        Commands::List { limit, offset } => actions.list(out, limit, offset).await,
        Commands::Delete { code } => actions.delete(out, code.as_slice()).await,
    }
}
