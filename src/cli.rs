use clap::{Parser, Subcommand};
use jellygrid::catalog::KindFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jellygrid")]
#[command(author, version, about = "Browse a Jellyfin library as a grid of movies, series and collections")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Server base address (overrides server.url)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// User id (overrides server.user_id)
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// API key (overrides server.api_key)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Number of grid columns, clamped to 1..=7 (overrides display.columns)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub columns: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List movies and series
    Movies {
        /// Only show one kind: all, movie or series
        #[arg(long, default_value = "all")]
        kind: KindFilter,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List collections
    Collections {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the movies and series inside a collection
    Collection {
        /// Collection (BoxSet) id
        #[arg(required = true)]
        id: String,

        /// Only show one kind: all, movie or series
        #[arg(long, default_value = "all")]
        kind: KindFilter,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the browser, stream and cover links of an item
    Links {
        /// Item id
        #[arg(required = true)]
        id: String,

        /// Id of the server that owns the item
        #[arg(long, default_value = "")]
        server_id: String,

        /// Primary image tag
        #[arg(long, default_value = "")]
        tag: String,
    },

    /// Mark an item as favorite
    Favorite {
        /// Item id
        #[arg(required = true)]
        id: String,

        /// Display name used in the confirmation message
        #[arg(long)]
        name: Option<String>,

        /// Remove the favorite mark instead
        #[arg(long)]
        remove: bool,
    },

    /// Validate configuration
    Validate,

    /// Display version information
    Version,
}

#[derive(clap::Args)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print every item with its links instead of a grid
    #[arg(long, conflicts_with = "json")]
    pub links: bool,
}
