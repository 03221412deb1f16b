//! Libris CLI - Command-line interface for the book inventory

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "libris")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data directory (defaults to $LIBRIS_DATA_DIR, then ./libris_data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new book
    Add {
        /// Unique book ID
        id: String,

        /// Book title
        #[arg(short, long)]
        title: String,

        /// Author name
        #[arg(short, long)]
        author: String,

        /// Cover image file (jpg, jpeg or png)
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Delete a book and its stored cover image
    Delete {
        /// Book ID to delete
        id: String,
    },

    /// Issue a book to a borrower
    Issue {
        /// Book ID to issue
        id: String,

        /// Borrower name
        #[arg(long)]
        to: String,
    },

    /// Return a previously issued book
    Return {
        /// Book ID to return
        id: String,
    },

    /// List the local inventory
    List {
        /// Show the issued-loans table instead of the books table
        #[arg(long)]
        loans: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the Open Library catalog
    Search {
        /// Free-text search term
        term: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "libris_cli=debug,libris_core=debug"
    } else {
        "libris_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = commands::resolve_data_dir(cli.data_dir);

    match cli.command {
        Commands::Add {
            id,
            title,
            author,
            image,
        } => commands::add(&data_dir, &id, &title, &author, image.as_deref()).await,

        Commands::Delete { id } => commands::delete(&data_dir, &id).await,

        Commands::Issue { id, to } => commands::issue(&data_dir, &id, &to).await,

        Commands::Return { id } => commands::return_book(&data_dir, &id).await,

        Commands::List { loans, json } => commands::list(&data_dir, loans, json).await,

        Commands::Search { term, json } => commands::search(&term, json).await,
    }
}
