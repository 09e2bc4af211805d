//! CLI entry point for rapidnews

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rapidnews")]
#[command(version)]
#[command(about = "Serve and export a Markdown news site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new article
    New {
        /// Title of the new article
        title: String,

        /// Byline for the article
        #[arg(short, long)]
        author: Option<String>,

        /// Tags, repeatable
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Export the site as static files
    #[command(alias = "g")]
    Generate,

    /// Start a local server rendering pages on request
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Remove the export directory
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "rapidnews=debug,info"
    } else {
        "rapidnews=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    match cli.command {
        Commands::New {
            title,
            author,
            tags,
        } => {
            let app = rapidnews::RapidNews::new(&base_dir)?;
            tracing::info!("Creating new article with title: {}", title);
            app.new_article(&title, author.as_deref(), &tags)?;
        }

        Commands::Generate => {
            let app = rapidnews::RapidNews::new(&base_dir)?;
            tracing::info!("Generating static files...");
            app.generate()?;
            println!("Generated successfully!");
        }

        Commands::Serve { port, ip } => {
            let app = rapidnews::RapidNews::new(&base_dir)?;
            let port = port.unwrap_or(app.config.server.port);
            let ip = ip.unwrap_or_else(|| app.config.server.ip.clone());

            tracing::info!("Starting server at http://{}:{}", ip, port);
            rapidnews::server::start(&app, &ip, port).await?;
        }

        Commands::Clean => {
            let app = rapidnews::RapidNews::new(&base_dir)?;
            tracing::info!("Cleaning export folder...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let app = rapidnews::RapidNews::new(&base_dir)?;
            rapidnews::commands::list::run(&app, &r#type)?;
        }

        Commands::Version => {
            println!("rapidnews version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
