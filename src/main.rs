//! CLI entry point for mdxsite-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdxsite-rs")]
#[command(version)]
#[command(about = "Content pipeline for a bilingual MDX portfolio and blog site", long_about = None)]
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
    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (posts, projects, tags, skills)
        #[arg(default_value = "posts")]
        r#type: String,

        /// Restrict to one locale (e.g. ja, en)
        #[arg(short, long)]
        locale: Option<String>,

        /// Emit entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate every content file
    Check,

    /// Create a new content file
    New {
        /// Kind of content to create (post, project)
        #[arg(short, long, default_value = "post")]
        kind: String,

        /// Locale tag for the new file (defaults to the configured one)
        #[arg(short, long)]
        locale: Option<String>,

        /// Title of the new content
        title: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdxsite_rs=debug,info"
    } else {
        "mdxsite_rs=info"
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
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            r#type,
            locale,
            json,
        } => {
            let site = mdxsite_rs::Site::new(&base_dir)?;
            mdxsite_rs::commands::list::run(&site, &r#type, locale.as_deref(), json)?;
        }

        Commands::Check => {
            let site = mdxsite_rs::Site::new(&base_dir)?;
            tracing::info!("Checking content under {:?}", base_dir);
            mdxsite_rs::commands::check::run(&site)?;
        }

        Commands::New {
            kind,
            locale,
            title,
        } => {
            let site = mdxsite_rs::Site::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", kind, title);
            mdxsite_rs::commands::new::run(&site, &title, &kind, locale.as_deref())?;
        }

        Commands::Version => {
            println!("mdxsite-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
