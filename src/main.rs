//! CLI entry point for postdesk

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postdesk")]
#[command(version)]
#[command(about = "A small blog admin: list posts, read comments, edit posts", long_about = None)]
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
    /// Initialize a new site with sample posts
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Start the admin server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List posts
    List,

    /// Check that every post would pass edit validation
    Check,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postdesk=debug,info"
    } else {
        "postdesk=info"
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
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            postdesk::commands::init::init_site(&target_dir)?;
            println!("Initialized postdesk site in {:?}", target_dir);
        }

        Commands::Server { port, ip } => {
            let app = postdesk::Postdesk::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            postdesk::server::start(&app, &ip, port).await?;
        }

        Commands::List => {
            let app = postdesk::Postdesk::new(&base_dir)?;
            postdesk::commands::list::run(&app)?;
        }

        Commands::Check => {
            let app = postdesk::Postdesk::new(&base_dir)?;
            let report = app.check()?;
            for (id, errors) in &report.failures {
                println!("Post {}: {}", id, errors);
            }
            if !report.is_ok() {
                anyhow::bail!(
                    "{} of {} posts fail validation",
                    report.failures.len(),
                    report.total
                );
            }
            println!("All {} posts pass validation.", report.total);
        }

        Commands::Version => {
            println!("postdesk version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
