//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::content::Collection;
use folio_rs::Folio;

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "A personal portfolio site served from Markdown folders", long_about = None)]
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

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Article,
    Paper,
}

impl From<Kind> for Collection {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Article => Collection::Articles,
            Kind::Paper => Collection::Papers,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new portfolio site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new article or paper
    New {
        /// What to create
        #[arg(short, long, value_enum, default_value = "article")]
        kind: Kind,

        /// Title of the new document
        title: String,
    },

    /// Serve the site with per-visitor navigation
    #[command(alias = "s", alias = "server")]
    Serve {
        /// Port to listen on (defaults to server.port in _config.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.host in _config.yml)
        #[arg(short, long)]
        ip: Option<String>,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Reload open pages when content changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Export static files
    #[command(alias = "g")]
    Generate,

    /// Remove the exported files
    Clean,

    /// List site content
    List {
        /// Type of content to list (articles, papers, projects)
        #[arg(default_value = "articles")]
        r#type: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
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
            tracing::info!("Initializing portfolio in {:?}", target_dir);
            folio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized portfolio in {:?}", target_dir);
        }

        Commands::New { kind, title } => {
            let folio = Folio::new(&base_dir)?;
            folio_rs::commands::new::create_entry(&folio, &title, kind.into())?;
        }

        Commands::Serve {
            port,
            ip,
            open,
            watch,
        } => {
            let folio = Folio::new(&base_dir)?;
            let port = port.unwrap_or(folio.config.server.port);
            let ip = ip.unwrap_or_else(|| folio.config.server.host.clone());

            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio_rs::server::start(&folio, &ip, port, watch, open).await?;
        }

        Commands::Generate => {
            let folio = Folio::new(&base_dir)?;
            tracing::info!("Generating static files...");
            folio.generate()?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let folio = Folio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type, json } => {
            let folio = Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio, &r#type, json)?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
