//! Moments CLI
//!
//! Terminal client for the Moments journal:
//! - List moments with their comments
//! - Create, edit and delete moments
//! - Comment on a moment (optionally rated 0-5)
//!
//! Every command loads the board from the API first and prints the
//! reconciled list afterwards.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moments::config::{generate_default_config, Config, LoadedConfig, LoggingConfig};
use moments::render::render_moments;
use moments::{HttpGateway, MomentBoard, MomentId, MAX_RATING};

#[derive(Parser)]
#[command(name = "moments")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Journal of moments and comments")]
#[command(long_about = "Moments keeps a journal of posts with images and comments.\nAll data lives on the Moments API server.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: searched in standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, e.g. http://127.0.0.1:3333/api
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Use the unrated board (no comment ratings)
    #[arg(long, global = true)]
    pub no_ratings: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List moments and their comments
    List,

    /// Create a moment
    Create {
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Image file to attach
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Edit an existing moment; omitted fields keep their value
    Edit {
        id: MomentId,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// Replace the image with this file
        #[arg(short, long)]
        image: Option<PathBuf>,
        /// Remove the image
        #[arg(long, conflicts_with = "image")]
        clear_image: bool,
    },

    /// Delete a moment
    Delete { id: MomentId },

    /// Comment on a moment
    Comment {
        moment_id: MomentId,
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        text: String,
        /// Rating from 0 to 5
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=MAX_RATING as i64))]
        rate: Option<u8>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let config = generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &config)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", config),
        }
        return Ok(());
    }

    let loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::load_default(),
    };
    let mut config = loaded.config;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if cli.no_ratings {
        config.board.ratings_enabled = false;
    }

    init_logging(&config.logging);

    for error in &loaded.skipped {
        tracing::warn!("Ignoring config file: {}", error);
    }
    match &loaded.source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }

    let settings = config.board.settings();
    let gateway = HttpGateway::new(config.api.gateway_config())?;
    let board = MomentBoard::new(gateway, settings);

    if let Err(e) = board.mount().await {
        eprintln!("Cannot load moments from {}", config.api.base_url);
        eprintln!("Error: {}", e);
        if matches!(cli.command, Commands::List | Commands::Edit { .. }) {
            std::process::exit(1);
        }
    }

    match cli.command {
        Commands::List => {}

        Commands::Create {
            title,
            description,
            image,
        } => {
            board.update_moment_field("title", title)?;
            board.update_moment_field("description", description)?;
            if let Some(path) = image {
                board.attach_image(&path).await?;
            }

            match board.submit_moment().await {
                Ok(moment) => eprintln!("Created moment {}", moment.id),
                Err(e) => exit_with("Create failed", &e),
            }
        }

        Commands::Edit {
            id,
            title,
            description,
            image,
            clear_image,
        } => {
            if !board.edit_moment(id) {
                eprintln!("Moment {} not found", id);
                std::process::exit(1);
            }

            if let Some(title) = title {
                board.update_moment_field("title", title)?;
            }
            if let Some(description) = description {
                board.update_moment_field("description", description)?;
            }
            if let Some(path) = image {
                board.attach_image(&path).await?;
            } else if clear_image {
                board.set_moment_image(None);
            }

            match board.submit_moment().await {
                Ok(moment) => eprintln!("Updated moment {}", moment.id),
                Err(e) => exit_with("Update failed", &e),
            }
        }

        Commands::Delete { id } => match board.delete_moment(id).await {
            Ok(removed) => eprintln!("Deleted moment {} ({} listed entries removed)", id, removed),
            Err(e) => exit_with("Delete failed", &e),
        },

        Commands::Comment {
            moment_id,
            username,
            text,
            rate,
        } => {
            board.update_comment_field("username", username)?;
            board.update_comment_field("text", text)?;
            match rate {
                Some(_) if !settings.ratings_enabled => {
                    tracing::warn!("Ratings are disabled; ignoring --rate");
                }
                Some(rate) => board.set_comment_rating(Some(rate)),
                None => {}
            }

            match board.submit_comment(moment_id).await {
                Ok(()) => eprintln!("Commented on moment {}", moment_id),
                Err(e) => exit_with("Comment failed", &e),
            }
        }

        Commands::Config { .. } => unreachable!("handled before loading config"),
    }

    let moments = board.moments();
    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&moments)?),
        _ => print!("{}", render_moments(&moments, &settings)),
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("moments={}", config.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn exit_with(context: &str, error: &dyn std::error::Error) -> ! {
    eprintln!("{}: {}", context, error);
    std::process::exit(1);
}
