//! Client for the Kitsu anime/manga catalog.
//!
//! [`query`] turns typed filters into `filter[...]` query fragments,
//! [`models`] decodes JSON:API compound documents into owned entities and
//! [`clients::KitsuClient`] wires both to the HTTP API.

pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod models;
pub mod query;

use clap::Parser;
use cli::{Cli, Commands, ConfigCommands};
pub use clients::{BrowseOptions, BrowseSort, KitsuClient};
pub use config::Config;
pub use domain::Media;
pub use error::{ApiError, DecodeError, KitsuError};
pub use query::Filters;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    // Logs go to stderr so `--json` output stays parseable.
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let client = KitsuClient::from_config(&config.api)?;
    debug!("Using Kitsu API at {}", client.base_url());

    let json = cli.json;

    match cli.command {
        Commands::Anime { id } => cli::cmd_media(&client, Media::Anime, id, json).await,
        Commands::Manga { id } => cli::cmd_media(&client, Media::Manga, id, json).await,
        Commands::Character { media, id } => cli::cmd_character(&client, media, id, json).await,
        Commands::Franchises { media, id } => {
            cli::cmd_franchises(&client, media, id, json).await
        }
        Commands::Browse {
            media,
            sort,
            page,
            filters,
        } => cli::cmd_browse(&client, &config, media, sort, &page, &filters, json).await,
        Commands::Search { media, query, page } => {
            let query = query.join(" ");
            cli::cmd_search(&client, &config, media, &query, &page, json).await
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init => cli::cmd_config_init(),
            ConfigCommands::Show => cli::cmd_config_show(&config),
        },
    }
}
