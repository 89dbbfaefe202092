//! Street10 search CLI - query the admin global search from a terminal

use clap::{Parser, Subcommand};
use street10_search_core::aggregator::SearchAggregator;
use street10_search_core::config::Config;
use street10_search_core::domain::{GroupedHits, SearchHit};
use street10_search_core::providers::{RestClient, SearchProvider, UsersProvider, VendorsProvider};
use tracing::info;

#[derive(Parser)]
#[command(name = "street10-search")]
#[command(author, version, about = "Street10 admin global search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a search across all categories
    Search {
        /// Free-text query
        query: String,
        /// Maximum results (flat) or results per group (grouped)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Group results by category instead of a flat list
        #[arg(short, long)]
        grouped: bool,
        /// Also query the live users/vendors endpoints
        #[arg(long)]
        live: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Run health check
    Doctor,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show the config file path
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("street10_search=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            limit,
            grouped,
            live,
        } => cmd_search(&query, limit, grouped, live, cli.format, cli.quiet).await,

        Commands::Config { action } => cmd_config(action, cli.quiet),

        Commands::Doctor => cmd_doctor(cli.quiet).await,
    }
}

/// Assemble the aggregator: demo fixtures always, live providers on request
fn build_aggregator(config: &Config, live: bool) -> anyhow::Result<SearchAggregator> {
    let mut aggregator = SearchAggregator::new();

    if live {
        let mut builder = RestClient::builder()
            .base_url(&config.api.base_url)
            .timeout_secs(config.api.timeout_secs);
        if let Some(token) = config.api.resolved_admin_token()? {
            builder = builder.admin_token(token);
        }
        let client = builder.build()?;

        aggregator = aggregator
            .with_provider(UsersProvider::new(client.clone()))
            .with_provider(VendorsProvider::new(client));
    }

    Ok(aggregator
        .with_demo_fixtures()
        .with_page_size(config.api.page_size))
}

async fn cmd_search(
    query: &str,
    limit: Option<usize>,
    grouped: bool,
    live: bool,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let aggregator = build_aggregator(&config, live)?;

    if grouped {
        let limit = limit.or(Some(config.search.group_limit));
        let groups = aggregator.search_grouped(query, limit).await?;
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&groups)?),
            OutputFormat::Text => print_groups(&groups, query, quiet),
        }
    } else {
        let limit = limit.or(Some(config.search.flat_limit));
        let hits = aggregator.search(query, limit).await?;
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&hits)?),
            OutputFormat::Text => print_hits(&hits, quiet),
        }
    }

    Ok(())
}

fn print_hits(hits: &[SearchHit], quiet: bool) {
    if hits.is_empty() {
        if !quiet {
            println!("No results.");
        }
        return;
    }

    for hit in hits {
        match &hit.subtitle {
            Some(subtitle) => println!("[{}] {} - {}", hit.kind, hit.title, subtitle),
            None => println!("[{}] {}", hit.kind, hit.title),
        }
    }
}

fn print_groups(groups: &[GroupedHits], query: &str, quiet: bool) {
    if groups.is_empty() {
        if !quiet {
            println!("No results.");
        }
        return;
    }

    for group in groups {
        println!("{} ({})", group.label, group.count);
        for hit in &group.hits {
            match &hit.subtitle {
                Some(subtitle) => println!("  {} - {}", hit.title, subtitle),
                None => println!("  {}", hit.title),
            }
        }
        if group.count > group.hits.len() && !quiet {
            println!("  view all: {}", group.view_all_route(query));
        }
        println!();
    }
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, config.get(&key)?);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for (key, value) in config.list()? {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
        }
    }
    Ok(())
}

async fn cmd_doctor(quiet: bool) -> anyhow::Result<()> {
    let mut all_ok = true;

    // Config check
    match Config::load() {
        Ok(config) => {
            if !quiet {
                println!("[ok] Config: valid ({})", config.api.base_url);
            }

            // Live API check: one tiny users query
            let mut builder = RestClient::builder()
                .base_url(&config.api.base_url)
                .timeout_secs(config.api.timeout_secs);
            if let Some(token) = config.api.resolved_admin_token()? {
                builder = builder.admin_token(token);
            }
            let users = UsersProvider::new(builder.build()?);

            match users.search("a", 1).await {
                Ok(hits) => {
                    if !quiet {
                        println!("[ok] Users endpoint: reachable ({} hits)", hits.len());
                    }
                }
                Err(e) => {
                    all_ok = false;
                    println!("[!!] Users endpoint: {} ({})", e, e.code());
                }
            }
        }
        Err(e) => {
            all_ok = false;
            println!("[!!] Config: {}", e);
        }
    }

    if !quiet {
        println!();
        if all_ok {
            println!("All checks passed!");
        } else {
            println!("Some checks failed. See above for details.");
        }
    }

    if all_ok {
        info!("doctor: all checks passed");
    }

    Ok(())
}
