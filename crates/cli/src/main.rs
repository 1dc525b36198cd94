//! Storefront CLI
//!
//! Terminal front end for the storefront: fetches the catalog once, then
//! browses it, shows product details, or runs an interactive shopping
//! session with a cart.

mod render;
mod shell;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use storefront_core::catalog::{HttpCatalogSource, Query, SortMode};
use storefront_core::state::{CatalogState, Storefront, StorefrontConfig};
use storefront_core::ProductId;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use shell::{Outcome, ShellCommand};

#[derive(Parser, Clone)]
#[command(author, version, about = "Storefront - browse a product catalog and fill a cart")]
struct Args {
    /// Catalog endpoint returning {"products": [...]}
    #[arg(long, global = true)]
    catalog_url: Option<String>,
    /// Products per page
    #[arg(long, global = true)]
    page_size: Option<usize>,
    /// Config file (default: .storefront/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Interactive shopping session (default)
    Shop,
    /// Print one page of the catalog
    Browse {
        /// Case-insensitive title search
        #[arg(short, long, default_value = "")]
        search: String,
        /// Category name, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,
        /// default | priceAsc | priceDesc | titleAsc
        #[arg(long, default_value = "default")]
        sort: SortMode,
        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// List categories
    Categories,
    /// Show product details
    Show {
        /// Product id
        id: ProductId,
    },
    /// Inspect or write the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommand {
    /// Print the effective configuration as JSON
    Show,
    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Args::parse();
    let config = load_config(&args)?;

    if let Some(CliCommand::Config { action }) = &args.command {
        return run_config(action, &config, &config_path(&args));
    }

    let mut store = Storefront::new(Query::new(config.page_size));
    let source = HttpCatalogSource::new(&config)?;
    tracing::info!(url = %source.url(), "Loading catalog");
    store.load(&source).await;

    if let CatalogState::Failed(message) = store.catalog() {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }

    match args.command.unwrap_or(CliCommand::Shop) {
        CliCommand::Shop => run_shop(&mut store).await?,
        CliCommand::Browse {
            search,
            category,
            sort,
            page,
            json,
        } => {
            store.set_search(search);
            store.set_category(category.as_str());
            store.set_sort(sort);
            store.set_page(page);

            if json {
                let out = serde_json::to_string_pretty(store.view())
                    .context("Failed to serialize catalog page")?;
                println!("{}", out);
            } else {
                print!("{}", render::catalog_page(store.view(), store.query()));
            }
        }
        CliCommand::Categories => print!("{}", render::category_list(store.categories())),
        CliCommand::Show { id } => match store.select(id) {
            Some(product) => print!("{}", render::product_detail(product)),
            None => {
                eprintln!("No product with id {}", id);
                std::process::exit(1);
            }
        },
        CliCommand::Config { .. } => {}
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_path(args: &Args) -> PathBuf {
    args.config
        .clone()
        .unwrap_or_else(StorefrontConfig::default_path)
}

/// Defaults → config file → STOREFRONT_* env → command-line flags
fn load_config(args: &Args) -> Result<StorefrontConfig> {
    let mut config = StorefrontConfig::load_from(&config_path(args))?.with_env();

    if let Some(url) = &args.catalog_url {
        config = config.with_catalog_url(url.clone());
    }
    if let Some(size) = args.page_size {
        config = config.with_page_size(size);
    }
    config.validate().context("Invalid command-line settings")?;

    tracing::debug!(
        url = %config.catalog_url,
        page_size = config.page_size,
        "Configuration loaded"
    );
    Ok(config)
}

fn run_config(action: &ConfigCommand, config: &StorefrontConfig, path: &Path) -> Result<()> {
    match action {
        ConfigCommand::Show => {
            let out =
                serde_json::to_string_pretty(config).context("Failed to serialize config")?;
            println!("{}", out);
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            config.save_to(path)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

async fn run_shop(store: &mut Storefront) -> Result<()> {
    println!(
        "Storefront ({} products). Type 'help' for commands.",
        store.catalog().products().len()
    );
    print!("{}", render::catalog_page(store.view(), store.query()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match shell::execute(store, command) {
            Outcome::Print(text) => print!("{}", text),
            Outcome::Quit => break,
        }
    }

    println!("Bye!");
    Ok(())
}
