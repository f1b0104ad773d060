//! AppScout CLI
//!
//! Discovers high-rated App Store apps whose customer reviews match
//! keyword/phrase filters, and exports the candidates as CSV.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use appscout::{
    error::Result,
    export,
    models::Config,
    pipeline::{self, DiscoverOptions},
    services::{CatalogClient, ReviewFetcher},
    utils::{
        http::{HttpTransport, Transport},
        split_list,
    },
};

/// AppScout - review-phrase app discovery
#[derive(Parser, Debug)]
#[command(
    name = "appscout",
    version,
    about = "Discover high-rated apps with review-keyword filters"
)]
struct Cli {
    /// Comma-separated search terms (e.g., 'budget,planner,notes')
    #[arg(short, long, default_value = "")]
    terms: String,

    /// Optional single bundleId to look up (e.g., com.todoist.Todoist)
    #[arg(short, long, default_value = "")]
    bundle: String,

    /// Storefront country code (us, gb, de, etc.)
    #[arg(short, long, default_value = "us")]
    country: String,

    /// Minimum average star rating
    #[arg(short = 'r', long, default_value_t = 4.5)]
    min_rating: f64,

    /// Minimum rating count
    #[arg(short = 'R', long = "min-ratings", default_value_t = 100)]
    min_ratings: u64,

    /// Comma-separated list; match if ANY phrase appears in a review
    #[arg(short = 'a', long, default_value = "")]
    phrases_any: String,

    /// Comma-separated list; match only if ALL phrases appear in a review
    #[arg(short = 'A', long, default_value = "")]
    phrases_all: String,

    /// How many review pages to fetch per app (~50 reviews/page)
    #[arg(short = 'M', long, default_value_t = 3)]
    max_review_pages: u32,

    /// CSV path to write
    #[arg(short, long, default_value = "appstore_candidates.csv")]
    out: PathBuf,

    /// Path to an optional TOML config file for HTTP behavior
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("AppScout starting...");

    let config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    config.validate()?;

    let seed_terms = split_list(&cli.terms);

    if cli.bundle.is_empty() && seed_terms.is_empty() {
        log::error!("Provide --terms or --bundle");
        return Ok(());
    }

    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(&config.http)?);
    let catalog = CatalogClient::new(Arc::clone(&transport));
    let reviews = ReviewFetcher::new(transport);

    let opts = DiscoverOptions {
        country: cli.country,
        min_rating: cli.min_rating,
        min_rating_count: cli.min_ratings,
        phrases_any: split_list(&cli.phrases_any),
        phrases_all: split_list(&cli.phrases_all),
        max_review_pages: cli.max_review_pages,
    };

    let candidates = if !cli.bundle.is_empty() {
        log::info!("Looking up bundle id '{}'", cli.bundle);
        pipeline::lookup_candidate(&catalog, &reviews, &cli.bundle, &opts).await?
    } else {
        log::info!("Searching {} seed term(s)", seed_terms.len());
        pipeline::discover(&catalog, &reviews, &seed_terms, &opts).await?
    };

    export::write_csv(&candidates, &cli.out)?;
    log::info!(
        "Wrote {} candidate(s) to {}",
        candidates.len(),
        cli.out.display()
    );

    Ok(())
}
