use clap::{Parser, Subcommand};
use rally_scorer::{
    api::HttpRatingsApi,
    config::Settings,
    models::TierSet,
    summary::{self, SummaryService},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[clap(name = "rally-scorer")]
#[clap(about = "Derive pickleball performance summaries from the ratings API", long_about = None)]
struct Cli {
    /// Override the API base URL from configuration
    #[clap(long, global = true)]
    base_url: Option<String>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and derive the full performance summary for a player
    Summary {
        /// Player ID
        #[clap(short, long)]
        player_id: String,
    },

    /// Fetch the raw rating detail for a player
    Rating {
        /// Player ID
        #[clap(short, long)]
        player_id: String,
    },

    /// Print the tier table (remote when reachable, configured otherwise)
    Tiers,

    /// Resolve a rating against the configured tier table, offline
    Resolve {
        /// Rating value
        #[clap(short, long)]
        rating: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut settings = Settings::new().unwrap_or_else(|_| {
        info!("Using default settings");
        Settings::default()
    });

    if let Some(base_url) = cli.base_url {
        settings.api.base_url = base_url;
    }

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    match cli.command {
        Commands::Summary { player_id } => {
            let api = Arc::new(HttpRatingsApi::new(settings.api.clone())?);
            let service = SummaryService::new(api, &settings)?;

            match service.player_summary(&player_id).await {
                Ok(outcome) => {
                    let degraded = outcome.is_fallback();
                    let summary = outcome.into_summary();

                    println!("\n=== Performance Summary ===");
                    println!("Player: {}", summary.player_id);
                    println!("Rating: {:.0}", summary.overall_rating);
                    println!("Tier: {} ({})", summary.tier_name, summary.tier_color);
                    println!("Percentile: {:.1}", summary.percentile);
                    println!("\nDimensions:");
                    for (name, value) in summary.dimensions.entries() {
                        println!("  {:<12} {:.1}", name, value);
                    }
                    println!("\nStrongest: {}", summary.strongest_area);
                    println!("Weakest: {}", summary.weakest_area);

                    match summary.next_tier {
                        Some(next) => println!(
                            "\nNext tier: {} ({:.0} points to go)",
                            next.name, next.points_needed
                        ),
                        None => println!("\nNo higher tier. Top of the ladder."),
                    }

                    if degraded {
                        println!("\n(composed from secondary sources; some values are defaults)");
                    }
                }
                Err(e) => {
                    error!("Failed to build summary: {}", e);
                }
            }
        }

        Commands::Rating { player_id } => {
            let api = Arc::new(HttpRatingsApi::new(settings.api.clone())?);
            let service = SummaryService::new(api, &settings)?;

            match service.rating_detail(&player_id).await {
                Ok(record) => {
                    println!("\nPlayer: {}", record.player_id);
                    println!("Rating: {:.0}", record.rating);
                    match record.percentile {
                        Some(p) => println!("Percentile: {:.1}", p),
                        None => println!("Percentile: unavailable"),
                    }
                    match record.dimensions {
                        Some(dims) => {
                            println!("Dimensions:");
                            for (name, value) in dims.entries() {
                                println!("  {:<12} {:.1}", name, value);
                            }
                        }
                        None => println!("No dimension breakdown on this record"),
                    }
                }
                Err(e) => {
                    error!("Failed to fetch rating: {}", e);
                }
            }
        }

        Commands::Tiers => {
            let api = Arc::new(HttpRatingsApi::new(settings.api.clone())?);
            let service = SummaryService::new(api, &settings)?;

            let table = service.tier_table().await;
            println!("\n{:<12} {:>10} {:>10}  color", "tier", "from", "below");
            for tier in table.tiers() {
                println!(
                    "{:<12} {:>10.0} {:>10.0}  {}",
                    tier.name, tier.min_rating, tier.max_rating, tier.color
                );
            }
            println!(
                "\nRatings from {:.0} up to {:.0} are ranked.",
                table.floor(),
                table.ceiling()
            );
        }

        Commands::Resolve { rating } => {
            let table = TierSet::new(settings.tiers.clone())
                .map_err(|e| anyhow::anyhow!("invalid tier table: {}", e))?;

            let resolved = summary::resolve(rating, &table);
            println!("Rating {:.0} -> {}", rating, resolved.name);
            match resolved.next_tier {
                Some(next) => println!(
                    "Next tier: {} ({:.0} points needed)",
                    next.name, next.points_needed
                ),
                None => println!("No higher tier."),
            }
        }
    }

    Ok(())
}
