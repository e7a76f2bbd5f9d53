use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{AwardIndex, LoadReport, parse_awards_file};
use pipeline::{AwardsSummary, IntervalResult, ProducerGroups};
use server::{AwardsResultResponse, AwardsService, DatasetArgs, YearFormat};
use std::sync::Arc;
use std::time::Instant;

/// awards - Golden Raspberry producer intervals
#[derive(Parser)]
#[command(name = "awards")]
#[command(about = "Shortest and longest gaps between a producer's Golden Raspberry wins", long_about = None)]
struct Cli {
    #[command(flatten)]
    dataset: DatasetArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the min/max producer intervals
    Summary {
        /// Print the HTTP response body instead of tables
        #[arg(long)]
        json: bool,

        /// Year rendering used with --json
        #[arg(long, value_enum, default_value_t = YearFormat::Number)]
        year_format: YearFormat,
    },

    /// Show what the loader made of the dataset
    Inspect {
        /// Maximum number of repeat winners and skipped rows to list
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let delimiter = cli
        .dataset
        .delimiter_byte()
        .context("Invalid dataset delimiter")?;

    let start = Instant::now();
    let report = parse_awards_file(&cli.dataset.data_file, delimiter).with_context(|| {
        format!(
            "Failed to load awards dataset from {}",
            cli.dataset.data_file.display()
        )
    })?;
    tracing::info!("Parsed dataset in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Summary { json, year_format } => {
            handle_summary(report, json, year_format).await?
        }
        Commands::Inspect { limit } => handle_inspect(report, limit),
    }

    Ok(())
}

/// Handle the 'summary' command
async fn handle_summary(report: LoadReport, json: bool, year_format: YearFormat) -> Result<()> {
    if !report.is_clean() {
        eprintln!(
            "{} {} malformed rows skipped (see `awards inspect`)",
            "!".yellow(),
            report.skipped.len()
        );
    }

    // Same path as the HTTP handler: one store read, one aggregation
    let index = Arc::new(AwardIndex::from_report(report));
    let summary = AwardsService::new(index)
        .awards_summary()
        .await
        .context("Failed to compute awards summary")?;

    if json {
        let response = AwardsResultResponse::from_summary(&summary, year_format);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

/// Handle the 'inspect' command
fn handle_inspect(report: LoadReport, limit: usize) {
    let skipped = report.skipped.clone();
    let index = AwardIndex::from_report(report);
    let (records, winners, producers) = index.counts();

    println!("{}", "Dataset:".bold().blue());
    println!("{}Records: {}", "• ".green(), records);
    println!("{}Winners: {}", "• ".green(), winners);
    println!("{}Winning producers: {}", "• ".green(), producers);

    let repeat = repeat_winners(&index);
    println!("{}Producers with 2+ wins: {}", "• ".green(), repeat.len());
    for (producer, wins) in repeat.iter().take(limit) {
        println!("  - {} ({} wins)", producer.bold(), wins);
    }

    if skipped.is_empty() {
        println!("{}Skipped rows: 0", "• ".cyan());
        return;
    }

    println!("{}Skipped rows: {}", "• ".yellow(), skipped.len());
    for row in skipped.iter().take(limit) {
        println!("  - line {}: {}", row.line, row.reason);
    }
    if skipped.len() > limit {
        println!("  ... and {} more", skipped.len() - limit);
    }
}

/// Producers eligible for an interval, with their win counts, most wins first
fn repeat_winners(index: &AwardIndex) -> Vec<(String, usize)> {
    let winners = index.winning_records();
    let mut repeat: Vec<(String, usize)> = ProducerGroups::group_winners(&winners)
        .into_eligible()
        .iter()
        .map(|group| {
            (
                group.producer.to_string(),
                index.producer_win_count(group.producer),
            )
        })
        .collect();
    repeat.sort_by(|a, b| b.1.cmp(&a.1));
    repeat
}

/// Helper function to format and print the summary tables
fn print_summary(summary: &AwardsSummary) {
    if summary.is_empty() {
        println!("{}", "No producer has won more than once.".yellow());
        return;
    }

    println!("{}", "Shortest interval between wins:".bold().blue());
    print_intervals(&summary.min);
    println!();
    println!("{}", "Longest interval between wins:".bold().blue());
    print_intervals(&summary.max);
}

fn print_intervals(results: &[IntervalResult]) {
    for result in results {
        println!(
            "  {} {} {} ({} -> {})",
            "•".green(),
            result.producer.bold(),
            format!("{} years", result.interval).cyan(),
            result.previous_win,
            result.following_win
        );
    }
}
