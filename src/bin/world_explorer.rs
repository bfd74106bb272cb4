use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use num_format::{Locale, ToFormattedString};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use world_explorer::query::{self, SearchMode, SearchResults};
use world_explorer::{Client, export};

#[derive(Parser, Debug)]
#[command(
    name = "world-explorer",
    version,
    about = "Browse, export & summarize REST Countries data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export the full country collection to CSV/JSON plus summary statistics.
    Export(ExportArgs),
    /// Query countries (or capital-proxy cities) and print matches.
    Search(SearchArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Directory the export files are written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Pause between regional fallback fetches, in milliseconds.
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Search term.
    query: String,
    /// Search mode.
    #[arg(short, long, value_enum, default_value_t = SearchMode::Name)]
    mode: SearchMode,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Search(args) => cmd_search(args),
    }
}

fn fmt_u64(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let client = Client::default();
    let opts = export::ExportOptions {
        out_dir: args.out_dir,
        region_delay: Duration::from_millis(args.delay_ms),
    };

    println!("Fetching data from REST Countries API...");
    let report = export::run_export(&client, &opts)?;

    println!(
        "Exported {} countries ({} fetched, {} skipped)",
        report.exported, report.fetched, report.skipped
    );
    println!();
    println!("Files created:");
    println!("  {}", report.csv_path.display());
    println!("  {}", report.json_path.display());
    println!("  {}", report.raw_path.display());
    println!("  {}", report.summary_path.display());

    let s = &report.summary;
    println!();
    println!("--- Summary Statistics ---");
    println!("Total countries: {}", s.total_countries);
    println!("Total population: {}", fmt_u64(s.total_population));
    println!(
        "Total area: {} km²",
        fmt_u64(s.total_area_km2.round() as u64)
    );
    println!();
    println!("Countries by region:");
    let mut regions: Vec<_> = s.regions.iter().collect();
    regions.sort_by(|a, b| b.1.population.cmp(&a.1.population));
    for (region, rs) in regions {
        println!(
            "  {}: {} countries, {} population",
            region,
            rs.count,
            fmt_u64(rs.population)
        );
    }
    println!();
    println!("Top 5 by population:");
    for (i, top) in s.top_10_by_population.iter().take(5).enumerate() {
        println!("  {}. {}: {}", i + 1, top.name, fmt_u64(top.population));
    }

    Ok(())
}

fn cmd_search(args: SearchArgs) -> Result<()> {
    let client = Client::default();
    let outcome = query::search(&client, args.mode, &args.query);

    if let Some(msg) = &outcome.error {
        eprintln!("warning: {msg}");
    }

    match &outcome.results {
        SearchResults::Countries(list) => {
            if list.is_empty() {
                println!("No results.");
            }
            for v in list {
                let name = v
                    .pointer("/name/common")
                    .and_then(Value::as_str)
                    .unwrap_or("?");
                let code = v.pointer("/cca3").and_then(Value::as_str).unwrap_or("");
                let region = v.pointer("/region").and_then(Value::as_str).unwrap_or("");
                let population = v.pointer("/population").and_then(Value::as_u64).unwrap_or(0);
                println!("{name} [{code}]  {region}  pop {}", fmt_u64(population));
            }
        }
        SearchResults::Cities(hits) => {
            if hits.is_empty() {
                println!("No results.");
            }
            for hit in hits {
                println!(
                    "{}, {} [{}]  {}  pop {}",
                    hit.name,
                    hit.country,
                    hit.country_code,
                    hit.region,
                    fmt_u64(hit.population)
                );
            }
        }
    }

    Ok(())
}
