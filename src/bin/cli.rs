//! Sailrace CLI - Command-line interface for handicap race-time offsets

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing_subscriber::EnvFilter;

use sailrace::core::offsets::compute_offsets_report;
use sailrace::core::timefmt::format_time_difference;
use sailrace::data::RatingTable;
use sailrace::error::parse_distance;
use sailrace::models::WindStrength;

#[derive(Parser)]
#[command(name = "sailrace")]
#[command(author, version, about = "Sailboat handicap race calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute time offsets against a reference boat
    Offsets {
        /// Reference boat name
        #[arg(short, long)]
        boat: String,

        /// Wind strength: light, medium, or strong
        #[arg(short, long, default_value = "light")]
        wind: WindStrength,

        /// Race length in nautical miles
        #[arg(short, long)]
        distance: f64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the fleet with its ratings
    Fleet {
        /// Show a single wind band only
        #[arg(short, long)]
        wind: Option<WindStrength>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    println!("{}", "Sailrace CLI v0.2.0".cyan().bold());
    println!();

    let table = RatingTable::dh_dm_2024();

    if cli.interactive {
        run_interactive(&table)?;
    } else if let Some(command) = cli.command {
        match command {
            Commands::Offsets {
                boat,
                wind,
                distance,
                json,
            } => {
                print_offsets(&table, wind, &boat, distance, json)?;
            }
            Commands::Fleet { wind } => {
                print_fleet(&table, wind);
            }
        }
    } else {
        println!("Use --help for usage information or --interactive for interactive mode.");
    }

    Ok(())
}

fn print_offsets(
    table: &RatingTable,
    wind: WindStrength,
    boat: &str,
    distance_nm: f64,
    json: bool,
) -> Result<()> {
    let report = compute_offsets_report(table, wind, boat, distance_nm)
        .with_context(|| format!("Failed to compute offsets for '{}'", boat))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{}: {} / {} wind / {} NM",
        "Reference".green(),
        report.reference_boat,
        report.wind,
        report.distance_nm
    );
    println!();

    println!("{:<16} {:>8}", "Boat", "Offset");
    println!("{}", "-".repeat(25));

    for result in &report.offsets {
        let formatted = format_time_difference(result.offset_seconds);
        let offset = if result.offset_seconds < 0.0 {
            formatted.red()
        } else {
            formatted.green()
        };
        println!("{:<16} {:>8}", result.boat, offset);
    }

    println!();
    println!(
        "{}",
        "Negative times indicate boats faster than yours, positive times are slower.".dimmed()
    );

    Ok(())
}

fn print_fleet(table: &RatingTable, wind: Option<WindStrength>) {
    let bands: Vec<WindStrength> = match wind {
        Some(w) => vec![w],
        None => WindStrength::ALL.to_vec(),
    };

    println!(
        "{}",
        "Fleet ratings (seconds per nautical mile):".yellow().bold()
    );

    print!("{:<16}", "Boat");
    for band in &bands {
        print!(" {:>8}", band.to_string());
    }
    println!();
    println!("{}", "-".repeat(16 + 9 * bands.len()));

    for boat in table.fleet() {
        print!("{:<16}", boat);
        for band in &bands {
            let rating = table
                .rating_of(*band, boat)
                .map(|r| format!("{:.1}", r))
                .unwrap_or_else(|_| "-".to_string());
            print!(" {:>8}", rating);
        }
        println!();
    }
}

fn run_interactive(table: &RatingTable) -> Result<()> {
    println!("{}", "Interactive mode".green().bold());
    println!();

    let theme = ColorfulTheme::default();

    loop {
        let options = vec!["Compute offsets", "Show fleet", "Quit"];

        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let boats = table.fleet();
                let boat_idx = Select::with_theme(&theme)
                    .with_prompt("Your boat")
                    .items(boats)
                    .default(0)
                    .interact()?;

                let wind_labels = vec!["Light wind", "Medium wind", "Strong wind"];
                let wind_idx = Select::with_theme(&theme)
                    .with_prompt("Wind strength")
                    .items(&wind_labels)
                    .default(0)
                    .interact()?;

                // Re-prompt until the race length parses
                let distance_nm = loop {
                    let text: String = Input::with_theme(&theme)
                        .with_prompt("Race length (nautical miles)")
                        .interact_text()?;

                    match parse_distance(&text) {
                        Ok(d) => break d,
                        Err(e) => println!("{}", e.to_string().red()),
                    }
                };

                println!();
                print_offsets(
                    table,
                    WindStrength::ALL[wind_idx],
                    &boats[boat_idx],
                    distance_nm,
                    false,
                )?;
                println!();
            }
            1 => {
                println!();
                print_fleet(table, None);
                println!();
            }
            2 => {
                println!("Goodbye!");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}
