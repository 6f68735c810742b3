use bmi_core::*;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bmiscan")]
#[command(about = "BMI screening and batch classification system", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override input data file
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify all records in the data file (default)
    Run {
        /// Also export per-record results to a CSV file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Generate synthetic records into the data file
    Generate {
        /// Number of records to generate
        #[arg(long)]
        count: Option<usize>,
    },

    /// Classify a single ad-hoc height/weight pair
    Check {
        /// Gender (male or female, any casing)
        #[arg(long)]
        gender: String,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight_kg: f64,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    bmi_core::logging::init();

    let cli = Cli::parse();

    // Determine data file location
    let config = Config::load()?;
    let data_file = cli
        .data_file
        .unwrap_or_else(|| config.data.data_file.clone());
    tracing::debug!("Using data file {:?}", data_file);

    match cli.command {
        Some(Commands::Run { report }) => cmd_run(data_file, report),
        Some(Commands::Generate { count }) => {
            cmd_generate(data_file, count.unwrap_or(config.generator.count))
        }
        Some(Commands::Check {
            gender,
            height_cm,
            weight_kg,
        }) => cmd_check(gender, height_cm, weight_kg),
        None => {
            // Default to "run" command
            cmd_run(data_file, None)
        }
    }
}

fn cmd_run(data_file: PathBuf, report_path: Option<PathBuf>) -> Result<()> {
    let records = load_records(&data_file)?;

    let outcome = run_batch(&records);
    display_summary(&outcome.summary);

    if let Some(path) = report_path {
        let rows = write_csv_report(&path, &outcome.reports)?;
        println!("✓ Exported {} report rows", rows);
        println!("  CSV: {}", path.display());
    }

    Ok(())
}

fn cmd_generate(data_file: PathBuf, count: usize) -> Result<()> {
    let records = generate_records(count);
    write_records(&data_file, &records)?;

    println!("✓ Wrote {} synthetic records", records.len());
    println!("  Data file: {}", data_file.display());

    Ok(())
}

fn cmd_check(gender: String, height_cm: f64, weight_kg: f64) -> Result<()> {
    let record = Record {
        gender: json!(gender),
        height_cm: json!(height_cm),
        weight_kg: json!(weight_kg),
    };

    let report = BmiReport::from_record(&record)?;

    println!();
    println!("  BMI:      {}", report.bmi_value);
    println!("  Category: {}", report.category);
    println!("  Risk:     {}", report.health_risk);
    println!();

    Ok(())
}

fn display_summary(summary: &BatchSummary) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  BMI SCREENING SUMMARY");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Records:    {}", summary.total_records);
    println!("  Classified: {}", summary.classified);
    println!("  Skipped:    {}", summary.skipped);
    println!();
    println!("  Overweight records: {}", summary.overweight_count);
    println!();
}
