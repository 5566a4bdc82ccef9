use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use prd_gate::{
    CliConfig, FileReportWriter, HardGate, ProjectValidationData, ReportWriter, ValidationResult,
    validate_project,
};

/// PRD-Gate CLI: hard-gate compliance validation for project snapshots
#[derive(Parser, Debug)]
#[command(name = "prd-gate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a project snapshot and write a report
    #[command(name = "validate")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },

    /// List the hard gates and their requirements
    #[command(name = "gates")]
    Gates,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Path to the project snapshot JSON file
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Output directory for report files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Validate { args }) => handle_validate_command(args).await,
        Some(Command::Gates) => {
            print_gates();
            Ok(())
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            eprintln!("Example: prd-gate validate --snapshot project.json");
            std::process::exit(1);
        }
    }
}

fn print_gates() {
    println!("Hard gates ({} total):", HardGate::ALL.len());
    for gate in HardGate::ALL {
        let kind = if gate.is_advisory() { "advisory" } else { "blocking" };
        println!("  {:<30} [{}] {}", gate.display_name(), kind, gate.requirement());
    }
}

async fn handle_validate_command(args: ValidateArgs) -> Result<()> {
    // Set up logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    info!("PRD-Gate validation starting");

    let mut config = CliConfig::load_or_default(args.config.as_ref())?;
    if let Some(output) = args.output {
        config.report.output_dir = output;
    }

    let data = ProjectValidationData::from_json_file(&args.snapshot)
        .context(format!("Failed to load snapshot from {:?}", args.snapshot))?;
    info!("Validating project {}", data.id);

    let result = validate_project(&data);

    let writer = FileReportWriter::new(config.report.clone());
    writer.write_report(&result).await?;
    writer.write_summary(&result).await?;

    print_result(&result)
}

fn print_result(result: &ValidationResult) -> Result<()> {
    println!("\n========================================");
    println!("PRD Validation Complete!");
    println!("========================================");
    println!("Project: {}", result.project_id);
    println!("Score: {}/100", result.overall_score);
    println!("Status: {}", if result.passed { "PASSED" } else { "FAILED" });
    println!("Checks: {}/{} passed", result.passed_checks, result.total_checks);

    println!("\nHard gates:");
    for gate in &result.hard_gates {
        println!("  [{}] {}", if gate.passed { "x" } else { " " }, gate.gate.display_name());
    }

    if !result.errors.is_empty() {
        println!("\nErrors:");
        for error in &result.errors {
            println!("  - {}", error);
        }
    }
    if !result.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &result.warnings {
            println!("  - {}", warning);
        }
    }

    if !result.passed {
        println!(
            "\n⚠️  Project did not reach the {:.0}% compliance threshold",
            result.threshold * 100.0
        );
        println!("Review the report files for details on remaining issues.");
        std::process::exit(1);
    }

    Ok(())
}
