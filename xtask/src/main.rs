use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use themedither::dithering::threshold::matrices::{BayerMatrix, bayer_ranks};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for themedither", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a Bayer matrix as ranks and normalized thresholds
    GenerateMatrices {
        /// matrix order, the side is 2^order
        #[arg(long, default_value_t = 3)]
        order: u32,
    },
    Ci,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenerateMatrices { order } => generate_matrices(order),
        Commands::Ci => ci(),
    }
}

fn generate_matrices(order: u32) -> Result<()> {
    if order == 0 || order > 8 {
        bail!("order should be within 1..=8, got {order}");
    }
    let matrix = BayerMatrix::with_order(order);
    let side = matrix.side();

    println!("// bayer {side}x{side} ranks");
    for row in bayer_ranks(order).chunks(side) {
        let row: Vec<String> = row.iter().map(|rank| format!("{rank:>5}")).collect();
        println!("[{}],", row.join(","));
    }

    println!("// bayer {side}x{side} thresholds");
    for row in matrix.thresholds().chunks(side) {
        let row: Vec<String> = row.iter().map(|t| format!("{t:>9.5}")).collect();
        println!("[{}],", row.join(","));
    }
    Ok(())
}

/// Formatting, lints, build and tests for the whole workspace
fn ci() -> Result<()> {
    run_command("cargo", &["fmt", "--all", "--check"])?;
    run_command(
        "cargo",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
            "-A",
            "clippy::needless_range_loop",
        ],
    )?;
    run_command("cargo", &["build", "--workspace"])?;
    run_command("cargo", &["test", "--workspace"])?;
    Ok(())
}

fn run_command(cmd: &str, args: &[&str]) -> Result<()> {
    use std::process::Command;
    let status = Command::new(cmd).args(args).status()?;
    if !status.success() {
        bail!("Command failed: {} {}", cmd, args.join(" "));
    }
    Ok(())
}
