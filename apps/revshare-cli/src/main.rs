use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "revshare")]
#[command(about = "Revshare CLI - Merkle-committed revenue distribution tooling")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an allocations CSV into its commitment root
    CompileRoot {
        /// Allocations CSV file
        #[arg(short, long)]
        allocations: PathBuf,
    },

    /// Generate an inclusion proof bundle for one beneficiary
    GenerateProof {
        /// Allocations CSV file
        #[arg(short, long)]
        allocations: PathBuf,

        /// Beneficiary account id (hex)
        #[arg(long)]
        account: String,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify a proof bundle against a persisted root
    VerifyProof {
        /// Proof bundle JSON file produced by generate-proof
        #[arg(short, long)]
        proof: PathBuf,

        /// Commitment root to verify against (hex)
        #[arg(short, long)]
        root: String,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::CompileRoot { allocations } => commands::compile_root::execute(allocations),
        Commands::GenerateProof {
            allocations,
            account,
            output,
        } => commands::generate_proof::execute(allocations, account, output),
        Commands::VerifyProof { proof, root } => commands::verify_proof::execute(proof, root),
    }
}
