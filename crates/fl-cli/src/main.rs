use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fl_cli::commands;

/// FieldLedger proof tool: mint signing keys, produce proofs of
/// provenance for pinned content, and verify them.
#[derive(Parser, Debug)]
#[command(name = "fl-cli", author = "FieldLedger Contributors", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a new Ed25519 signing key
    Keygen {
        /// Optional output path for the key material (default: prints to stdout)
        output: Option<PathBuf>,
    },
    /// Produce a proof of provenance for a pinned content identifier
    Prove {
        /// Content identifier returned by the pinning gateway
        cid: String,
        /// RFC 3339 timestamp to embed (default: the current instant)
        #[arg(long)]
        timestamp: Option<String>,
        /// Base64 signing key material (default: the FL_SIGNING_KEY environment variable)
        #[arg(long)]
        key: Option<String>,
        /// Write the proof JSON to this path instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Verify a proof file
    Verify {
        /// Path to the proof JSON file
        file: PathBuf,
        /// Base64 public key the proof must be signed with
        #[arg(long)]
        signer: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Keygen { output } => commands::keygen::cmd_keygen(output),
        Commands::Prove {
            cid,
            timestamp,
            key,
            output,
        } => commands::prove::cmd_prove(&cid, timestamp.as_deref(), key, output),
        Commands::Verify { file, signer } => commands::verify::cmd_verify(file, signer.as_deref()),
    }
}
