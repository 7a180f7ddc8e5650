//! Proof verification command.

use anyhow::{Context, Result};
use colored::Colorize;
use fl_proof::{verify_proof, Proof};
use std::fs;
use std::path::PathBuf;

/// Handle the `fl-cli verify` command.
pub fn cmd_verify(file: PathBuf, signer: Option<&str>) -> Result<()> {
    let json = fs::read_to_string(&file)
        .with_context(|| format!("failed to read proof from {}", file.display()))?;
    let proof: Proof = serde_json::from_str(&json).context("failed to parse proof JSON")?;

    verify_proof(&proof, signer).context("proof verification failed")?;

    println!("{} signature valid", "✓".green().bold());
    if signer.is_some() {
        println!("{} signer matches pinned key", "✓".green().bold());
    }

    println!();
    println!("{}", "Summary:".bold().underline());
    println!("  {}: {}", "CID".bold(), proof.payload.cid);
    println!("  {}: {}", "Timestamp".bold(), proof.payload.timestamp);
    println!("  {}: {}", "Signer".bold(), proof.signer_public_key);
    println!("  {}: {}", "Status".bold(), "VALID".green().bold());

    Ok(())
}
