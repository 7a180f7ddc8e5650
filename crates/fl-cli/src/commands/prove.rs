//! Proof generation command.

use anyhow::{Context, Result};
use colored::Colorize;
use fl_proof::{generate_proof_with_key, SignerKey, Timestamp};
use std::fs;
use std::path::PathBuf;

/// Environment variable holding base64 signing-key material.
pub const SIGNING_KEY_ENV: &str = "FL_SIGNING_KEY";

/// Handle the `fl-cli prove` command.
pub fn cmd_prove(
    cid: &str,
    timestamp: Option<&str>,
    key: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let material = key.filter(|value| !value.is_empty()).or_else(|| {
        std::env::var(SIGNING_KEY_ENV)
            .ok()
            .filter(|value| !value.is_empty())
    });

    let signer = SignerKey::resolve(material.as_deref())?;
    if signer.is_ephemeral() {
        eprintln!(
            "{} no signing key configured; this proof cannot be re-verified against a known key",
            "warning:".yellow().bold()
        );
    }

    let timestamp = match timestamp {
        Some(raw) => Timestamp::parse(raw).context("invalid --timestamp value")?,
        None => Timestamp::now(),
    };

    let proof = generate_proof_with_key(cid, timestamp.as_str(), &signer)?;
    let json = serde_json::to_string_pretty(&proof)?;
    let gateway_url = proof.payload.cid.gateway_url();

    if let Some(path) = output {
        fs::write(&path, json)
            .with_context(|| format!("failed to write proof to {}", path.display()))?;
        println!("{} Proof written to {}", "✓".green(), path.display());
        println!("{}: {}", "Gateway URL".bold(), gateway_url);
    } else {
        // Keep stdout pure JSON so the proof can be piped.
        println!("{json}");
        eprintln!("{}: {}", "Gateway URL".bold(), gateway_url);
    }

    Ok(())
}
