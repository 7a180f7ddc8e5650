//! Signing-key generation command.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Handle the `fl-cli keygen` command.
pub fn cmd_keygen(output: Option<PathBuf>) -> Result<()> {
    let (seed, public_key) = fl_proof::keygen()?;

    let seed_b64 = BASE64.encode(seed);
    let public_b64 = BASE64.encode(public_key);

    if let Some(path) = output {
        let keypair = serde_json::json!({
            "signing_key": seed_b64,
            "public_key": public_b64,
        });
        let json = serde_json::to_string_pretty(&keypair)?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write key material to {}", path.display()))?;
        println!("{} Key material written to {}", "✓".green(), path.display());
    } else {
        println!("{}", "Generated Ed25519 Signing Key".bold().underline());
        println!("{}: {}", "Signing Key".bold().red(), seed_b64);
        println!("{}: {}", "Public Key".bold().green(), public_b64);
        println!();
        println!(
            "{}",
            "WARNING: Keep the signing key secret!".yellow().bold()
        );
    }

    Ok(())
}
