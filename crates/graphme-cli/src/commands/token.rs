use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use graphme_core::AccessToken;

use super::Locations;

#[derive(Args)]
pub struct TokenArgs {
    /// Show raw JSON output
    #[arg(long)]
    json: bool,
}

/// What we are willing to say about a token on a terminal
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenReport {
    pub path: PathBuf,
    /// Length in characters
    pub length: usize,
    pub preview: String,
    pub trailing_newline: bool,
}

impl TokenReport {
    pub fn new(path: PathBuf, token: &AccessToken) -> Self {
        Self {
            path,
            length: token.char_count(),
            preview: token.masked(),
            trailing_newline: token.has_trailing_newline(),
        }
    }
}

pub fn execute(args: TokenArgs, locations: &Locations<'_>) -> anyhow::Result<()> {
    let (path, token) = super::load_token(locations)?;
    let report = TokenReport::new(path, &token);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Access Token".cyan().bold());
    println!();
    println!("  {} {}", "Source:".bold(), report.path.display().to_string().dimmed());
    println!("  {} {} chars", "Length:".bold(), report.length);
    println!("  {} {}", "Preview:".bold(), report.preview);

    if report.trailing_newline {
        println!(
            "  {} {}",
            "Note:".bold(),
            "token ends with a newline (kept as-is)".yellow()
        );
    }

    Ok(())
}
