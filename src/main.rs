//! Resolve YouTube URLs into player sources
//!
//! Prints one JSON object per URL to stdout.
//!
//! # Usage
//!
//! ```bash
//! yt-source "https://youtu.be/dQw4w9WgXcQ?t=42" "https://www.youtube.com/channel/UC123"
//! ```
//!
//! # Output
//!
//! ```json
//! {"url":"https://youtu.be/dQw4w9WgXcQ?t=42","source":{"type":"video","id":"dQw4w9WgXcQ","startTime":42}}
//! {"url":"https://www.youtube.com/channel/UC123","source":{"type":"channel","id":"UC123"}}
//! ```
//!
//! Exits with status 1 when at least one URL is not recognized.

use clap::Parser;
use std::path::PathBuf;
use yt_player_bridge::{
    cli::{ResolveArgs, run_resolve_mode},
    utils::VERSION,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "yt-source")]
#[command(disable_version_flag = true)]
struct Cli {
    /// URLs to resolve (read from stdin when omitted)
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Show version information
    #[arg(long)]
    version: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", VERSION);
        return Ok(());
    }

    let all_resolved = run_resolve_mode(ResolveArgs {
        urls: cli.urls,
        config: cli.config,
        pretty: cli.pretty,
        verbose: cli.verbose,
    })?;

    if !all_resolved {
        std::process::exit(1);
    }

    Ok(())
}
