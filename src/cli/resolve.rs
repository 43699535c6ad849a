//! Resolve mode CLI logic
//!
//! Contains the core logic behind the `yt-source` binary.

use crate::{
    Source,
    config::{ConfigLoader, Settings, default_config_path},
    resolver,
};
use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Arguments for resolve mode
#[derive(Debug, Default)]
pub struct ResolveArgs {
    /// URLs to resolve; read from stdin, one per line, when empty
    pub urls: Vec<String>,
    /// Explicit configuration file
    pub config: Option<PathBuf>,
    /// Pretty-print the JSON output
    pub pretty: bool,
    /// Force debug logging
    pub verbose: bool,
}

/// One line of output
#[derive(Debug, Serialize)]
pub struct Resolution<'a> {
    pub url: &'a str,
    pub source: Option<Source>,
}

/// Run resolve mode, returning `true` when every URL resolved
pub fn run_resolve_mode(args: ResolveArgs) -> Result<bool> {
    let settings = load_settings(&args)?;
    init_logging(&settings);

    let urls = if args.urls.is_empty() {
        tracing::debug!("No URL arguments, reading from stdin");
        read_urls(std::io::stdin().lock())?
    } else {
        args.urls
    };

    let stdout = std::io::stdout();
    let unresolved = write_resolutions(&mut stdout.lock(), &urls, args.pretty)?;

    if unresolved > 0 {
        tracing::info!("{} of {} URLs did not resolve", unresolved, urls.len());
    }

    Ok(unresolved == 0)
}

/// Load settings from `--config`, or the default location when it exists
fn load_settings(args: &ResolveArgs) -> Result<Settings> {
    let loader = ConfigLoader::new();
    let config = args
        .config
        .clone()
        .or_else(|| default_config_path().filter(|path| path.exists()));

    let mut settings = loader.load(config.as_deref())?;
    if args.verbose {
        settings.logging.verbose = true;
    }
    Ok(settings)
}

fn init_logging(settings: &Settings) {
    // A subscriber installed by the embedding process wins
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.logging.effective_level().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}

/// Non-empty, trimmed lines
pub fn read_urls(reader: impl BufRead) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            urls.push(line.to_string());
        }
    }
    Ok(urls)
}

/// Write one JSON document per URL, returning how many did not resolve
pub fn write_resolutions(out: &mut impl Write, urls: &[String], pretty: bool) -> Result<usize> {
    let mut unresolved = 0;

    for url in urls {
        let resolution = Resolution {
            url,
            source: resolver::resolve(url),
        };
        if resolution.source.is_none() {
            unresolved += 1;
        }

        let output = if pretty {
            serde_json::to_string_pretty(&resolution)?
        } else {
            serde_json::to_string(&resolution)?
        };
        writeln!(out, "{}", output)?;
    }

    Ok(unresolved)
}
