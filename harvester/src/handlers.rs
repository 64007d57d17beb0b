use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use harvester_core::TopicSource;
use harvester_core::harvest::{
    HarvestOptions, HarvestProgressCallback, execute_harvest, generate_harvest_report,
};
use harvester_core::merge::merge_files;
use harvester_core::output::write_resources;
use harvester_core::sources::default_sources;
use harvester_scanner::ScraperConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

// Helper functions for harvest handler

/// Load topic sources from a file, or fall back to the built-in roadmap list
pub fn load_sources(sources_file: Option<&PathBuf>) -> Result<Vec<TopicSource>, String> {
    match sources_file {
        Some(path) => load_sources_from_file(path),
        None => Ok(default_sources()),
    }
}

/// Load and parse `<topic> <url>` pairs from a file
pub fn load_sources_from_file(path: &Path) -> Result<Vec<TopicSource>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read sources file {}: {}", path.display(), e))?;

    let sources: Vec<TopicSource> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_source_line)
        .collect();

    if sources.is_empty() {
        return Err(format!("No valid sources found in {}", path.display()));
    }

    Ok(sources)
}

/// Parse a single `<topic> <url>` line
pub fn parse_source_line(line: &str) -> Option<TopicSource> {
    let mut parts = line.split_whitespace();

    if let (Some(topic), Some(url), None) = (parts.next(), parts.next(), parts.next())
        && let Ok(parsed) = Url::parse(url)
        && matches!(parsed.scheme(), "http" | "https")
    {
        return Some(TopicSource::new(topic, url));
    }

    eprintln!("⚠️  Skipping invalid source line '{}'", line);
    None
}

/// Expand a leading `~` in a path argument
pub fn resolve_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

pub async fn handle_harvest(sub_matches: &ArgMatches, quiet: bool) -> Result<()> {
    init_logging(sub_matches.get_flag("verbose"));

    let output = sub_matches
        .get_one::<String>("output")
        .map(|raw| resolve_path(raw))
        .context("missing output path")?;
    let sources_file = sub_matches
        .get_one::<String>("sources")
        .map(|raw| resolve_path(raw));
    let base_url = sub_matches
        .get_one::<Url>("base-url")
        .context("missing base URL")?;
    let delay_ms = sub_matches.get_one::<u64>("delay-ms").copied().unwrap_or(2000);
    let timeout = sub_matches.get_one::<u64>("timeout").copied().unwrap_or(30);

    let sources = load_sources(sources_file.as_ref()).map_err(anyhow::Error::msg)?;

    if !quiet {
        println!("{}", "Starting roadmap.sh resource scraping...".bright_white().bold());
        println!("This may take a few minutes...\n");
    }

    let options = HarvestOptions {
        sources,
        scraper: ScraperConfig::default()
            .with_base_url(base_url.as_str())
            .with_timeout(Duration::from_secs(timeout)),
        delay: Duration::from_millis(delay_ms),
        show_progress_bars: !quiet,
    };

    let progress_callback: Option<HarvestProgressCallback> = if quiet {
        None
    } else {
        let callback: HarvestProgressCallback = Arc::new(|msg: String| {
            println!("{}", msg);
        });
        Some(callback)
    };

    let outcome = execute_harvest(options, progress_callback)
        .await
        .context("harvest could not start")?;

    write_resources(&output, &outcome.resources)
        .with_context(|| format!("failed to save resources to {}", output.display()))?;

    if quiet {
        println!("{}", output.display());
        return Ok(());
    }

    println!();
    print_divider();
    println!("{}", "  SCRAPING COMPLETE".green().bold());
    print_divider();
    print!("{}", generate_harvest_report(&outcome));
    println!();
    println!(
        "{} Total resources found: {}",
        "✓".green().bold(),
        outcome.resources.len().to_string().cyan()
    );
    println!(
        "{} Saved to: {}",
        "✓".green().bold(),
        output.display().to_string().bright_white()
    );
    println!();
    println!(
        "{} If roadmap.sh renders its pages with JavaScript, a headless browser is needed to see the links.",
        "ℹ".blue()
    );
    println!(
        "{} Next: run 'harvester merge' to merge into the resource catalog",
        "→".blue()
    );

    Ok(())
}

pub fn handle_merge(sub_matches: &ArgMatches, quiet: bool) -> Result<()> {
    init_logging(false);

    let catalog = sub_matches
        .get_one::<String>("catalog")
        .map(|raw| resolve_path(raw))
        .context("missing catalog path")?;
    let scraped = sub_matches
        .get_one::<String>("scraped")
        .map(|raw| resolve_path(raw))
        .context("missing scraped path")?;

    if !scraped.exists() {
        anyhow::bail!(
            "{} not found. Run 'harvester harvest' first.",
            scraped.display()
        );
    }

    let outcome = merge_files(&catalog, &scraped)?;

    if quiet {
        println!("{}", outcome.added.len());
        return Ok(());
    }

    print_divider();
    println!("{}", "  MERGE COMPLETE".green().bold());
    print_divider();
    println!(
        "{} Total resources: {}",
        "✓".green().bold(),
        outcome.merged.len().to_string().cyan()
    );
    println!(
        "{} Added {} new resources",
        "✓".green().bold(),
        outcome.added.len().to_string().cyan()
    );
    println!(
        "{} Updated: {}",
        "✓".green().bold(),
        catalog.display().to_string().bright_white()
    );

    let by_skill = outcome.added_by_skill();
    if !by_skill.is_empty() {
        println!();
        println!("{}", "New resources by skill:".bright_blue().bold());
        for (skill, count) in by_skill {
            println!("  {} {}: {} resources", "•".yellow(), skill, count);
        }
    }
    println!();

    Ok(())
}
