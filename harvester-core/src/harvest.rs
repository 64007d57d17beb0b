use crate::error::Result;
use crate::model::ResourceRecord;
use crate::sources::{TopicSource, default_sources};
use harvester_scanner::{PageScraper, ScrapedResource, ScraperConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Pause after every fetched page so the source server is not hammered
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Options for configuring a harvest run
pub struct HarvestOptions {
    pub sources: Vec<TopicSource>,
    pub scraper: ScraperConfig,
    pub delay: Duration,
    pub show_progress_bars: bool,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            scraper: ScraperConfig::default(),
            delay: DEFAULT_DELAY,
            show_progress_bars: false,
        }
    }
}

/// Callback for reporting harvest progress
pub type HarvestProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicStatus {
    /// The source page was fetched; holds the number of resources it gave
    Scraped(usize),
    /// The source page had already been fetched for an earlier topic
    Skipped,
}

#[derive(Debug, Clone)]
pub struct TopicSummary {
    pub topic: String,
    pub source_url: String,
    pub status: TopicStatus,
}

#[derive(Debug, Clone)]
pub struct HarvestOutcome {
    pub resources: Vec<ResourceRecord>,
    /// Epoch milliseconds shared by every id of this run
    pub run_timestamp: i64,
    pub topics: Vec<TopicSummary>,
}

impl HarvestOutcome {
    pub fn pages_scraped(&self) -> usize {
        self.topics
            .iter()
            .filter(|t| matches!(t.status, TopicStatus::Scraped(_)))
            .count()
    }

    pub fn topics_skipped(&self) -> usize {
        self.topics
            .iter()
            .filter(|t| t.status == TopicStatus::Skipped)
            .count()
    }
}

/// Execute a harvest with the given options.
///
/// Topics are visited in order, one request at a time. A source URL is only
/// fetched for the first topic that names it. Fetch failures count as empty
/// pages; only an unusable scraper configuration is an error.
pub async fn execute_harvest(
    options: HarvestOptions,
    progress_callback: Option<HarvestProgressCallback>,
) -> Result<HarvestOutcome> {
    let HarvestOptions {
        sources,
        scraper,
        delay,
        show_progress_bars,
    } = options;

    let scraper = PageScraper::with_config(scraper)?;

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Starting harvest...");
        Some(pb)
    } else {
        None
    };

    let report = |msg: String| {
        if let Some(ref callback) = progress_callback {
            match progress_bar {
                Some(ref pb) => pb.suspend(|| callback(msg)),
                None => callback(msg),
            }
        }
    };

    info!("Starting harvest of {} topics", sources.len());

    let mut processed_urls: HashSet<String> = HashSet::new();
    let mut scraped: Vec<ScrapedResource> = Vec::new();
    let mut topics = Vec::with_capacity(sources.len());

    for (idx, TopicSource { topic, url }) in sources.into_iter().enumerate() {
        if processed_urls.contains(&url) {
            debug!("{} shares {} with an earlier topic", topic, url);
            report(format!("Skipping {} - URL already processed", topic));
            topics.push(TopicSummary {
                topic,
                source_url: url,
                status: TopicStatus::Skipped,
            });
            continue;
        }

        if let Some(ref pb) = progress_bar {
            pb.set_message(format!("[{}] Scraping {}...", idx + 1, topic));
        }
        report(format!("Scraping {} from {}", topic, url));

        let resources = scraper.scrape(&topic, &url).await;
        report(format!("  Found {} resources", resources.len()));

        topics.push(TopicSummary {
            topic,
            source_url: url.clone(),
            status: TopicStatus::Scraped(resources.len()),
        });
        scraped.extend(resources);
        processed_urls.insert(url);

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    let run_timestamp = chrono::Utc::now().timestamp_millis();
    let resources = assign_ids(scraped, run_timestamp);

    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }
    info!(
        "Harvest complete. {} resources from {} pages",
        resources.len(),
        processed_urls.len()
    );

    Ok(HarvestOutcome {
        resources,
        run_timestamp,
        topics,
    })
}

/// Give every resource its run-wide id.
///
/// The index runs over the whole list, not per topic, so ids stay unique even
/// when two topics found the same URL.
pub fn assign_ids(resources: Vec<ScrapedResource>, run_timestamp: i64) -> Vec<ResourceRecord> {
    resources
        .into_iter()
        .enumerate()
        .map(|(index, resource)| ResourceRecord::from_scraped(resource, run_timestamp, index))
        .collect()
}

/// Generate a plain-text summary of a harvest
pub fn generate_harvest_report(outcome: &HarvestOutcome) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!(
        "  Total resources found: {}\n",
        outcome.resources.len()
    ));
    report.push_str(&format!("  Pages scraped: {}\n", outcome.pages_scraped()));
    report.push_str(&format!(
        "  Topics skipped (shared page): {}\n",
        outcome.topics_skipped()
    ));

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    report.push_str("## By topic\n");
    for summary in &outcome.topics {
        let line = match summary.status {
            TopicStatus::Scraped(count) => format!("  {:<12} {}\n", summary.topic, count),
            TopicStatus::Skipped => format!("  {:<12} skipped\n", summary.topic),
        };
        report.push_str(&line);
    }

    let mut by_platform: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
    for resource in &outcome.resources {
        *by_platform.entry(resource.platform.as_str()).or_default() += 1;
        *by_type.entry(resource.resource_type.as_str()).or_default() += 1;
    }

    report.push_str("\n## By platform\n");
    for (platform, count) in &by_platform {
        report.push_str(&format!("  {:<12} {}\n", platform, count));
    }

    report.push_str("\n## By type\n");
    for (resource_type, count) in &by_type {
        report.push_str(&format!("  {:<12} {}\n", resource_type, count));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvester_scanner::ResourceType;

    fn scraped(topic: &str, url: &str) -> ScrapedResource {
        ScrapedResource::new(
            topic.to_string(),
            "Some useful title".to_string(),
            url.to_string(),
            "GitHub".to_string(),
            ResourceType::Docs,
        )
    }

    #[test]
    fn test_assign_ids_index_spans_topics() {
        let records = assign_ids(
            vec![
                scraped("html", "https://github.com/a"),
                scraped("html", "https://github.com/b"),
                scraped("react", "https://github.com/a"),
            ],
            1700000000000,
        );

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "html-scraped-1700000000000-0",
                "html-scraped-1700000000000-1",
                "react-scraped-1700000000000-2",
            ]
        );
    }

    #[test]
    fn test_outcome_counters() {
        let outcome = HarvestOutcome {
            resources: Vec::new(),
            run_timestamp: 0,
            topics: vec![
                TopicSummary {
                    topic: "html".into(),
                    source_url: "https://roadmap.sh/frontend".into(),
                    status: TopicStatus::Scraped(0),
                },
                TopicSummary {
                    topic: "css".into(),
                    source_url: "https://roadmap.sh/frontend".into(),
                    status: TopicStatus::Skipped,
                },
            ],
        };

        assert_eq!(outcome.pages_scraped(), 1);
        assert_eq!(outcome.topics_skipped(), 1);
    }
}
