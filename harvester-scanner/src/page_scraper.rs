use crate::classify::{determine_platform, determine_resource_type, is_resource_url};
use crate::error::{Result, ScanError};
use crate::result::ScrapedResource;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

/// Origin that root-relative links on roadmap pages resolve against
pub const DEFAULT_BASE_URL: &str = "https://roadmap.sh";

/// Roadmap pages refuse obvious bots, so requests look like desktop Chrome
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Anchors with less visible text than this are navigation chrome
pub const MIN_TITLE_CHARS: usize = 5;
pub const MAX_TITLE_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ScraperConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Fetches one source page at a time and turns its anchors into resources
pub struct PageScraper {
    client: Client,
    base_url: Url,
}

impl PageScraper {
    pub fn new() -> Result<Self> {
        Self::with_config(ScraperConfig::default())
    }

    pub fn with_config(config: ScraperConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .connect_timeout(config.timeout / 2)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Scrape a source page, treating any failure as an empty page.
    ///
    /// Errors are logged with the source URL and swallowed so that one bad
    /// page never aborts a run. There is no retry.
    pub async fn scrape(&self, topic: &str, source_url: &str) -> Vec<ScrapedResource> {
        match self.try_scrape(topic, source_url).await {
            Ok(resources) => {
                info!("Found {} resources for {}", resources.len(), topic);
                resources
            }
            Err(e) => {
                warn!("Error scraping {}: {}", source_url, e);
                Vec::new()
            }
        }
    }

    /// Single GET of `source_url` followed by link extraction
    pub async fn try_scrape(&self, topic: &str, source_url: &str) -> Result<Vec<ScrapedResource>> {
        debug!("Fetching {}", source_url);

        let start = Instant::now();
        let response = self.client.get(source_url).send().await?.error_for_status()?;
        let body = response.text().await?;
        debug!(
            "Fetched {} ({} bytes) in {:?}",
            source_url,
            body.len(),
            start.elapsed()
        );

        extract_resources(&body, topic, &self.base_url)
    }
}

/// Pull classified resource links out of an HTML document.
///
/// Anchors keep document order. A URL seen earlier on the same page is
/// dropped even if its link text differs.
pub fn extract_resources(html: &str, topic: &str, base_url: &Url) -> Result<Vec<ScrapedResource>> {
    let document = Html::parse_document(html);
    let link_selector =
        Selector::parse("a[href]").map_err(|e| ScanError::ParseError(e.to_string()))?;

    let mut seen_urls = HashSet::new();
    let mut resources = Vec::new();

    for element in document.select(&link_selector) {
        let href = element.value().attr("href").unwrap_or_default().trim();
        let text = visible_text(&element);

        if href.is_empty() || text.chars().count() < MIN_TITLE_CHARS {
            continue;
        }

        let Some(absolute_url) = normalize_href(href, base_url) else {
            debug!("Skipping non-http link: {}", href);
            continue;
        };

        if !is_resource_url(&absolute_url) || seen_urls.contains(&absolute_url) {
            continue;
        }
        seen_urls.insert(absolute_url.clone());

        let platform = determine_platform(&absolute_url);
        let resource_type = determine_resource_type(&absolute_url, &platform);
        debug!("  -> {} [{} / {}]", absolute_url, platform, resource_type);

        resources.push(ScrapedResource::new(
            topic.to_string(),
            truncate_title(&text),
            absolute_url,
            platform,
            resource_type,
        ));
    }

    Ok(resources)
}

/// Resolve an href into an absolute URL string.
///
/// Root-relative hrefs are joined onto `base_url`, hrefs already starting with
/// `http` pass through untouched, everything else (`mailto:`, `javascript:`,
/// `#anchor`, `page.html`) is rejected.
pub fn normalize_href(href: &str, base_url: &Url) -> Option<String> {
    if href.starts_with('/') {
        base_url.join(href).ok().map(|url| url.to_string())
    } else if href.starts_with("http") {
        Some(href.to_string())
    } else {
        None
    }
}

/// Each text node is trimmed on its own and the pieces are concatenated.
/// Whitespace inside a node is kept as written.
fn visible_text(element: &ElementRef) -> String {
    element.text().map(str::trim).collect()
}

fn truncate_title(text: &str) -> String {
    text.chars().take(MAX_TITLE_CHARS).collect()
}
