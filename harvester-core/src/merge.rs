// Folding scraped resources into the curated catalog

use crate::error::Result;
use crate::model::CatalogEntry;
use crate::output::{read_resources, write_resources};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::info;

/// Platforms whose resources can be used without paying
pub const FREE_PLATFORMS: &[&str] = &[
    "YouTube",
    "freeCodeCamp",
    "MDN",
    "W3Schools",
    "GitHub",
    "Dev.to",
    "Medium",
    "Khan Academy",
    "Codecademy",
];

/// Platform label of hand-written roadmap entries, listed first per skill
pub const ROADMAP_PLATFORM: &str = "roadmap.sh";

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub merged: Vec<CatalogEntry>,
    pub added: Vec<CatalogEntry>,
}

impl MergeOutcome {
    /// Count of newly added entries per skill, sorted by skill
    pub fn added_by_skill(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.added {
            *counts.entry(entry.skill_id.as_str()).or_default() += 1;
        }
        counts
    }
}

/// A resource counts as free when its platform label names a free platform,
/// or its URL contains the platform name squashed to lowercase
/// (`Khan Academy` matches `khanacademy`).
pub fn is_free_resource(entry: &CatalogEntry) -> bool {
    FREE_PLATFORMS.iter().any(|platform| {
        entry.platform.contains(platform)
            || entry
                .url
                .contains(&platform.to_lowercase().replacen(' ', "", 1))
    })
}

/// Add free scraped resources whose URL the catalog does not have yet.
///
/// Only the existing catalog is checked for duplicates; two scraped entries
/// with the same URL are both added.
pub fn merge_resources(existing: Vec<CatalogEntry>, scraped: Vec<CatalogEntry>) -> MergeOutcome {
    let existing_urls: HashSet<&str> = existing.iter().map(|e| e.url.as_str()).collect();

    let added: Vec<CatalogEntry> = scraped
        .into_iter()
        .filter(|entry| !existing_urls.contains(entry.url.as_str()) && is_free_resource(entry))
        .collect();

    let mut merged = existing;
    merged.extend(added.iter().cloned());
    merged.sort_by(compare_entries);

    MergeOutcome { merged, added }
}

/// Catalog order: skill, then roadmap.sh entries, then title
pub fn compare_entries(a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    compare_text(&a.skill_id, &b.skill_id)
        .then_with(|| {
            let a_roadmap = a.platform == ROADMAP_PLATFORM;
            let b_roadmap = b.platform == ROADMAP_PLATFORM;
            b_roadmap.cmp(&a_roadmap)
        })
        .then_with(|| compare_text(&a.title, &b.title))
}

/// Case-insensitive order with the raw string as tiebreak
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Merge the scraped file at `scraped_path` into the catalog at `catalog_path`
/// and write the catalog back in place
pub fn merge_files(catalog_path: &Path, scraped_path: &Path) -> Result<MergeOutcome> {
    let existing: Vec<CatalogEntry> = read_resources(catalog_path)?;
    let scraped: Vec<CatalogEntry> = read_resources(scraped_path)?;

    info!(
        "Loaded {} existing and {} scraped resources",
        existing.len(),
        scraped.len()
    );

    let outcome = merge_resources(existing, scraped);
    write_resources(catalog_path, &outcome.merged)?;

    info!(
        "Merged {} new resources into {}",
        outcome.added.len(),
        catalog_path.display()
    );

    Ok(outcome)
}
