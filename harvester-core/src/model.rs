// Records written to and read from the resource JSON files

use harvester_scanner::{ResourceType, ScrapedResource};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A scraped resource with its run-wide identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    pub id: String,
    pub skill_id: String,
    pub title: String,
    pub url: String,
    pub platform: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

impl ResourceRecord {
    /// Identifier shape is `{topic}-scraped-{run_timestamp}-{index}`
    pub fn from_scraped(resource: ScrapedResource, run_timestamp: i64, index: usize) -> Self {
        let ScrapedResource {
            skill_id,
            title,
            url,
            platform,
            resource_type,
        } = resource;

        Self {
            id: format!("{}-scraped-{}-{}", skill_id, run_timestamp, index),
            skill_id,
            title,
            url,
            platform,
            resource_type,
        }
    }
}

/// Entry of the curated resource catalog.
///
/// Catalog entries may carry fields this tool does not know about; they are
/// kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub skill_id: String,
    pub title: String,
    pub url: String,
    pub platform: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<ResourceRecord> for CatalogEntry {
    fn from(record: ResourceRecord) -> Self {
        Self {
            id: record.id,
            skill_id: record.skill_id,
            title: record.title,
            url: record.url,
            platform: record.platform,
            resource_type: record.resource_type,
            extra: Map::new(),
        }
    }
}
