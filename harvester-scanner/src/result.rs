use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of learning resource a link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Video,
    Interactive,
    Course,
    Article,
    Docs,
    /// Only found in hand-curated catalog entries, never produced by the classifier
    Other,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Video => "video",
            ResourceType::Interactive => "interactive",
            ResourceType::Course => "course",
            ResourceType::Article => "article",
            ResourceType::Docs => "docs",
            ResourceType::Other => "other",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified link found on a source page, before it gets a run id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedResource {
    pub skill_id: String,
    pub title: String,
    pub url: String,
    pub platform: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

impl ScrapedResource {
    pub fn new(
        skill_id: String,
        title: String,
        url: String,
        platform: String,
        resource_type: ResourceType,
    ) -> Self {
        Self {
            skill_id,
            title,
            url,
            platform,
            resource_type,
        }
    }
}
