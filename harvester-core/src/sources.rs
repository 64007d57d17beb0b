/// A topic identifier and the page its resources are scraped from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSource {
    pub topic: String,
    pub url: String,
}

impl TopicSource {
    pub fn new(topic: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            url: url.into(),
        }
    }
}

/// Built-in skill to roadmap mapping, in scrape order.
///
/// Several skills share a roadmap page; only the first of them gets the
/// page's resources.
pub const DEFAULT_SOURCES: &[(&str, &str)] = &[
    ("html", "https://roadmap.sh/frontend"),
    ("css", "https://roadmap.sh/frontend"),
    ("javascript", "https://roadmap.sh/frontend"),
    ("typescript", "https://roadmap.sh/frontend"),
    ("react", "https://roadmap.sh/react"),
    ("nodejs", "https://roadmap.sh/backend"),
    ("express", "https://roadmap.sh/backend"),
    ("python", "https://roadmap.sh/python"),
    ("django", "https://roadmap.sh/python"),
    ("flask", "https://roadmap.sh/python"),
    ("java", "https://roadmap.sh/java"),
    ("sql", "https://roadmap.sh/postgresql-dba"),
    ("mongodb", "https://roadmap.sh/mongodb"),
    ("postgresql", "https://roadmap.sh/postgresql-dba"),
    ("mysql", "https://roadmap.sh/postgresql-dba"),
    ("docker", "https://roadmap.sh/devops"),
    ("aws", "https://roadmap.sh/aws"),
    ("git", "https://roadmap.sh/frontend"),
    ("github", "https://roadmap.sh/frontend"),
    ("pandas", "https://roadmap.sh/data-analyst"),
    ("tableau", "https://roadmap.sh/data-analyst"),
    ("excel", "https://roadmap.sh/data-analyst"),
];

pub fn default_sources() -> Vec<TopicSource> {
    DEFAULT_SOURCES
        .iter()
        .map(|(topic, url)| TopicSource::new(*topic, *url))
        .collect()
}
