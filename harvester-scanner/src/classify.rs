// URL based platform and resource type classification
//
// Every rule is a case-insensitive substring check against the whole URL, so
// a path or query containing a platform domain also matches. Table order is
// the priority order.

use crate::result::ResourceType;
use url::Url;

/// Domains whose links are worth keeping at all
pub const RESOURCE_DOMAINS: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "freecodecamp.org",
    "codecademy.com",
    "coursera.org",
    "udemy.com",
    "edx.org",
    "mdn.io",
    "mozilla.org",
    "w3schools.com",
    "medium.com",
    "dev.to",
    "github.com",
    "khanacademy.org",
];

const PLATFORM_RULES: &[(&[&str], &str)] = &[
    (&["youtube.com", "youtu.be"], "YouTube"),
    (&["freecodecamp.org"], "freeCodeCamp"),
    (&["codecademy.com"], "Codecademy"),
    (&["coursera.org"], "Coursera"),
    (&["udemy.com"], "Udemy"),
    (&["edx.org"], "edX"),
    (&["mdn.io", "mozilla.org"], "MDN"),
    (&["w3schools.com"], "W3Schools"),
    (&["medium.com"], "Medium"),
    (&["dev.to"], "Dev.to"),
    (&["github.com"], "GitHub"),
    (&["khanacademy.org"], "Khan Academy"),
];

const TYPE_RULES: &[(&[&str], ResourceType)] = &[
    (&["youtube.com", "youtu.be"], ResourceType::Video),
    (&["freecodecamp.org", "codecademy.com"], ResourceType::Interactive),
    (&["coursera.org", "udemy.com", "edx.org"], ResourceType::Course),
    (&["medium.com", "dev.to"], ResourceType::Article),
];

const UNKNOWN_PLATFORM: &str = "Unknown";

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// True when the URL points at one of the known learning platforms
pub fn is_resource_url(url: &str) -> bool {
    contains_any(&url.to_lowercase(), RESOURCE_DOMAINS)
}

/// Name the platform hosting `url`.
///
/// Falls back to the capitalized second-level label of the host
/// (`https://docs.python.org/3/` gives `Python`), or `Unknown` when the URL
/// has no dotted host.
pub fn determine_platform(url: &str) -> String {
    let url_lower = url.to_lowercase();

    for (needles, label) in PLATFORM_RULES {
        if contains_any(&url_lower, needles) {
            return label.to_string();
        }
    }

    fallback_platform(url)
}

fn fallback_platform(url: &str) -> String {
    let host = match Url::parse(url) {
        Ok(parsed) => parsed.host_str().unwrap_or_default().to_lowercase(),
        Err(_) => return UNKNOWN_PLATFORM.to_string(),
    };

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return UNKNOWN_PLATFORM.to_string();
    }

    capitalize(labels[labels.len() - 2])
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Decide what kind of resource `url` is.
///
/// The platform label is accepted for call-site symmetry with
/// [`determine_platform`] but does not influence the result.
pub fn determine_resource_type(url: &str, _platform: &str) -> ResourceType {
    let url_lower = url.to_lowercase();

    TYPE_RULES
        .iter()
        .find(|(needles, _)| contains_any(&url_lower, needles))
        .map(|(_, resource_type)| *resource_type)
        .unwrap_or(ResourceType::Docs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_wins_over_later_rules() {
        let url = "https://www.youtube.com/watch?v=abc&ref=github.com/medium.com";
        assert_eq!(determine_platform(url), "YouTube");
        assert_eq!(determine_resource_type(url, "YouTube"), ResourceType::Video);

        let short = "https://youtu.be/xyz?list=coursera.org";
        assert_eq!(determine_platform(short), "YouTube");
        assert_eq!(determine_resource_type(short, ""), ResourceType::Video);
    }

    #[test]
    fn test_platform_table() {
        let cases = [
            ("https://www.freecodecamp.org/learn", "freeCodeCamp"),
            ("https://www.codecademy.com/learn/react", "Codecademy"),
            ("https://www.coursera.org/learn/sql", "Coursera"),
            ("https://www.udemy.com/course/python", "Udemy"),
            ("https://www.edx.org/course/cs50", "edX"),
            ("https://mdn.io/fetch", "MDN"),
            ("https://developer.mozilla.org/en-US/docs/Web/HTML", "MDN"),
            ("https://www.w3schools.com/css/", "W3Schools"),
            ("https://medium.com/@someone/post", "Medium"),
            ("https://dev.to/someone/post", "Dev.to"),
            ("https://github.com/rust-lang/rust", "GitHub"),
            ("https://www.khanacademy.org/computing", "Khan Academy"),
        ];

        for (url, expected) in cases {
            assert_eq!(determine_platform(url), expected, "url: {}", url);
        }
    }

    #[test]
    fn test_platform_match_is_case_insensitive() {
        assert_eq!(determine_platform("HTTPS://GITHUB.COM/Org/Repo"), "GitHub");
        assert_eq!(
            determine_resource_type("https://WWW.UDEMY.COM/course/x", "Udemy"),
            ResourceType::Course
        );
    }

    #[test]
    fn test_platform_fallback_uses_second_level_label() {
        assert_eq!(determine_platform("https://docs.python.org/3/"), "Python");
        assert_eq!(determine_platform("https://roadmap.sh/react"), "Roadmap");
        assert_eq!(determine_platform("https://example.com:8080/x"), "Example");
    }

    #[test]
    fn test_platform_unknown_without_dotted_host() {
        assert_eq!(determine_platform("http://localhost:3000/page"), "Unknown");
        assert_eq!(determine_platform("not a url"), "Unknown");
    }

    #[test]
    fn test_resource_type_table() {
        assert_eq!(
            determine_resource_type("https://codecademy.com/learn", "Codecademy"),
            ResourceType::Interactive
        );
        assert_eq!(
            determine_resource_type("https://www.edx.org/learn", "edX"),
            ResourceType::Course
        );
        assert_eq!(
            determine_resource_type("https://dev.to/post", "Dev.to"),
            ResourceType::Article
        );
        assert_eq!(
            determine_resource_type("https://github.com/x/y", "GitHub"),
            ResourceType::Docs
        );
        assert_eq!(
            determine_resource_type("https://developer.mozilla.org/", "MDN"),
            ResourceType::Docs
        );
    }

    #[test]
    fn test_platform_argument_is_ignored() {
        let url = "https://medium.com/post";
        assert_eq!(
            determine_resource_type(url, "YouTube"),
            determine_resource_type(url, "Medium")
        );
    }

    #[test]
    fn test_classification_is_stable() {
        let url = "https://www.coursera.org/learn/machine-learning";
        let first = (determine_platform(url), determine_resource_type(url, "Coursera"));
        for _ in 0..5 {
            assert_eq!(
                (determine_platform(url), determine_resource_type(url, "Coursera")),
                first
            );
        }
    }

    #[test]
    fn test_is_resource_url() {
        assert!(is_resource_url("https://YouTube.com/watch?v=1"));
        assert!(is_resource_url("https://roadmap.sh/r?next=github.com"));
        assert!(!is_resource_url("https://roadmap.sh/frontend"));
        assert!(!is_resource_url("https://example.com/"));
    }
}
