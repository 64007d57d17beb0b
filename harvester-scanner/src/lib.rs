pub mod classify;
pub mod error;
pub mod result;
pub mod page_scraper;

pub use classify::{determine_platform, determine_resource_type, is_resource_url};
pub use error::ScanError;
pub use result::{ResourceType, ScrapedResource};
pub use page_scraper::{PageScraper, ScraperConfig};
