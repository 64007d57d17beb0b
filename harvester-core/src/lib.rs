pub mod error;
pub mod harvest;
pub mod merge;
pub mod model;
pub mod output;
pub mod sources;

use colored::Colorize;

pub use error::HarvestError;
pub use model::{CatalogEntry, ResourceRecord};
pub use sources::TopicSource;

pub fn print_banner() {
    let banner = r#"
  _                               _
 | |__   __ _ _ ____   _____  ___| |_ ___ _ __
 | '_ \ / _` | '__\ \ / / _ \/ __| __/ _ \ '__|
 | | | | (_| | |   \ V /  __/\__ \ ||  __/ |
 |_| |_|\__,_|_|    \_/ \___||___/\__\___|_|
"#;
    println!("{}", banner.bright_cyan().bold());
    println!(
        "  {} {}\n",
        "free learning resources, straight from the roadmaps".bright_white(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
