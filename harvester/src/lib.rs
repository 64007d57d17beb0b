// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    load_sources, load_sources_from_file,
    parse_source_line, resolve_path,
};

// Re-export harvest functionality from harvester-core
pub use harvester_core::harvest::{
    execute_harvest, generate_harvest_report,
    HarvestOptions, HarvestProgressCallback,
};
