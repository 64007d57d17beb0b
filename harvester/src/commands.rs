use crate::CLAP_STYLING;
use clap::{arg, command};
use harvester_core::output::{DEFAULT_CATALOG_PATH, DEFAULT_OUTPUT_PATH};
use harvester_scanner::page_scraper::DEFAULT_BASE_URL;
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("harvester")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("harvester")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("harvest")
                .about(
                    "Scrape the roadmap page of every skill and save the learning resources \
                it links to as JSON.",
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Where to write the scraped resources")
                        .default_value(DEFAULT_OUTPUT_PATH),
                )
                .arg(
                    arg!(-s --"sources" <PATH>)
                        .required(false)
                        .help(
                            "Newline-delimited file of '<skill> <url>' pairs to scrape instead \
                        of the built-in roadmap list",
                        ),
                )
                .arg(
                    arg!(--"base-url" <URL>)
                        .required(false)
                        .help("Origin that root-relative links are resolved against")
                        .value_parser(clap::value_parser!(Url))
                        .default_value(DEFAULT_BASE_URL),
                )
                .arg(
                    arg!(--"delay-ms" <MILLIS>)
                        .required(false)
                        .help("Pause after each fetched page, in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("2000"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("30"),
                )
                .arg(
                    arg!(-v --"verbose")
                        .required(false)
                        .help("Log every fetch and extracted link")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("merge")
                .about("Merge previously scraped free resources into the resource catalog")
                .arg(
                    arg!(-c --"catalog" <PATH>)
                        .required(false)
                        .help("The resource catalog to merge into")
                        .default_value(DEFAULT_CATALOG_PATH),
                )
                .arg(
                    arg!(-s --"scraped" <PATH>)
                        .required(false)
                        .help("The scraped resources written by 'harvest'")
                        .default_value(DEFAULT_OUTPUT_PATH),
                ),
        )
}
