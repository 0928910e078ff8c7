//! Terminal front-end: wires the pure core to the IO engine and paints pages
//! as text.
mod app;
mod config;
mod effects;
mod logging;
mod ui;

use std::path::PathBuf;

use clap::Parser;

pub use app::run_app;
pub use logging::LogDestination;

/// Paginated, periodically reshuffled recommendations in the terminal.
#[derive(Debug, Parser)]
#[command(name = "shelf", version)]
pub struct Args {
    /// Feed location: an http(s) URL or a path to a JSON file.
    #[arg(default_value = "./books.json")]
    pub feed: String,

    /// RON file with engine options; missing file means defaults.
    #[arg(long, default_value = "./shelf.ron")]
    pub config: PathBuf,

    /// Cards per page; overrides the config file.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}
