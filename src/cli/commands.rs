use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::Mode;

#[derive(Parser)]
#[command(
    name = "tops",
    about = concat!("transit ops v", env!("CARGO_PKG_VERSION"), " - live route and line filter"),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: $TRANSIT_OPS_CONFIG, then ./transit-ops.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog the way the picker does
    Search(SearchArgs),
    /// List every entity in a catalog
    Catalog(CatalogArgs),
    /// Show vehicle counts for a selection
    Kpi(KpiArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Text to match against id and label
    pub query: String,
    /// Catalog to search
    #[arg(long, default_value_t = Mode::Bus)]
    pub mode: Mode,
    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct CatalogArgs {
    #[arg(long, default_value_t = Mode::Bus)]
    pub mode: Mode,
}

#[derive(Args)]
pub struct KpiArgs {
    #[arg(long, default_value_t = Mode::Bus)]
    pub mode: Mode,
    /// Comma-separated ids; omit to count the whole catalog
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<String>,
}
