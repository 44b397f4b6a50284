//! firecrawl-scrape — Scrape content from a single URL.
use clap::Parser;

use firecrawl_cli::cli::args::{Command, GlobalArgs, ScrapeArgs};

#[derive(Debug, Parser)]
#[command(name = "firecrawl-scrape", about = "Scrape content from a single URL", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: ScrapeArgs,
}

fn main() {
    let cli: Cli = firecrawl_cli::parse_or_exit();
    std::process::exit(firecrawl_cli::run(&cli.global, &Command::Scrape(cli.args)));
}
