//! firecrawl-crawl — Crawl multiple pages from a website.
use clap::Parser;

use firecrawl_cli::cli::args::{Command, CrawlArgs, GlobalArgs};

#[derive(Debug, Parser)]
#[command(name = "firecrawl-crawl", about = "Crawl multiple pages from a website", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: CrawlArgs,
}

fn main() {
    let cli: Cli = firecrawl_cli::parse_or_exit();
    std::process::exit(firecrawl_cli::run(&cli.global, &Command::Crawl(cli.args)));
}
