//! firecrawl-map — Discover all URLs on a website.
use clap::Parser;

use firecrawl_cli::cli::args::{Command, GlobalArgs, MapArgs};

#[derive(Debug, Parser)]
#[command(name = "firecrawl-map", about = "Discover all URLs on a website", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: MapArgs,
}

fn main() {
    let cli: Cli = firecrawl_cli::parse_or_exit();
    std::process::exit(firecrawl_cli::run(&cli.global, &Command::Map(cli.args)));
}
