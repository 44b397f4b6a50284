//! firecrawl-search — Search the web using Firecrawl.
use clap::Parser;

use firecrawl_cli::cli::args::{Command, GlobalArgs, SearchArgs};

#[derive(Debug, Parser)]
#[command(name = "firecrawl-search", about = "Search the web using Firecrawl", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: SearchArgs,
}

fn main() {
    let cli: Cli = firecrawl_cli::parse_or_exit();
    std::process::exit(firecrawl_cli::run(&cli.global, &Command::Search(cli.args)));
}
