//! firecrawl-extract — Extract structured data from web pages using an LLM.
use clap::Parser;

use firecrawl_cli::cli::args::{Command, ExtractArgs, GlobalArgs};

#[derive(Debug, Parser)]
#[command(name = "firecrawl-extract", about = "Extract structured data from web pages using an LLM", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: ExtractArgs,
}

fn main() {
    let cli: Cli = firecrawl_cli::parse_or_exit();
    std::process::exit(firecrawl_cli::run(&cli.global, &Command::Extract(cli.args)));
}
