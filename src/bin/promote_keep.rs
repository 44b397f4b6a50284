//! promote-keep — Promote KEEP lines from a daily memory log into MEMORY.md.
use clap::Parser;

use firecrawl_cli::cli::args::{Command, GlobalArgs, PromoteKeepArgs};

#[derive(Debug, Parser)]
#[command(name = "promote-keep", about = "Promote KEEP lines from a daily memory log into MEMORY.md", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: PromoteKeepArgs,
}

fn main() {
    let cli: Cli = firecrawl_cli::parse_or_exit();
    std::process::exit(firecrawl_cli::run(&cli.global, &Command::PromoteKeep(cli.args)));
}
