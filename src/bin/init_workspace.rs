//! init-workspace — Seed a workspace with bootstrap files.
use clap::Parser;

use firecrawl_cli::cli::args::{Command, GlobalArgs, InitWorkspaceArgs};

#[derive(Debug, Parser)]
#[command(name = "init-workspace", about = "Seed a workspace with bootstrap files", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: InitWorkspaceArgs,
}

fn main() {
    let cli: Cli = firecrawl_cli::parse_or_exit();
    std::process::exit(firecrawl_cli::run(&cli.global, &Command::InitWorkspace(cli.args)));
}
