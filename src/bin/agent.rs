//! firecrawl-agent — Autonomous web data gathering agent.
use clap::Parser;

use firecrawl_cli::cli::args::{AgentArgs, Command, GlobalArgs};

#[derive(Debug, Parser)]
#[command(name = "firecrawl-agent", about = "Autonomous web data gathering agent", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    args: AgentArgs,
}

fn main() {
    let cli: Cli = firecrawl_cli::parse_or_exit();
    std::process::exit(firecrawl_cli::run(&cli.global, &Command::Agent(cli.args)));
}
