//! firecrawl-cli — search, map, scrape, crawl and extract the web as JSON.
//!
//! Every command follows one contract: parse arguments, resolve the API
//! key, validate the request, make one API call, then print exactly one
//! JSON envelope (`{"success": true, "data": ...}` or
//! `{"success": false, "error": ...}`) and exit 0 or 1.

pub mod api;
pub mod cli;
pub mod commands;
pub mod errors;
pub mod exitcode;
pub mod invocation;
pub mod logging;
pub mod paths;
pub mod promote;
pub mod types;
pub mod workspace;

use clap::Parser;
use tracing::{debug, warn};

use api::{ClientSettings, ScrapeApi};
use cli::{Command, GlobalArgs};
use errors::CliError;
use invocation::{API_KEY_VAR, Credential, Invocation};
use types::Envelope;

/// Parse the process arguments.
///
/// `--help` and `--version` print to stdout and exit 0. Any other parse
/// failure prints clap's usage message to stderr and exits 1; no envelope
/// is written for it.
#[must_use]
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(parsed) => parsed,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(exitcode::FAILURE);
        }
    }
}

/// Run one command against the real API client and print its result.
///
/// Returns the process exit code.
#[must_use]
pub fn run(global: &GlobalArgs, command: &Command) -> i32 {
    logging::setup_logging(global.debug);
    let envelope = execute(global, command, api::connect);
    cli::emit(&envelope)
}

/// Run one command and build its envelope without printing it.
///
/// `connect` builds the API client; it is only invoked once the credential
/// and every argument have been validated.
pub fn execute<C>(global: &GlobalArgs, command: &Command, connect: C) -> Envelope
where
    C: FnOnce(&ClientSettings, Credential) -> Result<Box<dyn ScrapeApi>, CliError>,
{
    match try_execute(global, command, connect) {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!(kind = err.kind(), "{err}");
            Envelope::failure(&err)
        }
    }
}

fn try_execute<C>(global: &GlobalArgs, command: &Command, connect: C) -> Result<Envelope, CliError>
where
    C: FnOnce(&ClientSettings, Credential) -> Result<Box<dyn ScrapeApi>, CliError>,
{
    match command {
        Command::PromoteKeep(args) => return commands::promote_keep::run(args),
        Command::InitWorkspace(args) => return commands::init_workspace::run(args),
        _ => {}
    }

    let credential = Credential::resolve(API_KEY_VAR, global.api_key.clone())?;
    let invocation = Invocation::try_from(command)?;
    let api = connect(&ClientSettings::from(global), credential)?;
    debug!(command = invocation.name(), api_url = %global.api_url, "dispatching");
    commands::dispatch(&invocation, api.as_ref())
}
