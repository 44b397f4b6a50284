/// `promote-keep` command: copy KEEP lines from a daily log into MEMORY.md.
use crate::cli::args::PromoteKeepArgs;
use crate::errors::CliError;
use crate::promote::promote;
use crate::types::Envelope;

/// Run `promote-keep`.
///
/// # Errors
///
/// Returns `CliError::Promote` if the daily log is missing or a file cannot be
/// read or written.
pub fn run(args: &PromoteKeepArgs) -> Result<Envelope, CliError> {
    let output = promote(&args.daily, &args.memory)?;
    Ok(Envelope::success(&output))
}
