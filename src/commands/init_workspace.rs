/// `init-workspace` command: seed a workspace with bootstrap files.
use chrono::Local;

use crate::cli::args::InitWorkspaceArgs;
use crate::errors::CliError;
use crate::types::Envelope;
use crate::workspace::{InitOptions, init_workspace};

/// Run `init-workspace`. The daily log, when requested, is dated today in local time.
///
/// # Errors
///
/// Returns `CliError::Workspace` if a directory or file cannot be written.
pub fn run(args: &InitWorkspaceArgs) -> Result<Envelope, CliError> {
    let opts = InitOptions {
        workspace: args.workspace.clone(),
        agent_name: args.agent_name.clone(),
        agent_vibe: args.agent_vibe.clone(),
        agent_emoji: args.agent_emoji.clone(),
        user_name: args.user_name.clone(),
        user_language: args.user_language.clone(),
        with_memory: args.with_memory,
        gitignore: !args.no_gitignore,
        daily_log: args.create_today_log.then(|| Local::now().date_naive()),
        overwrite: args.overwrite,
    };
    let output = init_workspace(&opts)?;
    Ok(Envelope::success(&output))
}
