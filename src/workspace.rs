/// Workspace bootstrap: seed the files an agent workspace starts from.
///
/// Existing files are never touched unless `overwrite` is set. The daily
/// log created here is the file `promote-keep` later reads.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use crate::paths;
use crate::types::InitOutput;

/// Errors from seeding a workspace.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What to seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    pub workspace: PathBuf,
    pub agent_name: String,
    pub agent_vibe: String,
    pub agent_emoji: String,
    pub user_name: String,
    pub user_language: String,
    /// Also seed `MEMORY.md`.
    pub with_memory: bool,
    /// Also seed `.gitignore`.
    pub gitignore: bool,
    /// Date of the `memory/YYYY-MM-DD.md` log to seed, if any.
    pub daily_log: Option<NaiveDate>,
    pub overwrite: bool,
}

/// Outcome of writing one seed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Created,
    Overwritten,
    Skipped,
}

/// Write `content` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns `WorkspaceError::Io` if a directory or the file cannot be written.
pub fn write_file(path: &Path, content: &str, overwrite: bool) -> Result<WriteStatus, WorkspaceError> {
    let existed = path.exists();
    if existed && !overwrite {
        return Ok(WriteStatus::Skipped);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
    }
    fs::write(path, content).map_err(|source| io_error(path, source))?;
    Ok(if existed {
        WriteStatus::Overwritten
    } else {
        WriteStatus::Created
    })
}

/// Seed the workspace described by `opts`.
///
/// # Errors
///
/// Returns `WorkspaceError::Io` on the first directory or file that cannot
/// be written; files written before it stay in place.
pub fn init_workspace(opts: &InitOptions) -> Result<InitOutput, WorkspaceError> {
    let root = paths::expand(&opts.workspace).map_err(|source| io_error(&opts.workspace, source))?;
    let mut out = InitOutput {
        workspace: root.display().to_string(),
        ..InitOutput::default()
    };

    ensure_dir(&root, &mut out)?;

    let mut files = vec![
        ("AGENTS.md", agents_md()),
        ("SOUL.md", soul_md()),
        ("USER.md", user_md(&opts.user_name, &opts.user_language)),
        (
            "IDENTITY.md",
            identity_md(&opts.agent_name, &opts.agent_vibe, &opts.agent_emoji),
        ),
        ("TOOLS.md", tools_md()),
    ];
    if opts.with_memory {
        files.push(("MEMORY.md", MEMORY_MD.to_owned()));
    }
    if opts.gitignore {
        files.push((".gitignore", GITIGNORE.to_owned()));
    }
    for (name, content) in &files {
        seed(&root.join(name), content, opts.overwrite, &mut out)?;
    }

    if let Some(day) = opts.daily_log {
        let memory_dir = root.join("memory");
        ensure_dir(&memory_dir, &mut out)?;
        let stamp = day.format("%Y-%m-%d").to_string();
        seed(
            &memory_dir.join(format!("{stamp}.md")),
            &daily_md(&stamp),
            opts.overwrite,
            &mut out,
        )?;
    }

    info!(
        workspace = %out.workspace,
        created = out.created_files.len(),
        overwritten = out.overwritten_files.len(),
        skipped = out.skipped_files.len(),
        "workspace initialised"
    );
    Ok(out)
}

fn ensure_dir(dir: &Path, out: &mut InitOutput) -> Result<(), WorkspaceError> {
    if dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
    out.created_dirs.push(dir.display().to_string());
    Ok(())
}

fn seed(path: &Path, content: &str, overwrite: bool, out: &mut InitOutput) -> Result<(), WorkspaceError> {
    let status = write_file(path, content, overwrite)?;
    debug!(path = %path.display(), ?status, "seed file");
    let shown = path.display().to_string();
    match status {
        WriteStatus::Created => out.created_files.push(shown),
        WriteStatus::Overwritten => out.overwritten_files.push(shown),
        WriteStatus::Skipped => out.skipped_files.push(shown),
    }
    Ok(())
}

fn io_error(path: &Path, source: io::Error) -> WorkspaceError {
    WorkspaceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

// --- Seed content ---

const MEMORY_MD: &str = "# Long-term Memory\n\n## Decisions\n\n## Lessons\n\n## Durable Facts\n";

const GITIGNORE: &str = ".DS_Store\n.env\n**/*.key\n**/*.pem\n**/secrets*\n";

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { default } else { trimmed }
}

fn agents_md() -> String {
    "# Operating Instructions\n\n\
     ## Memory Policy\n\n\
     - Durable decisions, constraints and lessons go to MEMORY.md.\n\
     - Daily context goes to memory/YYYY-MM-DD.md; mark lines to keep with `- KEEP:`.\n"
        .to_owned()
}

fn soul_md() -> String {
    "# Core Values\n\n- Prefer simple solutions over complex ones.\n".to_owned()
}

fn user_md(name: &str, language: &str) -> String {
    format!(
        "# User Profile\n\n- Name: {}\n- Language: {}\n",
        or_default(name, "(unknown)"),
        or_default(language, "(unspecified)")
    )
}

fn identity_md(name: &str, vibe: &str, emoji: &str) -> String {
    format!(
        "- **Name:** {}\n- **Vibe:** {}\n- **Emoji:** {}\n",
        or_default(name, "Claw"),
        or_default(vibe, "sharp, concise, helpful"),
        or_default(emoji, ":lobster:")
    )
}

fn tools_md() -> String {
    let shell = std::env::var("SHELL").unwrap_or_else(|_| "(unknown)".to_owned());
    format!("# Local Environment\n\n- Shell: {shell}\n")
}

fn daily_md(stamp: &str) -> String {
    format!("# {stamp}\n\n## Log\n\n## KEEP\n\n")
}
