use assert_cmd::Command;
use serde_json::Value;

/// Environment variables read by the binaries; cleared so the host cannot leak in.
const CONFIG_VARS: [&str; 4] = [
    "FIRECRAWL_API_KEY",
    "FIRECRAWL_API_URL",
    "FIRECRAWL_NO_AGENT",
    "RUST_LOG",
];

/// Points at a closed local port so nothing can reach the real API.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

pub fn cmd(bin: &str) -> Command {
    let mut cmd = Command::cargo_bin(bin).expect("binary built");
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd.env("FIRECRAWL_API_URL", UNREACHABLE_API);
    cmd
}

pub fn cmd_with_key(bin: &str) -> Command {
    let mut cmd = cmd(bin);
    cmd.env("FIRECRAWL_API_KEY", "fc-test-key");
    cmd
}

/// Run to completion, returning the exit code and the parsed stdout envelope.
pub fn run_json(cmd: &mut Command, args: &[&str]) -> (i32, Value) {
    let out = cmd.args(args).output().expect("run binary");
    let code = out.status.code().expect("exit code");
    let value = serde_json::from_slice(&out.stdout).expect("stdout is a single JSON object");
    (code, value)
}
