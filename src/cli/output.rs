/// Result output: the single JSON envelope written to stdout.
use std::io::{self, Write};

use tracing::error;

use crate::types::Envelope;

/// Write one envelope as pretty JSON (2-space indent) plus a newline.
///
/// # Errors
///
/// Returns the I/O error if `out` cannot be written.
pub fn write_result<W: Write>(envelope: &Envelope, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, envelope)?;
    writeln!(out)?;
    out.flush()
}

/// Print the envelope to stdout and return the process exit code.
///
/// This is the only writer of stdout.
#[must_use]
pub fn emit(envelope: &Envelope) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_result(envelope, &mut out) {
        error!("failed to write result: {e}");
    }
    envelope.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CliError;
    use serde_json::json;

    fn render(envelope: &Envelope) -> String {
        let mut buf = Vec::new();
        write_result(envelope, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_success_is_pretty_with_success_first() {
        let out = render(&Envelope::success(&json!({"results": [{"url": "https://a.com"}]})));
        assert_eq!(
            out,
            "{\n  \"success\": true,\n  \"data\": {\n    \"results\": [\n      {\n        \"url\": \"https://a.com\"\n      }\n    ]\n  }\n}\n"
        );
    }

    #[test]
    fn test_failure_has_only_error() {
        let out = render(&Envelope::failure(&CliError::MissingCredential {
            var: "FIRECRAWL_API_KEY",
        }));
        assert_eq!(
            out,
            "{\n  \"success\": false,\n  \"error\": \"FIRECRAWL_API_KEY environment variable not set\"\n}\n"
        );
    }

    #[test]
    fn test_started_crawl_layout() {
        let out = render(&Envelope::started(&json!({"success": true, "id": "job-1"})));
        let keys: Vec<String> = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&out)
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["success", "async", "data", "message"]);
    }
}
