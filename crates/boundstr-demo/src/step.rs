use std::fmt;

use boundstr::{Outcome, TerminatedStr, dump_bytes, report};
use serde::Serialize;

/// Snapshot of a buffer right after one bounded operation.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub label: String,
    /// Terminated content, lossily decoded.
    pub content: String,
    /// Every byte of the buffer, one glyph per byte.
    pub bytes: String,
    pub outcome: Outcome,
    #[serde(skip)]
    report: String,
}

impl Step {
    pub fn capture(label: impl Into<String>, buf: &[u8], needed: usize) -> Self {
        let label = label.into();
        Self {
            content: TerminatedStr::new(buf).to_string(),
            bytes: dump_bytes(buf).to_string(),
            outcome: Outcome::new(needed, buf.len()),
            report: report(&label, buf).to_string(),
            label,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n  needed={}  truncated? {}",
            self.report,
            self.outcome.needed,
            self.outcome.is_truncated()
        )
    }
}
