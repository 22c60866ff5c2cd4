use serde::Serialize;

use std::fmt;

/// Overall result of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    /// Every user was migrated or skipped.
    Success,
    /// At least one user failed; the others were processed.
    Partial,
    /// Connection setup or enumeration failed before any user was processed.
    Fatal,
}

impl RunStatus {
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::Fatal)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("SUCCESS"),
            Self::Partial => f.write_str("PARTIAL"),
            Self::Fatal => f.write_str("FATAL"),
        }
    }
}
