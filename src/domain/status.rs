//! Status phrases shown in the single-line status region

use std::fmt;

/// Result of the most recent state-changing operation.
///
/// Phrases are fixed; error detail goes to the log, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Monitoring,
    ListUpdated,
    FetchFailed,
    CopyComplete,
    CopyFailed,
    DataCleared,
    ClearFailed,
}

impl Status {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monitoring => "monitoring clipboard...",
            Self::ListUpdated => "list updated",
            Self::FetchFailed => "failed to fetch history",
            Self::CopyComplete => "copy complete",
            Self::CopyFailed => "copy failed",
            Self::DataCleared => "data cleared",
            Self::ClearFailed => "clear failed",
        }
    }

    /// Whether this status reports a failure
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::CopyFailed | Self::ClearFailed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
