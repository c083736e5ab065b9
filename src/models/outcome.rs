// file: src/models/outcome.rs
// description: submission outcome reported back to the operator
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// Result of one document submission. `Accepted` is only produced when the
/// index signalled success explicitly; `Rejected` carries the reason the
/// submission failed, built at the reporting boundary from the error the
/// ingestor returned. No retry state is kept in either case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IngestOutcome {
    Accepted,
    Rejected { reason: String },
}

impl IngestOutcome {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}
