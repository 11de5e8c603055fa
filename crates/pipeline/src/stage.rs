//! Pipeline state machine.

use std::fmt;

/// Where a request is in the pipeline.
///
/// Requests only move forward: `Received → Matched → Annotated → Encoded`.
/// `Rejected` is terminal and can be entered from any non-terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineStage {
    Received,
    Matched,
    Annotated,
    Encoded,
    Rejected,
}

impl PipelineStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Matched => "matched",
            Self::Annotated => "annotated",
            Self::Encoded => "encoded",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Encoded | Self::Rejected)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_advance_to(self, next: PipelineStage) -> bool {
        match (self, next) {
            (Self::Received, Self::Matched)
            | (Self::Matched, Self::Annotated)
            | (Self::Annotated, Self::Encoded) => true,
            (from, Self::Rejected) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks one request's progress and logs every transition.
#[derive(Debug)]
pub(crate) struct StageTracker {
    current: PipelineStage,
}

impl StageTracker {
    pub(crate) fn new() -> Self {
        Self {
            current: PipelineStage::Received,
        }
    }

    pub(crate) fn current(&self) -> PipelineStage {
        self.current
    }

    pub(crate) fn advance(&mut self, next: PipelineStage) {
        debug_assert!(
            self.current.can_advance_to(next),
            "illegal pipeline transition {} -> {}",
            self.current,
            next
        );
        tracing::debug!(from = %self.current, to = %next, "Pipeline transition");
        self.current = next;
    }
}
