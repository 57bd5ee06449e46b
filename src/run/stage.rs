//! Pipeline stages.

use strum_macros::{Display, EnumIter};

/// The export pipeline's states, in execution order.
///
/// There is no path back to an earlier stage and no retry: a failure in any
/// stage ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Stage {
    /// Resolve the export window
    ComputeWindow,
    /// Create or truncate the results file
    OpenOutput,
    /// Read credentials, connect, query, disconnect
    Query,
    /// Serialize rows as TSV
    Write,
    /// `gzip -f` the results file
    Compress,
    /// `scp` the archive to the destination
    Deliver,
    /// Export finished
    Done,
}

impl Stage {
    /// What went wrong when this stage fails. `Done` does no work and
    /// cannot fail.
    pub fn failure_reason(self) -> Option<&'static str> {
        match self {
            Stage::ComputeWindow => Some("value of --latestdate could not be parsed as date"),
            Stage::OpenOutput => Some("could not create results file"),
            Stage::Query => Some("could not complete database work"),
            Stage::Write => Some("could not write TSV data"),
            Stage::Compress => Some("could not compress results"),
            Stage::Deliver => Some("could not send results"),
            Stage::Done => None,
        }
    }

    /// Context attached to an error raised in this stage.
    pub fn failure_context(self) -> String {
        match self.failure_reason() {
            Some(what) => format!("{self} stage failed: {what}"),
            None => format!("{self} stage failed"),
        }
    }
}
