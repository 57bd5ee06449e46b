//! Utility functions.

pub mod process;
#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export public API
pub use process::{
    run_tool, ProcessRunner, SystemProcessRunner, ToolCommand, ToolFailure, ToolOutput,
};
