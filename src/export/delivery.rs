//! Delivery of the compressed results to a remote host.
//!
//! The identity file is always passed with `-i`, so the exporter can run as a
//! user without a home directory.

use std::path::Path;

use log::info;

use crate::config::{DELIVERY_IDENTITY_FLAG, DELIVERY_PROGRAM};
use crate::error_handling::ExportError;
use crate::export::archive::compressed_path;
use crate::utils::{run_tool, ProcessRunner, ToolCommand};

/// Copies `<path>.gz` to `destination` with `scp -i <key>`.
///
/// `path` is the uncompressed results file; `destination` is an opaque
/// `host:path` string passed straight to scp.
pub async fn deliver(
    runner: &dyn ProcessRunner,
    path: &Path,
    destination: &str,
    key: &Path,
) -> Result<(), ExportError> {
    let artifact = compressed_path(path);
    let command = ToolCommand::new(DELIVERY_PROGRAM)
        .arg(DELIVERY_IDENTITY_FLAG)
        .arg(key)
        .arg(&artifact)
        .arg(destination);

    run_tool(runner, &command)
        .await
        .map_err(|failure| ExportError::Delivery {
            path: artifact.clone(),
            destination: destination.to_string(),
            reason: failure.reason,
            output: failure.output,
        })?;

    info!("Copied {} to {destination}", artifact.display());
    Ok(())
}
