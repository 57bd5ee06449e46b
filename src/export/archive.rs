//! Results file compression.

use std::path::{Path, PathBuf};

use log::info;

use crate::config::{COMPRESSED_SUFFIX, COMPRESS_FORCE_FLAG, COMPRESS_PROGRAM};
use crate::error_handling::ExportError;
use crate::utils::{run_tool, ProcessRunner, ToolCommand};

/// Path the compression tool produces for `path` (`<path>.gz`).
pub fn compressed_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(COMPRESSED_SUFFIX);
    PathBuf::from(name)
}

/// Compresses `path` in place with `gzip -f`.
///
/// gzip replaces the file with `<path>.gz`, overwriting an older archive of
/// the same name. On failure the original file is left as it was.
///
/// # Returns
///
/// The path of the compressed artifact.
pub async fn compress(runner: &dyn ProcessRunner, path: &Path) -> Result<PathBuf, ExportError> {
    let command = ToolCommand::new(COMPRESS_PROGRAM)
        .arg(COMPRESS_FORCE_FLAG)
        .arg(path);

    run_tool(runner, &command)
        .await
        .map_err(|failure| ExportError::Compression {
            path: path.to_path_buf(),
            reason: failure.reason,
            output: failure.output,
        })?;

    let artifact = compressed_path(path);
    info!("Compressed results to {}", artifact.display());
    Ok(artifact)
}
