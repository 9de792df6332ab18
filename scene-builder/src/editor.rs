//! Editor abstraction for batch-mode method invocation.
//!
//! The [`Editor`] trait decouples task orchestration from the actual Unity
//! process. Tests use scripted editors that return predetermined outcomes
//! without spawning anything.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

use crate::console::Console;
use crate::io::process::run_with_timeout;

/// Parameters for a single batch-mode invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    /// Unity executable.
    pub editor_path: PathBuf,
    /// Project directory passed as `-projectPath`.
    pub project_path: PathBuf,
    /// Fully qualified static method passed as `-executeMethod`.
    pub method: String,
    /// Log file Unity writes, passed as `-logFile`.
    pub log_path: PathBuf,
    /// Kill the editor if the method runs longer than this.
    pub timeout: Duration,
    /// Keep at most this many bytes of editor stdout/stderr per stream.
    pub output_limit_bytes: usize,
}

/// How a batch invocation ended. Spawn and I/O failures are errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    Succeeded,
    /// Editor exited non-zero. `None` when killed by a signal.
    Failed { exit_code: Option<i32> },
    TimedOut,
}

/// Abstraction over editor backends.
pub trait Editor {
    /// Run `request.method` headless and wait for the editor to exit.
    fn run_method(&self, request: &BatchRequest) -> Result<BatchOutcome>;
}

/// Editor that spawns the Unity executable.
pub struct UnityEditor;

impl Editor for UnityEditor {
    #[instrument(skip_all, fields(method = %request.method, timeout_secs = request.timeout.as_secs()))]
    fn run_method(&self, request: &BatchRequest) -> Result<BatchOutcome> {
        info!(editor = %request.editor_path.display(), "starting unity batch run");

        let mut cmd = Command::new(&request.editor_path);
        cmd.args(batch_args(request));

        let output = run_with_timeout(cmd, request.timeout, request.output_limit_bytes)
            .with_context(|| format!("run unity method {}", request.method))?;

        debug!(
            stdout = %String::from_utf8_lossy(&output.stdout),
            stderr = %String::from_utf8_lossy(&output.stderr),
            truncated = output.truncated,
            "unity output"
        );

        if output.timed_out {
            warn!(
                timeout_secs = request.timeout.as_secs(),
                "unity batch run timed out"
            );
            return Ok(BatchOutcome::TimedOut);
        }
        if !output.status.success() {
            warn!(exit_code = ?output.status.code(), "unity batch run failed");
            return Ok(BatchOutcome::Failed {
                exit_code: output.status.code(),
            });
        }

        debug!("unity batch run completed successfully");
        Ok(BatchOutcome::Succeeded)
    }
}

/// Fixed command line for a headless Unity run.
pub fn batch_args(request: &BatchRequest) -> Vec<OsString> {
    vec![
        "-batchmode".into(),
        "-quit".into(),
        "-projectPath".into(),
        request.project_path.clone().into_os_string(),
        "-executeMethod".into(),
        request.method.clone().into(),
        "-logFile".into(),
        request.log_path.clone().into_os_string(),
    ]
}

/// Report whether the editor executable exists.
pub fn check_editor<W: Write>(path: &Path, console: &mut Console<W>) -> io::Result<bool> {
    if !path.exists() {
        warn!(path = %path.display(), "unity executable missing");
        console.error(format_args!("Unity not found at: {}", path.display()))?;
        console.info("Please install Unity 6.2+ or pass --unity-path to set the correct path")?;
        return Ok(false);
    }
    console.success(format_args!("Unity found at: {}", path.display()))?;
    Ok(true)
}

/// Run one editor method and report the result on the console.
///
/// Returns `Ok(false)` when the editor ran but did not succeed; `Err` only
/// for failures to run it at all.
pub fn run_editor_method<E: Editor, W: Write>(
    editor: &E,
    request: &BatchRequest,
    console: &mut Console<W>,
) -> Result<bool> {
    console.info(format_args!("Running: {}", request.method))?;

    match editor.run_method(request)? {
        BatchOutcome::Succeeded => Ok(true),
        BatchOutcome::Failed { .. } => {
            console.error(format_args!(
                "Failed! Check {} for details",
                request.log_path.display()
            ))?;
            Ok(false)
        }
        BatchOutcome::TimedOut => {
            console.error(format_args!(
                "Timed out after {}s! Check {} for details",
                request.timeout.as_secs(),
                request.log_path.display()
            ))?;
            Ok(false)
        }
    }
}
