//! Test-only helpers: scripted editors, requests and fake Unity executables.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, anyhow};

use crate::editor::{BatchOutcome, BatchRequest, Editor};

/// Editor that replays a fixed sequence of outcomes and records every request.
///
/// Running out of scripted outcomes is an error, which makes unexpected extra
/// invocations fail loudly.
pub struct ScriptedEditor {
    outcomes: RefCell<VecDeque<BatchOutcome>>,
    calls: RefCell<Vec<BatchRequest>>,
}

impl ScriptedEditor {
    pub fn new(outcomes: Vec<BatchOutcome>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Requests received so far, in order.
    pub fn calls(&self) -> Vec<BatchRequest> {
        self.calls.borrow().clone()
    }

    /// Method names received so far, in order.
    pub fn methods(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|request| request.method.clone())
            .collect()
    }
}

impl Editor for ScriptedEditor {
    fn run_method(&self, request: &BatchRequest) -> Result<BatchOutcome> {
        self.calls.borrow_mut().push(request.clone());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("unexpected editor call for {}", request.method))
    }
}

/// Build a deterministic request with short limits.
pub fn batch_request(project: &str, method: &str, log_path: &str) -> BatchRequest {
    BatchRequest {
        editor_path: PathBuf::from("/opt/unity/Editor/Unity"),
        project_path: PathBuf::from(project),
        method: method.to_string(),
        log_path: PathBuf::from(log_path),
        timeout: Duration::from_secs(5),
        output_limit_bytes: 1024,
    }
}

/// Write an executable shell script standing in for Unity.
///
/// The script appends its `-executeMethod` argument to `<dir>/calls.txt` and
/// exits with `exit_code`, or with 1 when the method name contains
/// `fail_on` (if given).
#[cfg(unix)]
pub fn write_fake_editor(dir: &Path, exit_code: i32, fail_on: Option<&str>) -> Result<PathBuf> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let calls = dir.join("calls.txt");
    let fail_clause = match fail_on {
        Some(pattern) => format!("case \"$method\" in *{pattern}*) exit 1 ;; esac\n"),
        None => String::new(),
    };
    let script = format!(
        "#!/bin/sh\n\
         method=\"\"\n\
         while [ $# -gt 0 ]; do\n\
         \x20 if [ \"$1\" = \"-executeMethod\" ]; then method=\"$2\"; fi\n\
         \x20 shift\n\
         done\n\
         echo \"$method\" >> \"{calls}\"\n\
         {fail_clause}\
         exit {exit_code}\n",
        calls = calls.display(),
    );

    let path = dir.join("Unity");
    fs::write(&path, script)?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

/// Methods recorded by a fake editor written with [`write_fake_editor`].
pub fn recorded_methods(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("calls.txt"))
        .map(|raw| raw.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
