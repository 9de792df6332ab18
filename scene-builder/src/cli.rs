//! Command-line surface: flag parsing, dispatch and exit codes.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, error};

use crate::console::Console;
use crate::editor::{Editor, check_editor};
use crate::exit_codes;
use crate::io::config::{default_config_path, load_config};
use crate::menu::run_interactive;
use crate::platform::{Platform, resolve_editor_path};
use crate::tasks::{Plan, TaskContext, run_plan};

#[derive(Debug, Parser)]
#[command(
    name = "scene-builder",
    version,
    about = "Viking Siege Breaker - Scene Builder CLI",
    after_help = "Examples:\n  \
        scene-builder              # Interactive mode\n  \
        scene-builder --setup      # Quick setup\n  \
        scene-builder --scenes     # Build scenes only\n  \
        scene-builder --data       # Create data only\n  \
        scene-builder --validate   # Validate project\n  \
        scene-builder --all        # Full workflow"
)]
pub struct Cli {
    /// Build scenes and create data.
    #[arg(long)]
    pub setup: bool,
    /// Build scenes only.
    #[arg(long)]
    pub scenes: bool,
    /// Create ScriptableObjects only.
    #[arg(long)]
    pub data: bool,
    /// Validate project setup.
    #[arg(long)]
    pub validate: bool,
    /// Full workflow (setup + validate).
    #[arg(long)]
    pub all: bool,
    /// Custom Unity executable path.
    #[arg(long, value_name = "PATH")]
    pub unity_path: Option<PathBuf>,
    /// Unity project directory. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub project_path: Option<PathBuf>,
    /// Config file, which must exist. Without it `scene-builder.toml` in the
    /// project directory is read when present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn plan(&self) -> Plan {
        Plan::from_flags(self.setup, self.scenes, self.data, self.validate, self.all)
    }

    /// No task flag given: run the interactive wizard.
    pub fn is_interactive(&self) -> bool {
        !(self.setup || self.scenes || self.data || self.validate || self.all)
    }
}

/// Build the task context from flags, config file and platform defaults.
pub fn task_context(cli: &Cli, cwd: &Path, platform: Platform) -> Result<TaskContext> {
    let project_path = match &cli.project_path {
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };
    if !project_path.is_dir() {
        bail!("project directory {} does not exist", project_path.display());
    }

    let config_path = match &cli.config {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                bail!("config file {} does not exist", path.display());
            }
            path
        }
        None => default_config_path(&project_path),
    };
    let config = load_config(&config_path).context("load config")?;

    let editor_path = resolve_editor_path(
        cli.unity_path.as_deref(),
        config.editor_path.as_deref(),
        platform,
    );

    Ok(TaskContext {
        editor_path,
        project_path,
        timeout: Duration::from_secs(config.timeout_secs),
        output_limit_bytes: config.output_limit_bytes,
    })
}

/// Run the requested operations. `Ok(false)` means something was reported
/// as failed on the console.
pub fn execute<E: Editor, R: BufRead, W: Write>(
    cli: &Cli,
    ctx: &TaskContext,
    editor: &E,
    input: &mut R,
    console: &mut Console<W>,
) -> Result<bool> {
    if cli.is_interactive() {
        debug!("no task flags, entering interactive mode");
        return run_interactive(ctx, editor, input, console);
    }

    if !check_editor(&ctx.editor_path, console)? {
        return Ok(false);
    }

    let success = run_plan(&cli.plan(), ctx, editor, console)?;
    if success {
        console.header("✓ Complete!")?;
    } else {
        console.header("✗ Some operations failed")?;
    }
    Ok(success)
}

/// Full CLI run, mapped to an exit code. Unexpected errors are reported on
/// the console.
pub fn run<E: Editor, R: BufRead, W: Write>(
    cli: &Cli,
    cwd: &Path,
    platform: Platform,
    editor: &E,
    input: &mut R,
    console: &mut Console<W>,
) -> i32 {
    let result =
        task_context(cli, cwd, platform).and_then(|ctx| execute(cli, &ctx, editor, input, console));
    match result {
        Ok(true) => exit_codes::OK,
        Ok(false) => exit_codes::FAILED,
        Err(err) => {
            error!(err = %format!("{err:#}"), "unexpected error");
            // Nothing left to report to if the console itself is broken.
            let _ = console.error(format_args!("Unexpected error: {err:#}"));
            exit_codes::FAILED
        }
    }
}
