//! The fixed editor operations and how they chain.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::console::Console;
use crate::editor::{BatchRequest, Editor, run_editor_method};

/// One editor operation. Declaration order is execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Task {
    BuildScenes,
    CreateData,
    Validate,
}

impl Task {
    pub const ALL: [Task; 3] = [Task::BuildScenes, Task::CreateData, Task::Validate];

    /// Static editor method triggered via `-executeMethod`.
    pub fn method(self) -> &'static str {
        match self {
            Task::BuildScenes => "VikingSiegeBreaker.Editor.QuickBuildTool.QuickBuildAllScenes",
            Task::CreateData => {
                "VikingSiegeBreaker.Editor.QuickBuildTool.CreateDefaultScriptableObjects"
            }
            Task::Validate => "VikingSiegeBreaker.Editor.QuickBuildTool.TestBuild",
        }
    }

    /// Log file name inside the project directory.
    pub fn log_file(self) -> &'static str {
        match self {
            Task::BuildScenes => "build-scenes.log",
            Task::CreateData => "create-data.log",
            Task::Validate => "validation.log",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Task::BuildScenes => "Building Scenes",
            Task::CreateData => "Creating ScriptableObjects",
            Task::Validate => "Validating Project Setup",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Task::BuildScenes => "Scenes built successfully!",
            Task::CreateData => "ScriptableObjects created successfully!",
            Task::Validate => "Validation passed!",
        }
    }
}

/// Ordered, duplicate-free set of tasks for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    tasks: Vec<Task>,
}

impl Plan {
    pub fn new(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut tasks: Vec<Task> = tasks.into_iter().collect();
        tasks.sort();
        tasks.dedup();
        Self { tasks }
    }

    /// Build scenes, then create data.
    pub fn setup() -> Self {
        Self::new([Task::BuildScenes, Task::CreateData])
    }

    /// Setup followed by validation.
    pub fn full() -> Self {
        Self::new(Task::ALL)
    }

    /// Map command-line flags to a plan.
    pub fn from_flags(setup: bool, scenes: bool, data: bool, validate: bool, all: bool) -> Self {
        let mut tasks = Vec::new();
        if scenes || setup || all {
            tasks.push(Task::BuildScenes);
        }
        if data || setup || all {
            tasks.push(Task::CreateData);
        }
        if validate || all {
            tasks.push(Task::Validate);
        }
        Self::new(tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Everything a task needs besides the editor and the console.
#[derive(Debug, Clone)]
pub struct TaskContext {
    pub editor_path: PathBuf,
    pub project_path: PathBuf,
    pub timeout: Duration,
    pub output_limit_bytes: usize,
}

impl TaskContext {
    pub fn request(&self, task: Task) -> BatchRequest {
        BatchRequest {
            editor_path: self.editor_path.clone(),
            project_path: self.project_path.clone(),
            method: task.method().to_string(),
            log_path: self.project_path.join(task.log_file()),
            timeout: self.timeout,
            output_limit_bytes: self.output_limit_bytes,
        }
    }
}

/// Run a single task under its banner.
pub fn run_task<E: Editor, W: Write>(
    task: Task,
    ctx: &TaskContext,
    editor: &E,
    console: &mut Console<W>,
) -> Result<bool> {
    console.header(task.header())?;
    let request = ctx.request(task);
    if run_editor_method(editor, &request, console)? {
        console.success(task.success_message())?;
        return Ok(true);
    }
    Ok(false)
}

/// Run every task of `plan` in order, stopping at the first failure.
#[instrument(skip_all, fields(tasks = ?plan.tasks()))]
pub fn run_plan<E: Editor, W: Write>(
    plan: &Plan,
    ctx: &TaskContext,
    editor: &E,
    console: &mut Console<W>,
) -> Result<bool> {
    for &task in plan.tasks() {
        if !run_task(task, ctx, editor, console)? {
            info!(?task, "task failed, skipping remaining tasks");
            return Ok(false);
        }
        debug!(?task, "task succeeded");
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::BatchOutcome;
    use crate::test_support::ScriptedEditor;

    fn ctx() -> TaskContext {
        TaskContext {
            editor_path: PathBuf::from("/opt/unity/Editor/Unity"),
            project_path: PathBuf::from("/work/viking"),
            timeout: Duration::from_secs(5),
            output_limit_bytes: 1024,
        }
    }

    #[test]
    fn every_task_has_a_distinct_method_and_log() {
        let methods: Vec<&str> = Task::ALL.iter().map(|t| t.method()).collect();
        let logs: Vec<&str> = Task::ALL.iter().map(|t| t.log_file()).collect();
        assert_eq!(
            methods,
            vec![
                "VikingSiegeBreaker.Editor.QuickBuildTool.QuickBuildAllScenes",
                "VikingSiegeBreaker.Editor.QuickBuildTool.CreateDefaultScriptableObjects",
                "VikingSiegeBreaker.Editor.QuickBuildTool.TestBuild",
            ]
        );
        assert_eq!(
            logs,
            vec!["build-scenes.log", "create-data.log", "validation.log"]
        );
    }

    #[test]
    fn flags_map_to_ordered_plans() {
        assert!(Plan::from_flags(false, false, false, false, false).is_empty());
        assert_eq!(
            Plan::from_flags(false, true, false, false, false).tasks(),
            &[Task::BuildScenes]
        );
        assert_eq!(
            Plan::from_flags(false, false, true, false, false).tasks(),
            &[Task::CreateData]
        );
        assert_eq!(
            Plan::from_flags(false, false, false, true, false).tasks(),
            &[Task::Validate]
        );
        assert_eq!(Plan::from_flags(true, false, false, false, false), Plan::setup());
        assert_eq!(Plan::from_flags(false, false, false, false, true), Plan::full());
        assert_eq!(
            Plan::from_flags(false, false, true, true, false).tasks(),
            &[Task::CreateData, Task::Validate]
        );
    }

    #[test]
    fn overlapping_flags_do_not_repeat_tasks() {
        let plan = Plan::from_flags(true, true, true, true, true);
        assert_eq!(plan, Plan::full());
        let shuffled = Plan::new([Task::Validate, Task::BuildScenes, Task::Validate]);
        assert_eq!(shuffled.tasks(), &[Task::BuildScenes, Task::Validate]);
    }

    #[test]
    fn request_places_log_in_project_dir() {
        let request = ctx().request(Task::Validate);
        assert_eq!(request.log_path, PathBuf::from("/work/viking/validation.log"));
        assert_eq!(request.method, Task::Validate.method());
        assert_eq!(request.project_path, PathBuf::from("/work/viking"));
    }

    #[test]
    fn run_plan_runs_all_tasks_on_success() {
        let editor = ScriptedEditor::new(vec![BatchOutcome::Succeeded; 3]);
        let mut console = Console::new(Vec::new(), false);

        let ok = run_plan(&Plan::full(), &ctx(), &editor, &mut console).expect("run");
        assert!(ok);
        assert_eq!(
            editor.methods(),
            Task::ALL.iter().map(|t| t.method().to_string()).collect::<Vec<_>>()
        );
        let out = String::from_utf8(console.into_inner()).expect("utf8");
        assert!(out.contains("✓ Scenes built successfully!"));
        assert!(out.contains("✓ ScriptableObjects created successfully!"));
        assert!(out.contains("✓ Validation passed!"));
    }

    #[test]
    fn run_plan_stops_at_first_failure() {
        let editor = ScriptedEditor::new(vec![
            BatchOutcome::Succeeded,
            BatchOutcome::Failed { exit_code: Some(1) },
        ]);
        let mut console = Console::new(Vec::new(), false);

        let ok = run_plan(&Plan::full(), &ctx(), &editor, &mut console).expect("run");
        assert!(!ok);
        assert_eq!(editor.calls().len(), 2);
        let out = String::from_utf8(console.into_inner()).expect("utf8");
        assert!(!out.contains("Validating Project Setup"));
        assert!(out.contains("Check /work/viking/create-data.log for details"));
    }

    #[test]
    fn empty_plan_succeeds_without_invocations() {
        let editor = ScriptedEditor::new(Vec::new());
        let mut console = Console::new(Vec::new(), false);

        assert!(run_plan(&Plan::default(), &ctx(), &editor, &mut console).expect("run"));
        assert!(editor.calls().is_empty());
    }

    #[test]
    fn editor_errors_propagate() {
        let editor = ScriptedEditor::new(Vec::new());
        let mut console = Console::new(Vec::new(), false);

        let err = run_plan(&Plan::setup(), &ctx(), &editor, &mut console).unwrap_err();
        assert!(err.to_string().contains("unexpected editor call"));
    }
}
