//! Interactive quick-setup wizard used when no task flag is given.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::console::Console;
use crate::editor::{Editor, check_editor};
use crate::tasks::{Plan, Task, TaskContext, run_plan};

const MENU: [&str; 6] = [
    "1. Quick Setup (Build scenes + Create data)",
    "2. Build scenes only",
    "3. Create ScriptableObjects only",
    "4. Validate project",
    "5. Full workflow (Setup + Validate)",
    "0. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    QuickSetup,
    Scenes,
    Data,
    Validate,
    Full,
    Exit,
}

impl MenuChoice {
    /// Parse a menu entry. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::QuickSetup),
            "2" => Some(MenuChoice::Scenes),
            "3" => Some(MenuChoice::Data),
            "4" => Some(MenuChoice::Validate),
            "5" => Some(MenuChoice::Full),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Tasks behind the choice; `None` for [`MenuChoice::Exit`].
    pub fn plan(self) -> Option<Plan> {
        match self {
            MenuChoice::QuickSetup => Some(Plan::setup()),
            MenuChoice::Scenes => Some(Plan::new([Task::BuildScenes])),
            MenuChoice::Data => Some(Plan::new([Task::CreateData])),
            MenuChoice::Validate => Some(Plan::new([Task::Validate])),
            MenuChoice::Full => Some(Plan::full()),
            MenuChoice::Exit => None,
        }
    }
}

/// Read one line of input. End of input is an error.
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("read menu choice")?;
    if n == 0 {
        bail!("no menu choice given (end of input)");
    }
    Ok(line)
}

/// Run the wizard: show paths, check the editor, ask for a choice, run it.
pub fn run_interactive<E: Editor, R: BufRead, W: Write>(
    ctx: &TaskContext,
    editor: &E,
    input: &mut R,
    console: &mut Console<W>,
) -> Result<bool> {
    console.header("Viking Siege Breaker - Quick Setup Wizard")?;
    console.info(format_args!("Project: {}", ctx.project_path.display()))?;
    console.info(format_args!("Unity: {}", ctx.editor_path.display()))?;

    if !check_editor(&ctx.editor_path, console)? {
        return Ok(false);
    }

    console.plain("\nWhat would you like to do?\n")?;
    for line in MENU {
        console.plain(line)?;
    }
    console.prompt("\nEnter choice (1-5): ")?;

    let raw = read_line(input)?;
    let Some(choice) = MenuChoice::parse(&raw) else {
        console.error("Invalid choice")?;
        return Ok(false);
    };
    debug!(?choice, "menu choice");

    let Some(plan) = choice.plan() else {
        console.info("Goodbye!")?;
        return Ok(true);
    };

    let success = run_plan(&plan, ctx, editor, console)?;
    if success {
        console.header("✓ Complete!")?;
        console.info("Your project is ready for development!")?;
        console.info("Open Unity and start building your game!")?;
    } else {
        console.header("✗ Failed")?;
        console.info("Check the log files for details")?;
    }
    Ok(success)
}
