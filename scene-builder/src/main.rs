//! Viking Siege Breaker scene builder.
//!
//! Runs the project's Unity editor tooling headless: build scenes, create
//! default ScriptableObjects, validate the setup. Without task flags an
//! interactive menu asks what to do.

use clap::Parser;
use tracing::warn;

use scene_builder::cli::{Cli, run};
use scene_builder::console::Console;
use scene_builder::editor::UnityEditor;
use scene_builder::platform::Platform;
use scene_builder::{exit_codes, logging};

fn main() {
    logging::init();
    let cli = Cli::parse();

    // The editor child shares our process group and receives the same SIGINT.
    if let Err(err) = ctrlc::set_handler(|| {
        println!("\n\nInterrupted by user");
        std::process::exit(exit_codes::FAILED);
    }) {
        warn!(err = %err, "failed to install interrupt handler");
    }

    let mut console = Console::stdout(cli.no_color);

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            let _ = console.error(format_args!(
                "Unexpected error: cannot read current directory: {err}"
            ));
            std::process::exit(exit_codes::FAILED);
        }
    };

    let mut stdin = std::io::stdin().lock();
    let code = run(
        &cli,
        &cwd,
        Platform::current(),
        &UnityEditor,
        &mut stdin,
        &mut console,
    );
    std::process::exit(code);
}
