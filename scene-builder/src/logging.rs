//! Diagnostic tracing for debugging scene-builder.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Dev diagnostics via `RUST_LOG`, output to stderr.
//!   Not part of the user-facing output.
//!
//! - **Console (`console`)**: Colored progress lines on stdout. Always printed,
//!   unaffected by `RUST_LOG`.
//!
//! - **Editor logs**: Written by Unity itself into the project directory
//!   (`build-scenes.log`, `create-data.log`, `validation.log`).

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialize tracing for development logging.
///
/// Output: stderr, compact format, no timestamps. Safe to call twice; the
/// second call is a no-op.
///
/// # Example
/// ```bash
/// RUST_LOG=scene_builder=debug scene-builder --scenes
/// ```
pub fn init() {
    let filter = filter_from(std::env::var("RUST_LOG").ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .try_init();
}

/// Parse a `RUST_LOG`-style directive string, falling back to `warn`.
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
