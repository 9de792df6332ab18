//! Stable exit codes for the scene-builder CLI.

/// Every requested operation succeeded (or the menu was exited).
pub const OK: i32 = 0;
/// An editor method failed, the editor was missing, input was invalid, or an
/// unexpected error occurred.
pub const FAILED: i32 = 1;
