//! I/O helpers for scene-builder commands.

pub mod config;
pub mod process;
