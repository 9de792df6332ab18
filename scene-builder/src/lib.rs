//! Batch-mode driver for the Viking Siege Breaker Unity project.
//!
//! The crate locates the Unity editor on the host, then runs a fixed set of
//! editor methods (scene build, data asset generation, validation) headless.
//! The architecture keeps a strict separation:
//!
//! - **[`tasks`] / [`menu`] / [`platform`]**: deterministic mapping from user
//!   input to a [`tasks::Plan`] and from a plan to editor method names.
//! - **[`io`]**: side-effecting operations (config file, process execution).
//! - **[`editor`]**: the [`editor::Editor`] seam. Tests swap in scripted
//!   editors that never spawn processes.
//!
//! [`cli`] wires these together for the binary.

pub mod cli;
pub mod console;
pub mod editor;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod menu;
pub mod platform;
pub mod tasks;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
