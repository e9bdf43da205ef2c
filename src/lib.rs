//! TUI Raycaster (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and hosts the process-level
//! pieces shared by the binary, tests and benches: environment configuration
//! and logging setup.

pub mod config;
pub mod logging;

pub use tui_raycaster_assets as assets;
pub use tui_raycaster_core as core;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;
