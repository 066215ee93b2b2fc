// Library surface for the binary shell and for headless/integration tests.
// The session core has no terminal dependency; the shell modules wrap it.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod input_policy;
pub mod keymap;
pub mod logging;
pub mod metrics;
pub mod passage;
pub mod render;
pub mod runtime;
pub mod session;
pub mod typing;
pub mod ui;
