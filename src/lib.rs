//! Learnwave application shell
//!
//! Wires the session, the navigator and the screen registry together and owns
//! their lifecycle. Screen renderers are supplied by the embedding UI.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod shell;
pub mod telemetry;

pub use app_state;
pub use app_ui;
pub use shell::AppShell;
