//! Application state for Learnwave
//!
//! This crate holds state shared across the UI layer that originates outside
//! it, starting with the authenticated session.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod session;

pub use session::{Session, SessionHandle, SessionSignal, SessionStateError};
