//! User interface layer for Learnwave
//!
//! This crate owns screen identity and navigation:
//!
//! - [`screen`] - Screen identifiers, parameter schemas and typed screens
//! - [`registry`] - Renderer lookup with parameter validation
//! - [`navigation`] - Navigation state machine and back-stack
//! - [`initializer`] - Session-aware default screen
//! - [`config`] - Navigation configuration
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use app_state::SessionHandle;
//! use app_ui::{NavigationConfig, Navigator, Params, ScreenId};
//!
//! let session = SessionHandle::signed_out();
//! let mut nav = Navigator::new(Arc::new(session), NavigationConfig::default());
//! assert_eq!(nav.current().screen_id(), ScreenId::Login);
//!
//! nav.navigate(ScreenId::Register, None).unwrap();
//! assert!(nav.navigate(ScreenId::VideoDetail, Some(Params::new())).is_err());
//! assert_eq!(nav.current().screen_id(), ScreenId::Register);
//!
//! nav.go_back();
//! assert_eq!(nav.current().screen_id(), ScreenId::Login);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod initializer;
pub mod navigation;
pub mod registry;
pub mod screen;

// Re-export commonly used types
pub use config::{ConfigError, NavigationConfig};
pub use initializer::initial_entry;
pub use navigation::{NavigationEntry, NavigationError, NavigationState, Navigator};
pub use registry::{Renderable, ScreenRegistry};
pub use screen::{
    validate, FieldIssue, FieldSpec, FieldType, ParamValue, Params, Screen, ScreenId,
    UnknownScreen, ValidationError,
};
