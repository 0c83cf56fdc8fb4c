//! Configuration management for stencil templates
//!
//! This module contains the configuration system components:
//! - `layout`: Where the materializer finds template subtrees and API layers
//! - `loader`: Configuration file loading and parsing

pub mod layout;
pub mod loader;

pub use layout::Layout;
pub use loader::{Config, ConfigV1};
