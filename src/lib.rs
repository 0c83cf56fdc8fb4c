/// Handles argument parsing and the `create` / `materialize` commands.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Processes .stencilignore files to exclude specific paths.
pub mod ignore;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Interactive questions.
pub mod prompt;

/// An abstraction that allows implementing a source for templates.
pub mod loader;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Core template processing orchestration.
pub mod template;

/// Configuration handling for templates.
pub mod config;

/// Answers reduced to what the materializer needs.
pub mod context;

/// Expands the `example` scaffold into one subtree per module.
pub mod materializer;

/// Checks that the tools a template needs are installed.
pub mod preflight;

pub mod constants;

/// Extension traits for standard library types.
pub mod ext;
