//! # CLI Module
//!
//! Command-line host for the resource generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate a resource and write it to disk:
//!
//! ```bash
//! resgen generate users --style rest --output src
//! ```
//!
//! Options:
//! - `--style <STYLE>` - Transport style (default: request-response)
//! - `--crud` / `--no-crud` - CRUD operations, entity and input artifacts
//! - `--spec` / `--no-spec` - Test stubs
//! - `--flat` / `--no-flat` - Omit the resource directory
//! - `--spec-file-suffix <SUFFIX>` - Test-stub suffix (default: spec)
//! - `--orm` / `--no-orm` - Register the data-access client provider
//! - `--validation-decorators` / `--no-validation-decorators` - Partial types
//!   from the API-docs package
//! - `--config <FILE>` - Project defaults (auto-detects `resgen.toml`)
//! - `--output <DIR>` - Output directory
//! - `--force` - Overwrite existing files
//! - `--dry-run` - Report without writing
//!
//! ### `plan`
//!
//! Show the artifacts a resource would produce:
//!
//! ```bash
//! resgen plan users --style ws --json
//! ```
//!
//! ### `styles`
//!
//! List the transport styles and their aliases.
//!
//! ## Project Defaults
//!
//! ```toml
//! # resgen.toml
//! output = "src"
//!
//! [defaults]
//! transportStyle = "typed-query-code-first"
//! specFileSuffix = "test"
//! ```
//!
//! Command-line flags win over the file, the file wins over built-ins.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{
    execute, plan_lines, run_cli, style_lines, Cli, Commands, ResourceArgs, StyleArg,
};
