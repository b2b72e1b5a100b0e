//! # resgen
//!
//! **resgen** is a deterministic resource scaffolder. Given a resource name and
//! a handful of flags it renders the complete boilerplate for that resource:
//! an entry point (controller, gateway or resolver), a data-access service,
//! the module wiring, entity and input types, and paired test stubs, for any
//! of five interchangeable transport styles.
//!
//! ## Overview
//!
//! Generation is a pure function of a [`ResourceOptions`] record: identical
//! input always yields byte-identical output, sorted by path. The library
//! never touches the filesystem unless asked to via
//! [`generator::write_artifacts`].
//!
//! ## Architecture
//!
//! - **[`generator`]** - Inflection, template catalog, variant selection,
//!   path resolution, Askama rendering and the orchestrator
//! - **[`cli`]** - The `resgen` command-line host (`generate`, `plan`, `styles`)
//! - **[`logging`]** - `tracing` subscriber setup driven by `RESGEN_LOG_*`
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(resgen)
//!     participant Config as generator::defaults_config
//!     participant Gen as generator::generate_resource
//!     participant Templates as generator::templates
//!     participant FS as File System
//!
//!     User->>CLI: resgen generate users --style ws
//!     CLI->>Config: resolve_defaults_config(--config | ./resgen.toml)
//!     Config-->>CLI: ResourceOptions (flags > config > defaults)
//!     CLI->>Gen: generate_resource(&options)
//!     Gen->>Gen: inflect → select → resolve paths
//!     Gen->>Templates: render(template, &ctx) per descriptor
//!     Templates-->>Gen: text ending in a single newline
//!     Gen-->>CLI: ResourceArtifacts (path-sorted)
//!     CLI->>FS: write_artifacts(out_dir, force, dry_run)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use resgen::{generate_resource, ResourceOptions, TransportStyle};
//!
//! let options = ResourceOptions::new("users")
//!     .with_style(TransportStyle::PushChannel)
//!     .with_crud(false)
//!     .with_test_stubs(false);
//! let artifacts = generate_resource(&options).unwrap();
//! let paths: Vec<_> = artifacts.paths().collect();
//! assert_eq!(
//!     paths,
//!     ["users/users.gateway.ts", "users/users.module.ts", "users/users.service.ts"]
//! );
//! ```
//!
//! ## Command Line
//!
//! ```bash
//! resgen generate users --style microservice --output src
//! resgen plan _users --flat --spec-file-suffix test
//! resgen styles
//! ```

pub mod cli;
pub mod generator;
pub mod logging;

pub use generator::{
    generate_resource, Artifact, GenerateError, NameVariants, ResourceArtifacts, ResourceOptions,
    TransportStyle,
};
