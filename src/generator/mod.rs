//! # Generator Module
//!
//! The generator turns a declarative [`ResourceOptions`] record into the
//! complete set of boilerplate files for one resource: entry point
//! (controller, gateway or resolver), service, module, entity, input types,
//! an optional schema file and paired test stubs.
//!
//! ## Architecture
//!
//! ```text
//! ResourceOptions → Inflect → Select → Resolve paths → Render → ResourceArtifacts
//! ```
//!
//! 1. **Inflect** - Derives every name variant once (`Users`, `User`, `users`, `_users`)
//! 2. **Select** - Enumerates artifact descriptors for the style and flags
//! 3. **Resolve** - Substitutes names and the stub suffix into each file pattern
//! 4. **Render** - Renders Askama templates against a shared context
//! 5. **Collect** - Sorts artifacts by path and rejects collisions
//!
//! The pipeline is pure: no I/O, no shared state, byte-identical output for
//! identical input. Persisting the result is left to [`write_artifacts`].
//!
//! ## Transport Styles
//!
//! | Style | Alias | Entry point | Inputs |
//! |-------|-------|-------------|--------|
//! | `request-response` | `rest` | controller | `dto/*.dto.ts` |
//! | `async-message` | `microservice` | controller | `dto/*.dto.ts` |
//! | `push-channel` | `ws` | gateway | `dto/*.dto.ts` |
//! | `typed-query-code-first` | `graphql-code-first` | resolver | `dto/*.input.ts` |
//! | `typed-query-schema-first` | `graphql-schema-first` | resolver | `dto/*.input.ts` + `.graphql` |
//!
//! All five share one parametrized template per artifact kind. Operations are
//! described once as binding descriptors (see [`OperationBinding`]) and each
//! style renders them in its own decorator syntax.
//!
//! ## Usage
//!
//! ```rust
//! use resgen::generator::{generate_resource, ResourceOptions, TransportStyle};
//!
//! let options = ResourceOptions::new("users").with_style(TransportStyle::AsyncMessage);
//! let artifacts = generate_resource(&options).unwrap();
//! assert!(artifacts.get("users/users.controller.ts").is_some());
//! assert!(artifacts.get("users/dto/update-user.dto.ts").is_some());
//! ```
//!
//! ## Templates
//!
//! Templates live in the `templates/` directory:
//!
//! - `entry_point.ts.txt` - Controller, gateway and resolver
//! - `service.ts.txt` - Data-access service
//! - `module.ts.txt` - Module wiring
//! - `entity.ts.txt`, `create_input.ts.txt`, `update_input.ts.txt` - Types
//! - `schema.graphql.txt` - Schema-first type and operation declarations
//! - `test_stub.ts.txt` - Test stubs for entry point and service

mod catalog;
mod defaults_config;
mod error;
mod inflect;
mod options;
mod paths;
mod project;
mod select;
mod templates;

pub use catalog::{
    CrudOperation, EntryKind, InputRole, OperationBinding, ParamRole, RenderedOperation,
};
pub use defaults_config::{
    auto_detect_config_path, load_defaults_config, resolve_defaults_config, ConfigDefaults,
    DefaultsConfig, CONFIG_FILE_NAMES,
};
pub use error::GenerateError;
pub use inflect::{classify, dasherize, inflect, pluralize, singular, NameVariants};
pub use options::{ResourceOptions, TransportStyle, DEFAULT_STUB_SUFFIX};
pub use paths::resolve_path;
pub use project::{
    generate_resource, write_artifacts, Artifact, ResourceArtifacts, WriteOptions, WriteSummary,
};
pub use select::{select_artifacts, ArtifactDescriptor, ArtifactKind, TemplateId};
pub use templates::{render, RenderContext};
