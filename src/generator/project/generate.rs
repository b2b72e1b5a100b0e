use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::generator::error::GenerateError;
use crate::generator::inflect::{inflect, NameVariants};
use crate::generator::options::{ResourceOptions, TransportStyle};
use crate::generator::paths::resolve_path;
use crate::generator::select::{select_artifacts, ArtifactKind};
use crate::generator::templates::{render, RenderContext};

/// One generated file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Posix-style path relative to the output root
    pub path: String,
    pub kind: ArtifactKind,
    pub content: String,
}

/// The complete, path-sorted artifact set of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceArtifacts {
    pub transport_style: TransportStyle,
    pub names: NameVariants,
    pub artifacts: Vec<Artifact>,
}

impl ResourceArtifacts {
    /// Resolved paths in output order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().map(|a| a.path.as_str())
    }

    /// Look up an artifact by its resolved path
    pub fn get(&self, path: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.path == path)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// Generate the full artifact set for one resource.
///
/// Derives the name variants once, selects descriptors for the style and
/// flags, then resolves and renders each one. Artifacts come back sorted
/// lexicographically by path. Nothing is written and no state is shared
/// between calls, so concurrent runs need no coordination.
///
/// # Errors
///
/// Fails before producing any artifact if the name or stub suffix is
/// invalid, if a template fails to render, or if two descriptors resolve
/// to the same path.
pub fn generate_resource(options: &ResourceOptions) -> Result<ResourceArtifacts, GenerateError> {
    let names = inflect(&options.name)?;
    let suffix = options.stub_suffix()?;
    let style = options.transport_style;

    let ctx = RenderContext {
        names: &names,
        style,
        crud: options.crud,
        flat: options.flat,
        orm_integration: options.orm_integration_available,
        validation_decorators: options.validation_decorators_available,
    };

    let resolved = select_artifacts(style, options.crud, options.generate_test_stubs)
        .into_iter()
        .map(|descriptor| {
            let path = resolve_path(&descriptor, &names, options.flat, suffix);
            debug!(
                kind = ?descriptor.kind,
                template = descriptor.template.name(),
                path = %path,
                "Resolved artifact"
            );
            (path, descriptor)
        });
    let by_path = collect_unique_paths(resolved)?;

    let artifacts = by_path
        .into_iter()
        .map(|(path, descriptor)| {
            Ok(Artifact {
                path,
                kind: descriptor.kind,
                content: render(descriptor.template, &ctx)?,
            })
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    info!(
        resource = %names.raw,
        style = %style,
        crud = options.crud,
        artifacts = artifacts.len(),
        "Generated resource"
    );

    Ok(ResourceArtifacts {
        transport_style: style,
        names,
        artifacts,
    })
}

/// Key entries by path, in path order.
///
/// Fails on the first path seen twice.
fn collect_unique_paths<T>(
    entries: impl IntoIterator<Item = (String, T)>,
) -> Result<BTreeMap<String, T>, GenerateError> {
    let mut by_path = BTreeMap::new();
    for (path, value) in entries {
        match by_path.entry(path) {
            Entry::Occupied(slot) => {
                return Err(GenerateError::PathCollision {
                    path: slot.key().clone(),
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
    Ok(by_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_orders_by_path() {
        let collected = collect_unique_paths([
            ("users/users.service.ts".to_string(), ArtifactKind::Service),
            ("users/dto/create-user.dto.ts".to_string(), ArtifactKind::CreateInput),
            ("users/users.module.ts".to_string(), ArtifactKind::Module),
        ])
        .unwrap();
        assert_eq!(
            collected.keys().collect::<Vec<_>>(),
            [
                "users/dto/create-user.dto.ts",
                "users/users.module.ts",
                "users/users.service.ts"
            ]
        );
    }

    #[test]
    fn test_collect_rejects_duplicate_path() {
        let err = collect_unique_paths([
            ("users/users.service.ts".to_string(), ArtifactKind::Service),
            ("users/users.module.ts".to_string(), ArtifactKind::Module),
            ("users/users.service.ts".to_string(), ArtifactKind::ServiceStub),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            GenerateError::PathCollision {
                path: "users/users.service.ts".to_string()
            }
        );
    }
}
