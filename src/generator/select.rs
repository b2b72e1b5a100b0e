//! Variant selection: which artifacts a resource gets for a set of flags.

use serde::Serialize;

use super::options::TransportStyle;

/// Placeholder for the dasherized resource name
pub const NAME_PLACEHOLDER: &str = "__name__";
/// Placeholder for the dasherized singular resource name
pub const SINGULAR_PLACEHOLDER: &str = "__singular__";
/// Placeholder for the test-stub suffix
pub const SUFFIX_PLACEHOLDER: &str = "__suffix__";

/// Kind of a generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Controller, gateway or resolver, depending on the style
    EntryPoint,
    Service,
    Module,
    Entity,
    CreateInput,
    UpdateInput,
    /// Combined type/input/query/mutation declarations (schema-first only)
    SchemaFile,
    /// Test stub paired with the entry point
    EntryPointStub,
    /// Test stub paired with the service
    ServiceStub,
}

impl ArtifactKind {
    /// Whether this artifact is a test stub
    pub fn is_test_stub(self) -> bool {
        matches!(self, ArtifactKind::EntryPointStub | ArtifactKind::ServiceStub)
    }

    /// Template used to render this kind
    pub fn template(self) -> TemplateId {
        match self {
            ArtifactKind::EntryPoint => TemplateId::EntryPoint,
            ArtifactKind::Service => TemplateId::Service,
            ArtifactKind::Module => TemplateId::Module,
            ArtifactKind::Entity => TemplateId::Entity,
            ArtifactKind::CreateInput => TemplateId::CreateInput,
            ArtifactKind::UpdateInput => TemplateId::UpdateInput,
            ArtifactKind::SchemaFile => TemplateId::SchemaFile,
            ArtifactKind::EntryPointStub => TemplateId::EntryPointStub,
            ArtifactKind::ServiceStub => TemplateId::ServiceStub,
        }
    }
}

/// Identifier of a template in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    EntryPoint,
    Service,
    Module,
    Entity,
    CreateInput,
    UpdateInput,
    SchemaFile,
    EntryPointStub,
    ServiceStub,
}

impl TemplateId {
    /// Stable name used in error messages and logs
    pub fn name(self) -> &'static str {
        match self {
            TemplateId::EntryPoint => "entry_point",
            TemplateId::Service => "service",
            TemplateId::Module => "module",
            TemplateId::Entity => "entity",
            TemplateId::CreateInput => "create_input",
            TemplateId::UpdateInput => "update_input",
            TemplateId::SchemaFile => "schema",
            TemplateId::EntryPointStub => "entry_point_stub",
            TemplateId::ServiceStub => "service_stub",
        }
    }
}

/// One artifact to emit, before path resolution and rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub kind: ArtifactKind,
    /// Path relative to the resource directory, with placeholders
    pub file_pattern: String,
    pub template: TemplateId,
    pub requires_crud: bool,
}

impl ArtifactDescriptor {
    fn new(kind: ArtifactKind, file_pattern: String, requires_crud: bool) -> Self {
        Self {
            kind,
            file_pattern,
            template: kind.template(),
            requires_crud,
        }
    }
}

/// Enumerate the artifacts for a style and flag combination.
///
/// The entry point, its service and its module are always present. CRUD
/// adds the entity and both inputs (plus the schema file for the
/// schema-first style); test stubs pair only with the entry point and the
/// service. The caller sorts by resolved path.
pub fn select_artifacts(
    style: TransportStyle,
    crud: bool,
    generate_test_stubs: bool,
) -> Vec<ArtifactDescriptor> {
    let entry = style.entry_kind().file_segment();
    let input = style.input_segment();

    let mut descriptors = vec![
        ArtifactDescriptor::new(
            ArtifactKind::EntryPoint,
            format!("{NAME_PLACEHOLDER}.{entry}.ts"),
            false,
        ),
        ArtifactDescriptor::new(
            ArtifactKind::Service,
            format!("{NAME_PLACEHOLDER}.service.ts"),
            false,
        ),
        ArtifactDescriptor::new(
            ArtifactKind::Module,
            format!("{NAME_PLACEHOLDER}.module.ts"),
            false,
        ),
    ];

    if generate_test_stubs {
        descriptors.push(ArtifactDescriptor::new(
            ArtifactKind::EntryPointStub,
            format!("{NAME_PLACEHOLDER}.{entry}.{SUFFIX_PLACEHOLDER}.ts"),
            false,
        ));
        descriptors.push(ArtifactDescriptor::new(
            ArtifactKind::ServiceStub,
            format!("{NAME_PLACEHOLDER}.service.{SUFFIX_PLACEHOLDER}.ts"),
            false,
        ));
    }

    if crud {
        descriptors.push(ArtifactDescriptor::new(
            ArtifactKind::Entity,
            format!("entities/{SINGULAR_PLACEHOLDER}.entity.ts"),
            true,
        ));
        descriptors.push(ArtifactDescriptor::new(
            ArtifactKind::CreateInput,
            format!("dto/create-{SINGULAR_PLACEHOLDER}.{input}.ts"),
            true,
        ));
        descriptors.push(ArtifactDescriptor::new(
            ArtifactKind::UpdateInput,
            format!("dto/update-{SINGULAR_PLACEHOLDER}.{input}.ts"),
            true,
        ));
        if style.has_schema_file() {
            descriptors.push(ArtifactDescriptor::new(
                ArtifactKind::SchemaFile,
                format!("{NAME_PLACEHOLDER}.graphql"),
                true,
            ));
        }
    }

    descriptors
}
