use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::GenerateError;

/// Default suffix for generated test-stub files (`users.service.spec.ts`)
pub const DEFAULT_STUB_SUFFIX: &str = "spec";

/// Transport style the resource is exposed through
///
/// Each style owns one entry-point template flavour; the service and module
/// templates are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransportStyle {
    /// Synchronous request/response controller (HTTP routes)
    #[default]
    RequestResponse,
    /// Asynchronous message-pattern controller
    AsyncMessage,
    /// Bidirectional push-channel gateway
    PushChannel,
    /// Typed query layer, types declared in code
    TypedQueryCodeFirst,
    /// Typed query layer, types declared in a schema file
    TypedQuerySchemaFirst,
}

impl TransportStyle {
    /// All styles in catalog order
    pub const ALL: [TransportStyle; 5] = [
        TransportStyle::RequestResponse,
        TransportStyle::AsyncMessage,
        TransportStyle::PushChannel,
        TransportStyle::TypedQueryCodeFirst,
        TransportStyle::TypedQuerySchemaFirst,
    ];

    /// Canonical kebab-case name
    pub fn as_str(self) -> &'static str {
        match self {
            TransportStyle::RequestResponse => "request-response",
            TransportStyle::AsyncMessage => "async-message",
            TransportStyle::PushChannel => "push-channel",
            TransportStyle::TypedQueryCodeFirst => "typed-query-code-first",
            TransportStyle::TypedQuerySchemaFirst => "typed-query-schema-first",
        }
    }

    /// Legacy short name accepted as an alias
    pub fn alias(self) -> &'static str {
        match self {
            TransportStyle::RequestResponse => "rest",
            TransportStyle::AsyncMessage => "microservice",
            TransportStyle::PushChannel => "ws",
            TransportStyle::TypedQueryCodeFirst => "graphql-code-first",
            TransportStyle::TypedQuerySchemaFirst => "graphql-schema-first",
        }
    }

    /// Whether this is one of the two typed-query styles
    pub fn is_typed_query(self) -> bool {
        matches!(
            self,
            TransportStyle::TypedQueryCodeFirst | TransportStyle::TypedQuerySchemaFirst
        )
    }
}

impl fmt::Display for TransportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportStyle {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        TransportStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == needle || style.alias() == needle)
            .ok_or_else(|| GenerateError::UnknownTransportStyle {
                style: s.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for TransportStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Declarative description of one resource to scaffold
///
/// Every field except `name` is optional when deserialized; omitted or
/// unknown keys fall back to the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceOptions {
    /// Raw resource name (`users`, `_users`, `blogPosts`)
    pub name: String,
    /// Transport style (default: request-response)
    #[serde(alias = "type")]
    pub transport_style: TransportStyle,
    /// Generate CRUD operations, entity and input artifacts (default: true)
    pub crud: bool,
    /// Generate paired test stubs for runtime artifacts (default: true)
    #[serde(alias = "spec")]
    pub generate_test_stubs: bool,
    /// Omit the per-resource directory (default: false)
    pub flat: bool,
    /// Suffix used in test-stub file names (default: `spec`)
    #[serde(alias = "specFileSuffix")]
    pub test_stub_suffix: String,
    /// Register the data-access client provider in module and stubs
    pub orm_integration_available: bool,
    /// Import the partial-type helper from the API-docs package
    #[serde(alias = "isSwaggerInstalled")]
    pub validation_decorators_available: bool,
}

impl Default for ResourceOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            transport_style: TransportStyle::default(),
            crud: true,
            generate_test_stubs: true,
            flat: false,
            test_stub_suffix: DEFAULT_STUB_SUFFIX.to_string(),
            orm_integration_available: false,
            validation_decorators_available: false,
        }
    }
}

impl ResourceOptions {
    /// Options for `name` with every other field at its default
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the transport style
    pub fn with_style(mut self, style: TransportStyle) -> Self {
        self.transport_style = style;
        self
    }

    /// Enable or disable CRUD generation
    pub fn with_crud(mut self, crud: bool) -> Self {
        self.crud = crud;
        self
    }

    /// Enable or disable test stubs
    pub fn with_test_stubs(mut self, enabled: bool) -> Self {
        self.generate_test_stubs = enabled;
        self
    }

    /// Enable or disable the flat layout
    pub fn with_flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    /// Override the test-stub suffix
    pub fn with_stub_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.test_stub_suffix = suffix.into();
        self
    }

    /// The effective stub suffix; blank values fall back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidStubSuffix`] if the suffix contains a
    /// `.` or a path separator.
    pub fn stub_suffix(&self) -> Result<&str, GenerateError> {
        let suffix = self.test_stub_suffix.trim();
        if suffix.is_empty() {
            return Ok(DEFAULT_STUB_SUFFIX);
        }
        if suffix.contains(['.', '/', '\\']) {
            return Err(GenerateError::InvalidStubSuffix {
                suffix: self.test_stub_suffix.clone(),
            });
        }
        Ok(suffix)
    }
}
