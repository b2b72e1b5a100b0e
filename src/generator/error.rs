use std::fmt;

/// Resource generation error
///
/// Returned by [`generate_resource`](super::generate_resource) before any
/// artifact is produced. A run either yields the complete artifact set or
/// one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The resource name is empty or cannot be turned into identifiers
    InvalidName {
        /// The rejected raw name
        name: String,
        /// Why the name was rejected
        reason: &'static str,
    },
    /// The transport style is not part of the template catalog
    UnknownTransportStyle {
        /// The unrecognised style string
        style: String,
    },
    /// Two artifact descriptors resolved to the same output path
    PathCollision {
        /// The contested path
        path: String,
    },
    /// The test-stub suffix cannot be used inside a file name
    InvalidStubSuffix {
        /// The rejected suffix
        suffix: String,
    },
    /// A template failed to render
    Render {
        /// Template that failed
        template: &'static str,
        /// Underlying askama message
        message: String,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidName { name, reason } => {
                write!(f, "Invalid resource name '{}': {}", name, reason)
            }
            GenerateError::UnknownTransportStyle { style } => {
                write!(
                    f,
                    "Unknown transport style '{}'. Expected one of: request-response, \
                    async-message, push-channel, typed-query-code-first, typed-query-schema-first",
                    style
                )
            }
            GenerateError::PathCollision { path } => {
                write!(
                    f,
                    "Two artifacts resolved to the same path '{}'; refusing to overwrite",
                    path
                )
            }
            GenerateError::InvalidStubSuffix { suffix } => {
                write!(
                    f,
                    "Invalid test-stub suffix '{}': it must not contain '.', '/' or '\\'",
                    suffix
                )
            }
            GenerateError::Render { template, message } => {
                write!(f, "Failed to render template '{}': {}", template, message)
            }
        }
    }
}

impl std::error::Error for GenerateError {}
