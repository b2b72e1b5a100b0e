mod generate;
mod write;

pub use generate::{generate_resource, Artifact, ResourceArtifacts};
pub use write::{write_artifacts, WriteOptions, WriteSummary};
