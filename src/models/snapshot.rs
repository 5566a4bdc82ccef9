use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading a project snapshot from disk
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// Project Snapshot Types
// ============================================================================

/// Read-only snapshot of a project's extracted PRD data.
///
/// This is the single input to a validation run. It is assembled by the
/// persistence layer from whatever storage schema is in use; the engine never
/// mutates it and has no knowledge of how it was fetched. Optional fields
/// deserialize to empty collections/strings so a sparse snapshot validates
/// without errors (it just fails more gates).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectValidationData {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Free-text product vision. Heuristic gates match keywords against it.
    #[serde(default)]
    pub vision: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub use_cases: Vec<UseCase>,
    #[serde(default)]
    pub system_boundaries: SystemBoundaries,
    #[serde(default)]
    pub data_entities: Vec<DataEntity>,
    /// Generated diagram records, checked for presence only
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    /// Prior completeness score, if any. Not authoritative - the engine
    /// recomputes - but a positive value counts as a source reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completeness: Option<f32>,
    /// Prior validation score, if any. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_score: Option<f32>,
}

impl ProjectValidationData {
    /// Load a snapshot from a JSON file (CLI surface; services typically
    /// construct the snapshot directly from their query layer).
    pub fn from_json_file(path: &Path) -> Result<Self, SnapshotError> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&raw)?;
        Ok(snapshot)
    }
}

/// An actor extracted from the PRD conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A use case extracted from the PRD conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseCase {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the actor performing this use case. Cross-referenced against
    /// the defined actors by the consistency checker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(default)]
    pub preconditions: Vec<String>,
    #[serde(default)]
    pub postconditions: Vec<String>,
}

/// System boundary lists (context diagram source data)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SystemBoundaries {
    #[serde(default)]
    pub internal: Vec<String>,
    #[serde(default)]
    pub external: Vec<String>,
    #[serde(default)]
    pub in_scope: Vec<String>,
    #[serde(default)]
    pub out_of_scope: Vec<String>,
}

/// A core data object extracted from the PRD conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEntity {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub relationships: Vec<String>,
}

/// A generated diagram record. The engine checks presence by type tag only;
/// diagram content correctness belongs to the diagram generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: String,
}
