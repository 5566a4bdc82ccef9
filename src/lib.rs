pub mod config;
pub mod models;
pub mod output;
pub mod validation;

// Re-export main types
pub use config::{CliConfig, ReportConfig};
pub use models::{
    Actor, Artifact, ArtifactValidationResult, COMPLIANCE_THRESHOLD, CheckSeverity, DataEntity,
    HardGate, HardGateResult, ProjectValidationData, RequiredArtifact, SnapshotError,
    SystemBoundaries, UseCase, ValidationCheck, ValidationResult,
};
pub use output::{FileReportWriter, ReportWriter};
pub use validation::{ComplianceValidator, GateOutcome, validate_project};
