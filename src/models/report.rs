use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum fraction of passing hard-gate sub-checks required for an overall
/// pass verdict. Fixed by the compliance rule set, not per-call configuration.
pub const COMPLIANCE_THRESHOLD: f32 = 0.95;

/// Severity level of a validation check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckSeverity {
    /// Authoritative - a failing error check fails its gate
    Error,
    /// Advisory - surfaces in warnings but never blocks a gate
    Warning,
}

/// One atomic assertion made during a validation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationCheck {
    /// Stable check identifier (e.g., "actor_roles")
    pub id: String,
    /// Short display name
    pub name: String,
    /// What the check requires
    pub description: String,
    pub passed: bool,
    /// Human-readable outcome, with live counts where useful
    pub message: String,
    pub severity: CheckSeverity,
}

// ============================================================================
// Hard Gates
// ============================================================================

/// The ten mandatory PRD-completeness gates.
///
/// A closed enum rather than free-form strings so adding a gate forces every
/// match site to be revisited.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HardGate {
    SystemBoundaryDefined,
    PrimaryActorsDefined,
    RolesPermissionsDefined,
    ExternalEntitiesDefined,
    UseCaseCount,
    UseCaseTriggerOutcome,
    SuccessCriteriaMeasurable,
    ConstraintsPresent,
    CoreDataObjectsDefined,
    SourceReferencePresent,
}

impl HardGate {
    /// All gates, in evaluation/report order
    pub const ALL: [HardGate; 10] = [
        HardGate::SystemBoundaryDefined,
        HardGate::PrimaryActorsDefined,
        HardGate::RolesPermissionsDefined,
        HardGate::ExternalEntitiesDefined,
        HardGate::UseCaseCount,
        HardGate::UseCaseTriggerOutcome,
        HardGate::SuccessCriteriaMeasurable,
        HardGate::ConstraintsPresent,
        HardGate::CoreDataObjectsDefined,
        HardGate::SourceReferencePresent,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            HardGate::SystemBoundaryDefined => "System Boundary Defined",
            HardGate::PrimaryActorsDefined => "Primary Actors Defined",
            HardGate::RolesPermissionsDefined => "Roles & Permissions Defined",
            HardGate::ExternalEntitiesDefined => "External Entities Defined",
            HardGate::UseCaseCount => "Use Case List Complete",
            HardGate::UseCaseTriggerOutcome => "Use Case Trigger & Outcome",
            HardGate::SuccessCriteriaMeasurable => "Success Criteria Measurable",
            HardGate::ConstraintsPresent => "Constraints Present",
            HardGate::CoreDataObjectsDefined => "Core Data Objects Defined",
            HardGate::SourceReferencePresent => "Source Reference Present",
        }
    }

    /// The gate's requirement, used verbatim in error/warning messages
    pub fn requirement(&self) -> &'static str {
        match self {
            HardGate::SystemBoundaryDefined => {
                "Internal, external, and in-scope system boundaries must be defined"
            }
            HardGate::PrimaryActorsDefined => "At least two primary actors must be defined",
            HardGate::RolesPermissionsDefined => "Every actor must have a role assigned",
            HardGate::ExternalEntitiesDefined => "At least one external entity must be defined",
            HardGate::UseCaseCount => "Use case list must contain between 5 and 15 use cases",
            HardGate::UseCaseTriggerOutcome => "Every use case must have a trigger and an outcome",
            HardGate::SuccessCriteriaMeasurable => {
                "Vision should include measurable success criteria"
            }
            HardGate::ConstraintsPresent => "Vision should state constraints or limitations",
            HardGate::CoreDataObjectsDefined => {
                "At least one core data object with relationships must be defined"
            }
            HardGate::SourceReferencePresent => {
                "A source reference (artifact or completeness signal) should be present"
            }
        }
    }

    /// Advisory gates report `passed=true` regardless of their sub-check
    /// outcome; they surface only as warnings.
    pub fn is_advisory(&self) -> bool {
        matches!(
            self,
            HardGate::SuccessCriteriaMeasurable
                | HardGate::ConstraintsPresent
                | HardGate::SourceReferencePresent
        )
    }
}

/// Result of evaluating one hard gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardGateResult {
    pub gate: HardGate,
    /// Logical AND of the gate's authoritative sub-checks. Advisory gates
    /// always report true here.
    pub passed: bool,
    pub checks: Vec<ValidationCheck>,
}

// ============================================================================
// Artifacts
// ============================================================================

/// The diagram artifacts a complete PRD must carry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequiredArtifact {
    ContextDiagram,
    UseCaseDiagram,
}

impl RequiredArtifact {
    pub const ALL: [RequiredArtifact; 2] =
        [RequiredArtifact::ContextDiagram, RequiredArtifact::UseCaseDiagram];

    /// Canonical type tag matched against `Artifact.artifact_type`
    pub fn tag(&self) -> &'static str {
        match self {
            RequiredArtifact::ContextDiagram => "context_diagram",
            RequiredArtifact::UseCaseDiagram => "use_case_diagram",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RequiredArtifact::ContextDiagram => "context diagram",
            RequiredArtifact::UseCaseDiagram => "use case diagram",
        }
    }

    /// Tag match tolerant of case and `-`/space separators, since upstream
    /// extraction is not consistent about them.
    pub fn matches(&self, artifact_type: &str) -> bool {
        let normalized: String = artifact_type
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect();
        normalized == self.tag()
    }
}

/// Presence-check result for one required artifact type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactValidationResult {
    pub artifact_type: RequiredArtifact,
    pub present: bool,
    /// Mirrors `present` - this is a presence check only
    pub passed: bool,
    pub checks: Vec<ValidationCheck>,
}

// ============================================================================
// Validation Result
// ============================================================================

/// The complete outcome of one validation run - the engine's only output.
///
/// Serialized field names are camelCase to match what presentation-layer
/// consumers of the report expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub project_id: String,
    /// Rounded percentage of passing hard-gate sub-checks (0-100)
    pub overall_score: u8,
    pub passed: bool,
    pub threshold: f32,
    /// Hard-gate sub-checks only; artifact and consistency checks are
    /// reported separately and excluded from the score denominator
    pub total_checks: usize,
    pub passed_checks: usize,
    pub failed_checks: usize,
    pub hard_gates: Vec<HardGateResult>,
    /// Empty when the snapshot carries no artifacts at all
    pub artifacts: Vec<ArtifactValidationResult>,
    pub consistency_checks: Vec<ValidationCheck>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub validated_at: DateTime<Utc>,
}

impl ValidationResult {
    /// Look up a single gate's result
    pub fn gate(&self, gate: HardGate) -> Option<&HardGateResult> {
        self.hard_gates.iter().find(|g| g.gate == gate)
    }
}
