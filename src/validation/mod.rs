//! Hard-gate compliance validation for PRD snapshots.
//!
//! Ten independent gates inspect one facet of the snapshot each, producing
//! pass/fail plus sub-checks with severity. Artifact presence and consistency
//! checks run alongside and are reported separately; only hard-gate sub-checks
//! feed the overall score.
//!
//! # Module Structure
//!
//! - `boundary`: system boundary and external entity gates
//! - `actors`: primary actor count and role/permission gates
//! - `use_cases`: use case count and trigger/outcome gates
//! - `entities`: core data object gate
//! - `heuristics`: advisory keyword gates over the vision text
//! - `artifacts`: required diagram presence checks
//! - `consistency`: project name and actor/use-case alignment checks

mod actors;
mod artifacts;
mod boundary;
mod consistency;
mod entities;
mod heuristics;
mod use_cases;

use chrono::Utc;
use tracing::debug;

use crate::models::{
    COMPLIANCE_THRESHOLD, HardGate, HardGateResult, ProjectValidationData, ValidationCheck,
    ValidationResult,
};

// ============================================================================
// Gate Outcome
// ============================================================================

/// Result of one gate plus the messages it contributes to the report-level
/// error/warning lists. Gates return their own message lists and the
/// aggregator merges them - no shared mutable accumulator.
#[derive(Debug, Clone)]
pub struct GateOutcome {
    pub result: HardGateResult,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl GateOutcome {
    pub(crate) fn new(gate: HardGate, passed: bool, checks: Vec<ValidationCheck>) -> Self {
        Self {
            result: HardGateResult { gate, passed, checks },
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Standard failure message format: "{display name}: {requirement}"
pub(crate) fn gate_message(gate: HardGate) -> String {
    format!("{}: {}", gate.display_name(), gate.requirement())
}

/// True when an optional text field carries non-whitespace content
pub(crate) fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

// ============================================================================
// Compliance Validator
// ============================================================================

/// Runs the full hard-gate rule set over project snapshots.
///
/// Pure and stateless: a validator can be shared freely and called
/// concurrently for different projects.
#[derive(Debug, Clone)]
pub struct ComplianceValidator {
    /// Minimum fraction of passing sub-checks for an overall pass
    pub threshold: f32,
}

impl Default for ComplianceValidator {
    fn default() -> Self {
        Self { threshold: COMPLIANCE_THRESHOLD }
    }
}

impl ComplianceValidator {
    /// Create a validator with the standard compliance threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Run all gates, artifact checks, and consistency checks over one
    /// snapshot and aggregate the result.
    pub fn validate(&self, data: &ProjectValidationData) -> ValidationResult {
        let outcomes = [
            self.check_system_boundary(data),
            self.check_primary_actors(data),
            self.check_roles_permissions(data),
            self.check_external_entities(data),
            self.check_use_case_count(data),
            self.check_trigger_outcome(data),
            self.check_success_criteria(data),
            self.check_constraints(data),
            self.check_data_objects(data),
            self.check_source_reference(data),
        ];

        let mut hard_gates = Vec::with_capacity(outcomes.len());
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        for outcome in outcomes {
            errors.extend(outcome.errors);
            warnings.extend(outcome.warnings);
            hard_gates.push(outcome.result);
        }

        // Artifact checks only apply once diagram generation has produced
        // something; consistency checks always run.
        let artifacts = if data.artifacts.is_empty() {
            Vec::new()
        } else {
            self.check_artifacts(data)
        };
        let consistency_checks = self.check_consistency(data);

        let total_checks: usize = hard_gates.iter().map(|g| g.checks.len()).sum();
        let passed_checks = hard_gates
            .iter()
            .flat_map(|g| g.checks.iter())
            .filter(|c| c.passed)
            .count();
        let failed_checks = total_checks - passed_checks;

        let overall_score = compute_score(passed_checks, total_checks);
        let passed = f32::from(overall_score) >= self.threshold * 100.0;

        debug!(
            project = %data.id,
            score = overall_score,
            passed,
            errors = errors.len(),
            warnings = warnings.len(),
            "validation complete"
        );

        ValidationResult {
            project_id: data.id.clone(),
            overall_score,
            passed,
            threshold: self.threshold,
            total_checks,
            passed_checks,
            failed_checks,
            hard_gates,
            artifacts,
            consistency_checks,
            errors,
            warnings,
            validated_at: Utc::now(),
        }
    }
}

/// Percentage of passing checks, rounded half away from zero. Zero when there
/// are no checks (cannot occur with the fixed gate set, but guarded).
pub(crate) fn compute_score(passed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (passed as f64 / total as f64 * 100.0).round() as u8
}

/// Validate a snapshot with the standard compliance threshold.
///
/// This is the engine's single external entry point.
pub fn validate_project(data: &ProjectValidationData) -> ValidationResult {
    ComplianceValidator::new().validate(data)
}
