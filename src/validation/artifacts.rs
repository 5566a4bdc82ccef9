//! Required diagram presence checks.
//!
//! Presence only - diagram syntax and content belong to the generator. The
//! aggregator invokes this only when the snapshot carries artifacts at all;
//! a project that has not reached diagram generation yet gets no artifact
//! results rather than two failing ones.

use crate::models::{
    ArtifactValidationResult, CheckSeverity, ProjectValidationData, RequiredArtifact,
    ValidationCheck,
};

use super::ComplianceValidator;

impl ComplianceValidator {
    /// Report presence of each required artifact type. Always returns one
    /// entry per required type, in `RequiredArtifact::ALL` order.
    pub fn check_artifacts(&self, data: &ProjectValidationData) -> Vec<ArtifactValidationResult> {
        RequiredArtifact::ALL
            .iter()
            .map(|required| {
                let present = data
                    .artifacts
                    .iter()
                    .any(|a| required.matches(&a.artifact_type));

                let checks = if present {
                    Vec::new()
                } else {
                    vec![ValidationCheck {
                        id: format!("artifact_{}", required.tag()),
                        name: format!("{} present", required.display_name()),
                        description: format!(
                            "A {} artifact should be generated",
                            required.display_name()
                        ),
                        passed: false,
                        message: format!("No {} artifact found", required.display_name()),
                        severity: CheckSeverity::Warning,
                    }]
                };

                ArtifactValidationResult {
                    artifact_type: *required,
                    present,
                    passed: present,
                    checks,
                }
            })
            .collect()
    }
}
