//! System boundary gates.
//!
//! - `system_boundary_defined`: internal, external, and in-scope lists must
//!   each be non-empty
//! - `external_entities_defined`: at least one external entity

use crate::models::{CheckSeverity, HardGate, ProjectValidationData, ValidationCheck};

use super::{ComplianceValidator, GateOutcome, gate_message};

impl ComplianceValidator {
    /// System boundary gate: all three boundary facets must be populated for
    /// the gate to pass.
    pub fn check_system_boundary(&self, data: &ProjectValidationData) -> GateOutcome {
        let bounds = &data.system_boundaries;
        let facets: [(&str, &str, &Vec<String>); 3] = [
            ("boundary_internal", "Internal components", &bounds.internal),
            ("boundary_external", "External systems", &bounds.external),
            ("boundary_in_scope", "In-scope items", &bounds.in_scope),
        ];

        let checks: Vec<ValidationCheck> = facets
            .iter()
            .map(|(id, name, list)| ValidationCheck {
                id: (*id).to_string(),
                name: (*name).to_string(),
                description: format!("{} list must not be empty", name),
                passed: !list.is_empty(),
                message: if list.is_empty() {
                    format!("No {} defined", name.to_lowercase())
                } else {
                    format!("Found {} {}", list.len(), name.to_lowercase())
                },
                severity: CheckSeverity::Error,
            })
            .collect();

        let passed = checks.iter().all(|c| c.passed);
        let mut outcome = GateOutcome::new(HardGate::SystemBoundaryDefined, passed, checks);
        if !passed {
            outcome.errors.push(gate_message(HardGate::SystemBoundaryDefined));
        }
        outcome
    }

    /// External entities gate: the context diagram needs at least one
    /// external party to be meaningful.
    pub fn check_external_entities(&self, data: &ProjectValidationData) -> GateOutcome {
        let count = data.system_boundaries.external.len();
        let passed = count >= 1;

        let check = ValidationCheck {
            id: "external_entities".to_string(),
            name: "External entities".to_string(),
            description: HardGate::ExternalEntitiesDefined.requirement().to_string(),
            passed,
            message: format!("Found {} external entit{}", count, if count == 1 { "y" } else { "ies" }),
            severity: CheckSeverity::Error,
        };

        let mut outcome = GateOutcome::new(HardGate::ExternalEntitiesDefined, passed, vec![check]);
        if !passed {
            outcome.errors.push(gate_message(HardGate::ExternalEntitiesDefined));
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SystemBoundaries;

    fn snapshot_with_boundaries(
        internal: Vec<&str>,
        external: Vec<&str>,
        in_scope: Vec<&str>,
    ) -> ProjectValidationData {
        ProjectValidationData {
            system_boundaries: SystemBoundaries {
                internal: internal.iter().map(|s| s.to_string()).collect(),
                external: external.iter().map(|s| s.to_string()).collect(),
                in_scope: in_scope.iter().map(|s| s.to_string()).collect(),
                out_of_scope: Vec::new(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_boundary_all_facets_present() {
        let validator = ComplianceValidator::new();
        let data = snapshot_with_boundaries(vec!["api"], vec!["gateway"], vec!["checkout"]);

        let outcome = validator.check_system_boundary(&data);
        assert!(outcome.result.passed);
        assert_eq!(outcome.result.checks.len(), 3);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_boundary_each_facet_independently_required() {
        let validator = ComplianceValidator::new();
        let cases = [
            snapshot_with_boundaries(vec![], vec!["gateway"], vec!["checkout"]),
            snapshot_with_boundaries(vec!["api"], vec![], vec!["checkout"]),
            snapshot_with_boundaries(vec!["api"], vec!["gateway"], vec![]),
        ];

        for (i, data) in cases.iter().enumerate() {
            let outcome = validator.check_system_boundary(data);
            assert!(!outcome.result.passed, "empty facet {} should fail the gate", i);
            assert_eq!(outcome.result.checks.iter().filter(|c| !c.passed).count(), 1);
            assert_eq!(outcome.errors.len(), 1);
        }
    }

    #[test]
    fn test_boundary_gate_message_format() {
        let validator = ComplianceValidator::new();
        let outcome = validator.check_system_boundary(&ProjectValidationData::default());

        assert_eq!(
            outcome.errors[0],
            "System Boundary Defined: Internal, external, and in-scope system boundaries must be defined"
        );
    }

    #[test]
    fn test_external_entities_required() {
        let validator = ComplianceValidator::new();

        let missing = validator.check_external_entities(&ProjectValidationData::default());
        assert!(!missing.result.passed);
        assert_eq!(missing.errors.len(), 1);

        let present = validator
            .check_external_entities(&snapshot_with_boundaries(vec![], vec!["gateway"], vec![]));
        assert!(present.result.passed);
        assert!(present.errors.is_empty());
        assert!(present.result.checks[0].message.contains("1 external entity"));
    }
}
