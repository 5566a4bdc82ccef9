//! Core data object gate.
//!
//! - `core_data_objects_defined`: at least one data entity, and at least one
//!   entity with relationships modeled

use crate::models::{CheckSeverity, HardGate, ProjectValidationData, ValidationCheck};

use super::{ComplianceValidator, GateOutcome, gate_message};

impl ComplianceValidator {
    /// Core data objects gate. Both sub-checks are authoritative: a lone
    /// entity with no relationships is not a data model yet.
    pub fn check_data_objects(&self, data: &ProjectValidationData) -> GateOutcome {
        let entity_count = data.data_entities.len();
        let has_entities = entity_count > 0;
        let related_count = data
            .data_entities
            .iter()
            .filter(|e| e.relationships.iter().any(|r| !r.trim().is_empty()))
            .count();
        let has_relationships = related_count > 0;

        let checks = vec![
            ValidationCheck {
                id: "data_entities".to_string(),
                name: "Data entities".to_string(),
                description: "At least one core data object must be defined".to_string(),
                passed: has_entities,
                message: format!("Found {} data entit{}", entity_count, if entity_count == 1 { "y" } else { "ies" }),
                severity: CheckSeverity::Error,
            },
            ValidationCheck {
                id: "data_relationships".to_string(),
                name: "Data relationships".to_string(),
                description: "At least one data object must have relationships".to_string(),
                passed: has_relationships,
                message: if has_relationships {
                    format!("{} entit{} with relationships", related_count, if related_count == 1 { "y" } else { "ies" })
                } else {
                    "No entity relationships modeled".to_string()
                },
                severity: CheckSeverity::Error,
            },
        ];

        let passed = has_entities && has_relationships;
        let mut outcome = GateOutcome::new(HardGate::CoreDataObjectsDefined, passed, checks);
        if !passed {
            outcome.errors.push(gate_message(HardGate::CoreDataObjectsDefined));
        }
        outcome
    }
}
