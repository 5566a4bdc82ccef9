//! Use case gates.
//!
//! - `use_case_count`: 5 to 15 use cases inclusive
//! - `use_case_trigger_outcome`: every use case names its trigger and outcome

use crate::models::{CheckSeverity, HardGate, ProjectValidationData, ValidationCheck};

use super::{ComplianceValidator, GateOutcome, gate_message, has_text};

/// Inclusive bounds on the use case list size
pub(crate) const USE_CASE_MIN: usize = 5;
pub(crate) const USE_CASE_MAX: usize = 15;

impl ComplianceValidator {
    /// Use case count gate
    pub fn check_use_case_count(&self, data: &ProjectValidationData) -> GateOutcome {
        let count = data.use_cases.len();
        let passed = (USE_CASE_MIN..=USE_CASE_MAX).contains(&count);

        let check = ValidationCheck {
            id: "use_case_count".to_string(),
            name: "Use case count".to_string(),
            description: HardGate::UseCaseCount.requirement().to_string(),
            passed,
            message: format!("Found {} use case(s)", count),
            severity: CheckSeverity::Error,
        };

        let mut outcome = GateOutcome::new(HardGate::UseCaseCount, passed, vec![check]);
        if !passed {
            outcome.errors.push(format!(
                "{} - currently have {} use case(s)",
                gate_message(HardGate::UseCaseCount),
                count
            ));
        }
        outcome
    }

    /// Trigger and outcome gate. Both sub-checks are authoritative, and an
    /// empty use case list fails both - there is nothing specified yet.
    pub fn check_trigger_outcome(&self, data: &ProjectValidationData) -> GateOutcome {
        let have_any = !data.use_cases.is_empty();
        let all_triggers = have_any && data.use_cases.iter().all(|uc| has_text(&uc.trigger));
        let all_outcomes = have_any && data.use_cases.iter().all(|uc| has_text(&uc.outcome));

        let missing_triggers = data.use_cases.iter().filter(|uc| !has_text(&uc.trigger)).count();
        let missing_outcomes = data.use_cases.iter().filter(|uc| !has_text(&uc.outcome)).count();

        let checks = vec![
            ValidationCheck {
                id: "use_case_triggers".to_string(),
                name: "Use case triggers".to_string(),
                description: "Every use case must have a trigger".to_string(),
                passed: all_triggers,
                message: if all_triggers {
                    "All use cases have triggers".to_string()
                } else if !have_any {
                    "No use cases defined".to_string()
                } else {
                    format!("{} use case(s) missing a trigger", missing_triggers)
                },
                severity: CheckSeverity::Error,
            },
            ValidationCheck {
                id: "use_case_outcomes".to_string(),
                name: "Use case outcomes".to_string(),
                description: "Every use case must have an outcome".to_string(),
                passed: all_outcomes,
                message: if all_outcomes {
                    "All use cases have outcomes".to_string()
                } else if !have_any {
                    "No use cases defined".to_string()
                } else {
                    format!("{} use case(s) missing an outcome", missing_outcomes)
                },
                severity: CheckSeverity::Error,
            },
        ];

        let passed = all_triggers && all_outcomes;
        let mut outcome = GateOutcome::new(HardGate::UseCaseTriggerOutcome, passed, checks);
        if !passed {
            outcome.errors.push(gate_message(HardGate::UseCaseTriggerOutcome));
        }
        outcome
    }
}
