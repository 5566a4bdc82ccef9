//! Advisory keyword gates over the vision text.
//!
//! These are best-effort regex heuristics, not NLP. They always report
//! `passed=true` at the gate level; a miss surfaces as a warning and a failed
//! sub-check (which still counts against the score denominator).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{CheckSeverity, HardGate, ProjectValidationData, ValidationCheck};

use super::{ComplianceValidator, GateOutcome, gate_message};

/// Keywords suggesting the vision states measurable success criteria
static MEASURABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(measure|metric|kpi|target|goal|success)\b")
        .expect("invalid MEASURABLE_PATTERN regex")
});

/// Keywords suggesting the vision states constraints or limitations
static CONSTRAINT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(constraint|limitation|requirement|must|cannot|restricted)\b")
        .expect("invalid CONSTRAINT_PATTERN regex")
});

impl ComplianceValidator {
    /// Success criteria gate (advisory)
    pub fn check_success_criteria(&self, data: &ProjectValidationData) -> GateOutcome {
        self.advisory_vision_gate(
            data,
            HardGate::SuccessCriteriaMeasurable,
            &MEASURABLE_PATTERN,
            "success_criteria_measurable",
            "Measurable success criteria",
        )
    }

    /// Constraints gate (advisory)
    pub fn check_constraints(&self, data: &ProjectValidationData) -> GateOutcome {
        self.advisory_vision_gate(
            data,
            HardGate::ConstraintsPresent,
            &CONSTRAINT_PATTERN,
            "constraints_present",
            "Constraints stated",
        )
    }

    /// Source reference gate (advisory): any generated artifact or a positive
    /// prior completeness score counts as evidence of grounding.
    pub fn check_source_reference(&self, data: &ProjectValidationData) -> GateOutcome {
        let found = !data.artifacts.is_empty() || data.completeness.unwrap_or(0.0) > 0.0;

        let check = ValidationCheck {
            id: "source_reference".to_string(),
            name: "Source reference".to_string(),
            description: HardGate::SourceReferencePresent.requirement().to_string(),
            passed: found,
            message: if found {
                "Source reference present".to_string()
            } else {
                "No artifacts or completeness signal found".to_string()
            },
            severity: CheckSeverity::Warning,
        };

        let mut outcome = GateOutcome::new(HardGate::SourceReferencePresent, true, vec![check]);
        if !found {
            outcome.warnings.push(gate_message(HardGate::SourceReferencePresent));
        }
        outcome
    }

    fn advisory_vision_gate(
        &self,
        data: &ProjectValidationData,
        gate: HardGate,
        pattern: &Regex,
        check_id: &str,
        check_name: &str,
    ) -> GateOutcome {
        let found = pattern.is_match(&data.vision);

        let check = ValidationCheck {
            id: check_id.to_string(),
            name: check_name.to_string(),
            description: gate.requirement().to_string(),
            passed: found,
            message: if found {
                "Vision text matches expected keywords".to_string()
            } else {
                "Vision text has no matching keywords".to_string()
            },
            severity: CheckSeverity::Warning,
        };

        // Advisory: the gate verdict is fixed, only the warning carries the signal
        let mut outcome = GateOutcome::new(gate, true, vec![check]);
        if !found {
            outcome.warnings.push(gate_message(gate));
        }
        outcome
    }
}
