//! Actor gates.
//!
//! - `primary_actors_defined`: at least two actors
//! - `roles_permissions_defined`: every actor carries a role; the permissions
//!   sub-check is advisory and never fails the gate

use crate::models::{CheckSeverity, HardGate, ProjectValidationData, ValidationCheck};

use super::{ComplianceValidator, GateOutcome, gate_message, has_text};

/// Minimum number of primary actors a PRD must identify
pub(crate) const MIN_ACTORS: usize = 2;

impl ComplianceValidator {
    /// Primary actors gate
    pub fn check_primary_actors(&self, data: &ProjectValidationData) -> GateOutcome {
        let count = data.actors.len();
        let passed = count >= MIN_ACTORS;

        let check = ValidationCheck {
            id: "actor_count".to_string(),
            name: "Primary actors".to_string(),
            description: HardGate::PrimaryActorsDefined.requirement().to_string(),
            passed,
            message: format!("Found {} actor(s)", count),
            severity: CheckSeverity::Error,
        };

        let mut outcome = GateOutcome::new(HardGate::PrimaryActorsDefined, passed, vec![check]);
        if !passed {
            outcome.errors.push(format!(
                "{} - currently have {} actor(s)",
                gate_message(HardGate::PrimaryActorsDefined),
                count
            ));
        }
        outcome
    }

    /// Roles and permissions gate.
    ///
    /// The gate verdict follows the role check alone. Zero actors fails it:
    /// there is nothing to assign roles to, so roles are not "all assigned".
    pub fn check_roles_permissions(&self, data: &ProjectValidationData) -> GateOutcome {
        let all_have_roles =
            !data.actors.is_empty() && data.actors.iter().all(|a| has_text(&a.role));
        let missing_roles = data.actors.iter().filter(|a| !has_text(&a.role)).count();

        let any_permissions = data
            .actors
            .iter()
            .any(|a| a.permissions.iter().any(|p| !p.trim().is_empty()));

        let role_check = ValidationCheck {
            id: "actor_roles".to_string(),
            name: "Actor roles".to_string(),
            description: HardGate::RolesPermissionsDefined.requirement().to_string(),
            passed: all_have_roles,
            message: if all_have_roles {
                format!("All {} actors have roles", data.actors.len())
            } else if data.actors.is_empty() {
                "No actors defined".to_string()
            } else {
                format!("{} actor(s) missing a role", missing_roles)
            },
            severity: CheckSeverity::Error,
        };

        let permissions_check = ValidationCheck {
            id: "actor_permissions".to_string(),
            name: "Actor permissions".to_string(),
            description: "At least one actor should have permissions listed".to_string(),
            passed: any_permissions,
            message: if any_permissions {
                "Permissions are captured".to_string()
            } else {
                "No actor has permissions listed".to_string()
            },
            severity: CheckSeverity::Warning,
        };

        let mut outcome = GateOutcome::new(
            HardGate::RolesPermissionsDefined,
            all_have_roles,
            vec![role_check, permissions_check],
        );
        if !all_have_roles {
            outcome.errors.push(gate_message(HardGate::RolesPermissionsDefined));
        }
        if !any_permissions {
            outcome.warnings.push(format!(
                "{}: At least one actor should have permissions listed",
                HardGate::RolesPermissionsDefined.display_name()
            ));
        }
        outcome
    }
}
