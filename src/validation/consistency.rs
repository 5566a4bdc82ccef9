//! Cross-reference consistency checks.
//!
//! Independent of the hard gates and excluded from the score: they surface in
//! their own `consistency_checks` list on the report.

use std::collections::HashSet;

use crate::models::{CheckSeverity, ProjectValidationData, ValidationCheck};

use super::ComplianceValidator;

impl ComplianceValidator {
    /// Project name presence and actor/use-case alignment.
    pub fn check_consistency(&self, data: &ProjectValidationData) -> Vec<ValidationCheck> {
        let mut checks = Vec::with_capacity(2);

        let has_name = !data.name.trim().is_empty();
        checks.push(ValidationCheck {
            id: "project_name".to_string(),
            name: "Project name".to_string(),
            description: "Project must have a name".to_string(),
            passed: has_name,
            message: if has_name {
                format!("Project name is \"{}\"", data.name.trim())
            } else {
                "Project has no name".to_string()
            },
            severity: CheckSeverity::Warning,
        });

        let defined: HashSet<&str> = data.actors.iter().map(|a| a.name.as_str()).collect();
        let referenced: HashSet<&str> = data
            .use_cases
            .iter()
            .filter_map(|uc| uc.actor.as_deref())
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .collect();

        // Sorted for deterministic report output
        let mut orphaned: Vec<&str> =
            referenced.difference(&defined).copied().collect();
        orphaned.sort_unstable();

        let aligned = orphaned.is_empty();
        checks.push(ValidationCheck {
            id: "actor_use_case_alignment".to_string(),
            name: "Actor/use-case alignment".to_string(),
            description: "Every actor referenced by a use case must be defined".to_string(),
            passed: aligned,
            message: if aligned {
                "All referenced actors are defined".to_string()
            } else {
                format!(
                    "{} referenced actor(s) have no definition: {}",
                    orphaned.len(),
                    orphaned.join(", ")
                )
            },
            severity: CheckSeverity::Warning,
        });

        checks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Actor, UseCase};

    fn make_actor(name: &str) -> Actor {
        Actor {
            name: name.to_string(),
            role: Some("role".to_string()),
            description: None,
            permissions: Vec::new(),
        }
    }

    fn make_use_case(id: &str, actor: Option<&str>) -> UseCase {
        UseCase {
            id: id.to_string(),
            name: format!("Use case {}", id),
            description: None,
            actor: actor.map(|a| a.to_string()),
            trigger: None,
            outcome: None,
            preconditions: Vec::new(),
            postconditions: Vec::new(),
        }
    }

    #[test]
    fn test_aligned_references_pass() {
        let validator = ComplianceValidator::new();
        let data = ProjectValidationData {
            name: "Checkout".to_string(),
            actors: vec![make_actor("Shopper")],
            use_cases: vec![make_use_case("uc-1", Some("Shopper"))],
            ..Default::default()
        };

        let checks = validator.check_consistency(&data);
        assert_eq!(checks.len(), 2);
        assert!(checks.iter().all(|c| c.passed));
    }

    #[test]
    fn test_orphan_references_reported_with_count() {
        let validator = ComplianceValidator::new();
        let data = ProjectValidationData {
            name: "Checkout".to_string(),
            actors: vec![make_actor("Shopper")],
            use_cases: vec![
                make_use_case("uc-1", Some("Ghost")),
                make_use_case("uc-2", Some("Phantom")),
                make_use_case("uc-3", Some("Ghost")),
                make_use_case("uc-4", Some("Shopper")),
            ],
            ..Default::default()
        };

        let checks = validator.check_consistency(&data);
        let alignment = &checks[1];
        assert!(!alignment.passed);
        assert_eq!(alignment.severity, CheckSeverity::Warning);
        // Distinct orphan names, sorted
        assert_eq!(
            alignment.message,
            "2 referenced actor(s) have no definition: Ghost, Phantom"
        );
    }

    #[test]
    fn test_use_cases_without_actor_field_are_ignored() {
        let validator = ComplianceValidator::new();
        let data = ProjectValidationData {
            name: "Checkout".to_string(),
            use_cases: vec![make_use_case("uc-1", None), make_use_case("uc-2", Some("  "))],
            ..Default::default()
        };

        let checks = validator.check_consistency(&data);
        assert!(checks[1].passed);
    }

    #[test]
    fn test_missing_project_name_warns() {
        let validator = ComplianceValidator::new();
        let checks = validator.check_consistency(&ProjectValidationData::default());

        assert!(!checks[0].passed);
        assert_eq!(checks[0].severity, CheckSeverity::Warning);
    }
}
