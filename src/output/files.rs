use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use crate::config::ReportConfig;
use crate::models::ValidationResult;

use super::ReportWriter;

/// File-based report writer producing a JSON report and a markdown summary
pub struct FileReportWriter {
    config: ReportConfig,
}

impl FileReportWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    async fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.config.output_dir)
            .await
            .context("Failed to create report output directory")
    }

    fn result_to_markdown(&self, result: &ValidationResult) -> String {
        let mut md = String::new();

        md.push_str(&format!("# Validation Report: {}\n\n", result.project_id));
        md.push_str(&format!(
            "**Status:** {}\n",
            if result.passed { "PASSED" } else { "FAILED" }
        ));
        md.push_str(&format!(
            "**Score:** {}/100 (threshold {:.0}%)\n",
            result.overall_score,
            result.threshold * 100.0
        ));
        md.push_str(&format!(
            "**Checks:** {} passed, {} failed of {}\n\n",
            result.passed_checks, result.failed_checks, result.total_checks
        ));

        md.push_str("## Hard Gates\n\n");
        for gate in &result.hard_gates {
            md.push_str(&format!(
                "### {} — {}\n\n",
                gate.gate.display_name(),
                if gate.passed { "passed" } else { "failed" }
            ));
            for check in &gate.checks {
                md.push_str(&format!(
                    "- [{}] {}: {}\n",
                    if check.passed { "x" } else { " " },
                    check.name,
                    check.message
                ));
            }
            md.push('\n');
        }

        if !result.artifacts.is_empty() {
            md.push_str("## Artifacts\n\n");
            for artifact in &result.artifacts {
                md.push_str(&format!(
                    "- [{}] {}\n",
                    if artifact.present { "x" } else { " " },
                    artifact.artifact_type.display_name()
                ));
            }
            md.push('\n');
        }

        md.push_str("## Consistency\n\n");
        for check in &result.consistency_checks {
            md.push_str(&format!(
                "- [{}] {}: {}\n",
                if check.passed { "x" } else { " " },
                check.name,
                check.message
            ));
        }
        md.push('\n');

        if !result.errors.is_empty() {
            md.push_str("## Errors\n\n");
            for error in &result.errors {
                md.push_str(&format!("- {}\n", error));
            }
            md.push('\n');
        }

        if !result.warnings.is_empty() {
            md.push_str("## Warnings\n\n");
            for warning in &result.warnings {
                md.push_str(&format!("- {}\n", warning));
            }
            md.push('\n');
        }

        md.push_str(&format!("_Validated at {}_\n", result.validated_at.to_rfc3339()));
        md
    }
}

#[async_trait]
impl ReportWriter for FileReportWriter {
    async fn write_report(&self, result: &ValidationResult) -> Result<()> {
        if !self.config.write_json {
            return Ok(());
        }
        self.ensure_output_dir().await?;

        let path = self.config.output_dir.join("validation-report.json");
        let json = serde_json::to_string_pretty(result)
            .context("Failed to serialize validation report")?;
        fs::write(&path, json)
            .await
            .context(format!("Failed to write report to {:?}", path))?;

        info!("Wrote validation report to {:?}", path);
        Ok(())
    }

    async fn write_summary(&self, result: &ValidationResult) -> Result<()> {
        if !self.config.write_markdown {
            return Ok(());
        }
        self.ensure_output_dir().await?;

        let path = self.config.output_dir.join("validation-report.md");
        let markdown = self.result_to_markdown(result);
        fs::write(&path, markdown)
            .await
            .context(format!("Failed to write summary to {:?}", path))?;

        info!("Wrote validation summary to {:?}", path);
        Ok(())
    }
}
