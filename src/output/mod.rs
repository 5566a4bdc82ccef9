pub mod files;

pub use files::*;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::ValidationResult;

/// Trait for writing validation reports
#[async_trait]
pub trait ReportWriter: Send + Sync {
    /// Write the machine-readable report
    async fn write_report(&self, result: &ValidationResult) -> Result<()>;

    /// Write the human-readable summary
    async fn write_summary(&self, result: &ValidationResult) -> Result<()>;
}
