//! Regeneration run orchestration.
//!
//! A run moves through `Clearing -> Aggregating -> Rendering -> Writing`
//! exactly once. The output document is emptied before aggregation
//! starts, so an interrupted run leaves it empty.

use crate::analysis::aggregate_issues;
use crate::config::VaultConfig;
use crate::models::RunSummary;
use crate::report::generate_markdown_table;
use crate::vault::DocumentRepository;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info};

/// Phase of a regeneration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Clearing,
    Aggregating,
    Rendering,
    Writing,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPhase::Idle => write!(f, "idle"),
            RunPhase::Clearing => write!(f, "clearing"),
            RunPhase::Aggregating => write!(f, "aggregating"),
            RunPhase::Rendering => write!(f, "rendering"),
            RunPhase::Writing => write!(f, "writing"),
        }
    }
}

fn enter(phase: RunPhase) {
    debug!("Run phase: {}", phase);
}

/// Regenerate the issues table in the output document.
///
/// Fails outright if the output document does not exist or cannot be
/// cleared or written. Unreadable source documents are skipped.
pub async fn run<R>(repo: &R, settings: &VaultConfig, show_progress: bool) -> Result<RunSummary>
where
    R: DocumentRepository + ?Sized,
{
    let started_at = Utc::now();
    let start_time = Instant::now();

    let output = repo
        .get_document(&settings.output_file)
        .await
        .with_context(|| format!("Output document not found: {}", settings.output_file))?;

    enter(RunPhase::Clearing);
    repo.overwrite_content(&output, "")
        .await
        .with_context(|| format!("Failed to clear {}", output.path))?;

    enter(RunPhase::Aggregating);
    let aggregation = aggregate_issues(repo, settings, show_progress)
        .await
        .context("Failed to list documents")?;

    enter(RunPhase::Rendering);
    let table = generate_markdown_table(&aggregation.records);

    enter(RunPhase::Writing);
    let mut content = repo
        .read_content(&output)
        .await
        .with_context(|| format!("Failed to read {}", output.path))?;
    content.push('\n');
    content.push_str(&table);
    repo.overwrite_content(&output, &content)
        .await
        .with_context(|| format!("Failed to write {}", output.path))?;

    enter(RunPhase::Idle);
    info!(
        "Wrote {} issues to {}",
        aggregation.records.len(),
        output.path
    );

    Ok(RunSummary {
        started_at,
        documents_scanned: aggregation.documents_scanned,
        documents_failed: aggregation.failed_documents.len(),
        issues_found: aggregation.records.len(),
        duration_seconds: start_time.elapsed().as_secs_f64(),
    })
}

/// Aggregate and render without touching the output document.
pub async fn preview<R>(repo: &R, settings: &VaultConfig, show_progress: bool) -> Result<String>
where
    R: DocumentRepository + ?Sized,
{
    let aggregation = aggregate_issues(repo, settings, show_progress)
        .await
        .context("Failed to list documents")?;
    Ok(generate_markdown_table(&aggregation.records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::memory::MemoryVault;

    const HEADER: &str = "| Subject | Issue | Difficulty | Tag |\n|------|-------|------------|-----|\n";

    fn sample_vault() -> MemoryVault {
        MemoryVault::new()
            .with_document("Open Issues.md", "| stale | table |\n")
            .with_document("Projects/Foo/Unsorted.md", "Fix crash on load|#q-bug5|")
            .with_document("My Notes.md", "intro\nRename module #q-ref1\nOdd one #q-x")
            .with_document("Broken.md", "never read #q-a2")
            .fail_reads_of("Broken.md")
    }

    #[tokio::test]
    async fn test_run_rewrites_output_document() {
        let vault = sample_vault();

        let summary = run(&vault, &VaultConfig::default(), false).await.unwrap();

        let expected = format!(
            "\n{}{}{}{}",
            HEADER,
            "| [My Notes](My%20Notes.md) | Rename module  | \
             <span style=\"color: rgb(204, 204, 0)\">Easy Peasy</span> | #q-ref1 |\n",
            "| [Foo](Projects/Foo/Unsorted.md) | Fix crash on load | \
             <span style=\"color: rgb(204, 41, 0)\">The Wizard Level</span> | #q-bug5 |\n",
            "| [My Notes](My%20Notes.md) | Odd one  | `UNKNOWN` | #q-x |\n",
        );
        assert_eq!(vault.content("Open Issues.md").unwrap(), expected);

        assert_eq!(summary.issues_found, 3);
        assert_eq!(summary.documents_scanned, 2);
        assert_eq!(summary.documents_failed, 1);
    }

    #[tokio::test]
    async fn test_run_twice_is_idempotent() {
        let vault = sample_vault();
        let settings = VaultConfig::default();

        run(&vault, &settings, false).await.unwrap();
        let first = vault.content("Open Issues.md").unwrap();
        run(&vault, &settings, false).await.unwrap();

        assert_eq!(vault.content("Open Issues.md").unwrap(), first);
    }

    #[tokio::test]
    async fn test_run_without_output_document_fails() {
        let vault = MemoryVault::new().with_document("note.md", "x #q-a1");

        let err = run(&vault, &VaultConfig::default(), false)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Output document not found"));
        assert_eq!(vault.content("note.md").unwrap(), "x #q-a1");
    }

    #[tokio::test]
    async fn test_run_with_no_issues_writes_header_only() {
        let vault = MemoryVault::new()
            .with_document("Open Issues.md", "")
            .with_document("note.md", "nothing to see");

        let summary = run(&vault, &VaultConfig::default(), false).await.unwrap();

        assert_eq!(summary.issues_found, 0);
        assert_eq!(
            vault.content("Open Issues.md").unwrap(),
            format!("\n{}", HEADER)
        );
    }

    #[tokio::test]
    async fn test_preview_leaves_output_untouched() {
        let vault = sample_vault();

        let table = preview(&vault, &VaultConfig::default(), false).await.unwrap();

        assert!(table.starts_with(HEADER));
        assert!(table.contains("#q-bug5"));
        assert_eq!(
            vault.content("Open Issues.md").unwrap(),
            "| stale | table |\n"
        );
    }
}
