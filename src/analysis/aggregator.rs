//! Issue aggregation across the vault.
//!
//! Every eligible document is read, scanned and parsed in turn. A document
//! whose read or parse fails is logged and skipped; its neighbours are not
//! affected and the run carries on.

use super::parser::parse_issue_line;
use crate::config::VaultConfig;
use crate::error::VaultError;
use crate::models::IssueRecord;
use crate::scanner::marked_lines;
use crate::vault::{DocumentHandle, DocumentRepository};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

/// Records collected from the vault, in enumeration and line order.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// All records from documents that were processed successfully.
    pub records: Vec<IssueRecord>,
    /// Number of documents processed successfully.
    pub documents_scanned: usize,
    /// Paths of documents dropped because of an error.
    pub failed_documents: Vec<String>,
}

/// Collect issue records from every document except the output document.
///
/// Documents are processed strictly one after another. Listing failures
/// abort the aggregation; per-document failures do not.
pub async fn aggregate_issues<R>(
    repo: &R,
    settings: &VaultConfig,
    show_progress: bool,
) -> Result<Aggregation, VaultError>
where
    R: DocumentRepository + ?Sized,
{
    let output_name = DocumentHandle::from_path(settings.output_file.as_str()).name;
    let documents: Vec<DocumentHandle> = repo
        .list_documents()
        .await?
        .into_iter()
        .filter(|doc| doc.name != output_name)
        .collect();

    debug!("Aggregating issues from {} documents", documents.len());

    let progress = progress_bar(documents.len() as u64, show_progress);
    let mut aggregation = Aggregation::default();

    for document in &documents {
        progress.set_message(document.path.clone());

        match extract_issues_from_document(repo, document, settings).await {
            Ok(records) => {
                if !records.is_empty() {
                    debug!("{}: {} issues", document.path, records.len());
                }
                aggregation.records.extend(records);
                aggregation.documents_scanned += 1;
            }
            Err(e) => {
                warn!("Error processing document {}: {:#}", document.path, e);
                aggregation.failed_documents.push(document.path.clone());
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(aggregation)
}

/// Read one document and parse every marked line in it.
///
/// Any failure discards the whole document's records.
pub async fn extract_issues_from_document<R>(
    repo: &R,
    document: &DocumentHandle,
    settings: &VaultConfig,
) -> Result<Vec<IssueRecord>>
where
    R: DocumentRepository + ?Sized,
{
    let content = repo
        .read_content(document)
        .await
        .with_context(|| format!("Failed to read {}", document.path))?;

    marked_lines(&content, &settings.marker)
        .map(|line| {
            parse_issue_line(line, document, &settings.unsorted_file)
                .with_context(|| format!("Failed to parse line in {}", document.path))
        })
        .collect()
}

fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}
