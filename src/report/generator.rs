//! Markdown table generation.
//!
//! Rendering is pure: the same records always produce the same text.

use crate::models::IssueRecord;
use std::cmp::Ordering;

/// Sort records by ascending difficulty.
///
/// The sort is stable. Records without a numeric difficulty go last.
pub fn sort_by_difficulty(records: &mut [IssueRecord]) {
    records.sort_by(|a, b| compare_difficulty(a.difficulty, b.difficulty));
}

fn compare_difficulty(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Generate the issues table, sorted by difficulty.
pub fn generate_markdown_table(records: &[IssueRecord]) -> String {
    let mut sorted = records.to_vec();
    sort_by_difficulty(&mut sorted);

    let mut table = String::new();
    table.push_str("| Subject | Issue | Difficulty | Tag |\n");
    table.push_str("|------|-------|------------|-----|\n");

    for record in &sorted {
        table.push_str(&generate_row(record));
    }

    table
}

/// Generate a single table row.
fn generate_row(record: &IssueRecord) -> String {
    format!(
        "| [{}]({}) | {} | {} | {} |\n",
        record.subject,
        record.path,
        record.issue,
        record.badge(),
        record.tag
    )
}
