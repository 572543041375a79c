//! Issue line parsing.
//!
//! Turns one marked line into an [`IssueRecord`]. The parser is tolerant:
//! it only requires a `#` somewhere in the line and never validates the
//! label beyond reading its final character as the difficulty digit.

use crate::error::ParseError;
use crate::models::IssueRecord;
use crate::vault::DocumentHandle;

/// Parse a marked line belonging to `document`.
///
/// `unsorted_name` is the file name of the unsorted bucket document, whose
/// issues take their subject from the parent folder instead of the file.
pub fn parse_issue_line(
    line: &str,
    document: &DocumentHandle,
    unsorted_name: &str,
) -> Result<IssueRecord, ParseError> {
    // The tag runs from the first '#' up to the next one; later tags are ignored
    let mut parts = line.split('#');
    let issue_text = parts.next().unwrap_or_default();
    let tag_portion = parts
        .next()
        .ok_or_else(|| ParseError::MissingTag(line.to_string()))?;

    let issue = strip_pipes(issue_text);
    let unpiped_tag = strip_pipes(tag_portion);
    let tag_label = unpiped_tag.trim();

    Ok(IssueRecord {
        path: encode_path(&document.path),
        subject: subject_for(document, unsorted_name),
        issue,
        tag: format!("#{}", tag_label),
        difficulty: difficulty_digit(&unpiped_tag, tag_label),
    })
}

/// Reads the difficulty at the trimmed label's last index, counted in the
/// untrimmed string. Leading whitespace in the tag shifts the position.
fn difficulty_digit(unpiped_tag: &str, tag_label: &str) -> Option<u32> {
    let last = tag_label.chars().count().checked_sub(1)?;
    unpiped_tag.chars().nth(last)?.to_digit(10)
}

fn strip_pipes(text: &str) -> String {
    text.replace('|', "")
}

fn encode_path(path: &str) -> String {
    path.replace(' ', "%20")
}

fn subject_for(document: &DocumentHandle, unsorted_name: &str) -> String {
    if document.name != unsorted_name {
        return document.basename.clone();
    }

    document
        .path
        .rsplit('/')
        .nth(1)
        .map(String::from)
        .unwrap_or_else(|| document.basename.clone())
}
