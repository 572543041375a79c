//! Data models for the issue collector.
//!
//! This module contains the core data structures that flow through
//! a regeneration run: parsed issue records, difficulty badges and
//! the run summary.

use chrono::{DateTime, Utc};
use std::fmt;

/// A single issue annotation parsed from one line of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    /// Document path with spaces encoded as `%20`, used as link target.
    pub path: String,
    /// Display label of the owning context (base name or parent folder).
    pub subject: String,
    /// Free-text description with pipe characters removed.
    pub issue: String,
    /// Marker label, always starting with `#`.
    pub tag: String,
    /// Difficulty digit, `None` when the label does not end in a digit.
    pub difficulty: Option<u32>,
}

impl IssueRecord {
    /// Returns the badge for this record's difficulty.
    pub fn badge(&self) -> Badge {
        Badge::from_difficulty(self.difficulty)
    }
}

/// Human-readable replacement for a numeric difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    /// Difficulty 1
    EasyPeasy,
    /// Difficulty 2
    Conceptual,
    /// Difficulty 3
    Intermediate,
    /// Difficulty 4
    DeepDive,
    /// Difficulty 5
    WizardLevel,
    /// Anything else, including a missing difficulty
    Unknown,
}

impl Badge {
    /// Map a difficulty to its badge.
    pub fn from_difficulty(difficulty: Option<u32>) -> Self {
        match difficulty {
            Some(1) => Badge::EasyPeasy,
            Some(2) => Badge::Conceptual,
            Some(3) => Badge::Intermediate,
            Some(4) => Badge::DeepDive,
            Some(5) => Badge::WizardLevel,
            _ => Badge::Unknown,
        }
    }

    /// Returns the badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Badge::EasyPeasy => "Easy Peasy",
            Badge::Conceptual => "Conceptual",
            Badge::Intermediate => "Intermediate",
            Badge::DeepDive => "Deep Dive",
            Badge::WizardLevel => "The Wizard Level",
            Badge::Unknown => "UNKNOWN",
        }
    }

    /// Returns the CSS color of the badge, if it has one.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Badge::EasyPeasy => Some("rgb(204, 204, 0)"),
            Badge::Conceptual | Badge::DeepDive => Some("rgb(230, 138, 0)"),
            Badge::Intermediate => Some("rgb(0, 153, 51)"),
            Badge::WizardLevel => Some("rgb(204, 41, 0)"),
            Badge::Unknown => None,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color() {
            Some(color) => write!(
                f,
                "<span style=\"color: {}\">{}</span>",
                color,
                self.label()
            ),
            None => write!(f, "`{}`", self.label()),
        }
    }
}

/// Outcome of a single regeneration run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Number of documents that were scanned successfully.
    pub documents_scanned: usize,
    /// Number of documents dropped because of a read or parse failure.
    pub documents_failed: usize,
    /// Number of issues written to the table.
    pub issues_found: usize,
    /// Duration of the run in seconds.
    pub duration_seconds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_mapping() {
        assert_eq!(Badge::from_difficulty(Some(1)), Badge::EasyPeasy);
        assert_eq!(Badge::from_difficulty(Some(2)), Badge::Conceptual);
        assert_eq!(Badge::from_difficulty(Some(3)), Badge::Intermediate);
        assert_eq!(Badge::from_difficulty(Some(4)), Badge::DeepDive);
        assert_eq!(Badge::from_difficulty(Some(5)), Badge::WizardLevel);
        assert_eq!(Badge::from_difficulty(Some(0)), Badge::Unknown);
        assert_eq!(Badge::from_difficulty(Some(7)), Badge::Unknown);
        assert_eq!(Badge::from_difficulty(None), Badge::Unknown);
    }

    #[test]
    fn test_badge_display() {
        assert_eq!(
            Badge::WizardLevel.to_string(),
            "<span style=\"color: rgb(204, 41, 0)\">The Wizard Level</span>"
        );
        assert_eq!(Badge::Unknown.to_string(), "`UNKNOWN`");
    }

    #[test]
    fn test_conceptual_and_deep_dive_share_color() {
        assert_eq!(Badge::Conceptual.color(), Badge::DeepDive.color());
        assert_ne!(Badge::EasyPeasy.color(), Badge::WizardLevel.color());
    }
}
