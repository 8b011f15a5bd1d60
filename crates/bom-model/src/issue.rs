//! Data-quality issues and the append-only ledger that collects them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of data-quality finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    /// A required input column is absent.
    MissingColumn,
    /// A row's description is empty.
    EmptyDescription,
    /// A row's value is not contained in its description.
    ValueNotInDescription,
    /// A row's category is empty.
    MissingCategory,
    /// A quantity could not be read as an integer.
    InvalidQty,
}

impl IssueKind {
    pub const ALL: [IssueKind; 5] = [
        IssueKind::MissingColumn,
        IssueKind::EmptyDescription,
        IssueKind::ValueNotInDescription,
        IssueKind::MissingCategory,
        IssueKind::InvalidQty,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::MissingColumn => "MissingColumn",
            IssueKind::EmptyDescription => "EmptyDescription",
            IssueKind::ValueNotInDescription => "ValueNotInDescription",
            IssueKind::MissingCategory => "MissingCategory",
            IssueKind::InvalidQty => "InvalidQty",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIssueKind(pub String);

impl fmt::Display for UnknownIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown issue kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownIssueKind {}

impl FromStr for IssueKind {
    type Err = UnknownIssueKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownIssueKind(s.to_string()))
    }
}

/// A single finding. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub reference: String,
    pub description: String,
    pub value: String,
    pub kind: IssueKind,
    pub detail: String,
}

impl Issue {
    /// An issue not tied to any row.
    pub fn new(kind: IssueKind, detail: impl Into<String>) -> Self {
        Self {
            reference: String::new(),
            description: String::new(),
            value: String::new(),
            kind,
            detail: detail.into(),
        }
    }

    /// Attach the row context (reference, description, value).
    #[must_use]
    pub fn with_row(
        mut self,
        reference: impl Into<String>,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.reference = reference.into();
        self.description = description.into();
        self.value = value.into();
        self
    }
}

/// Append-only, insertion-ordered collection of issues for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueLedger {
    issues: Vec<Issue>,
}

impl IssueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }

    /// Per-kind counts, most frequent first; ties by kind name.
    pub fn summary(&self) -> IssueSummary {
        let mut counts: BTreeMap<&'static str, (IssueKind, usize)> = BTreeMap::new();
        for issue in &self.issues {
            counts
                .entry(issue.kind.as_str())
                .or_insert((issue.kind, 0))
                .1 += 1;
        }
        let mut counts: Vec<(IssueKind, usize)> = counts.into_values().collect();
        // stable sort keeps the name order for equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        IssueSummary { counts }
    }
}

impl<'a> IntoIterator for &'a IssueLedger {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

/// Issue counts grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
    pub counts: Vec<(IssueKind, usize)>,
}

impl IssueSummary {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn count_for(&self, kind: IssueKind) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, count)| *count)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in IssueKind::ALL {
            assert_eq!(kind.as_str().parse::<IssueKind>(), Ok(kind));
        }
        assert!("Nope".parse::<IssueKind>().is_err());
    }

    #[test]
    fn summary_orders_by_count_then_name() {
        let mut ledger = IssueLedger::new();
        ledger.push(Issue::new(IssueKind::MissingCategory, "a"));
        ledger.push(Issue::new(IssueKind::InvalidQty, "b"));
        ledger.push(Issue::new(IssueKind::EmptyDescription, "c"));
        ledger.push(Issue::new(IssueKind::InvalidQty, "d"));

        let summary = ledger.summary();
        assert_eq!(
            summary.counts,
            vec![
                (IssueKind::InvalidQty, 2),
                (IssueKind::EmptyDescription, 1),
                (IssueKind::MissingCategory, 1),
            ]
        );
        assert_eq!(summary.total(), ledger.len());
        assert_eq!(summary.count_for(IssueKind::MissingColumn), 0);
    }

    #[test]
    fn ledger_keeps_insertion_order() {
        let mut ledger = IssueLedger::new();
        ledger.push(Issue::new(IssueKind::InvalidQty, "first").with_row("R1", "x", ""));
        ledger.push(Issue::new(IssueKind::MissingColumn, "second"));
        let details: Vec<&str> = ledger.iter().map(|i| i.detail.as_str()).collect();
        assert_eq!(details, vec!["first", "second"]);
        assert_eq!(ledger.issues()[0].reference, "R1");
    }
}
