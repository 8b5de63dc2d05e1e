use std::cmp::Ordering;
use std::fmt;

use crate::RuleRecord;

use super::grammar::{RawRecord, is_blank};

/// Source column headers, in [`RuleRecord`] field order. Matched literally:
/// the description header is spelled the way the dataset spells it.
pub const COLUMNS: [&str; 9] = [
    "Vertical",
    "Funnel Type",
    "Language",
    "Filter 4:",
    "Desktop Rule ID",
    "Desktop Rule Name",
    "Mobile Rule ID",
    "Mobile Rule Name",
    "Decription",
];

/// What is wrong with a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Fewer fields than the header. The missing cells load as empty.
    TooFewFields { expected: usize, found: usize },
    /// More fields than the header. The extra cells are ignored.
    TooManyFields { expected: usize, found: usize },
    /// A quoted field was never closed and holds the rest of the input.
    UnterminatedQuote,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::TooFewFields { expected, found } => {
                write!(f, "too few fields (expected {expected}, found {found})")
            }
            IssueKind::TooManyFields { expected, found } => {
                write!(f, "too many fields (expected {expected}, found {found})")
            }
            IssueKind::UnterminatedQuote => f.write_str("unterminated quoted field"),
        }
    }
}

/// A row that was loaded despite a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    /// 1-based data row number, not counting blank lines. `0` is the header.
    pub row: usize,
    pub kind: IssueKind,
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row == 0 {
            write!(f, "header: {}", self.kind)
        } else {
            write!(f, "row {}: {}", self.row, self.kind)
        }
    }
}

/// The result of parsing rule table text.
#[derive(Debug, Default)]
pub struct ParsedRules {
    pub records: Vec<RuleRecord>,
    pub issues: Vec<RowIssue>,
    /// Known columns absent from the header. Their fields load as empty.
    pub missing_columns: Vec<&'static str>,
}

impl ParsedRules {
    /// Emit one warning per row issue and one for absent columns.
    pub fn log_issues(&self) {
        if !self.missing_columns.is_empty() {
            tracing::warn!(columns = ?self.missing_columns, "rule table is missing columns");
        }
        for issue in &self.issues {
            tracing::warn!(row = issue.row, problem = %issue.kind, "malformed rule table row");
        }
    }
}

/// Map raw records to [`RuleRecord`]s using the first non-blank record as
/// the header.
pub(super) fn build(raw: Vec<RawRecord>) -> ParsedRules {
    let mut rows = raw.into_iter().filter(|r| !is_blank(r));

    let Some(header) = rows.next() else {
        return ParsedRules::default();
    };

    let positions: [Option<usize>; 9] =
        COLUMNS.map(|name| header.fields.iter().position(|h| h == name));
    let missing_columns = COLUMNS
        .iter()
        .zip(&positions)
        .filter(|(_, pos)| pos.is_none())
        .map(|(name, _)| *name)
        .collect();

    let mut parsed = ParsedRules {
        missing_columns,
        ..ParsedRules::default()
    };
    if header.unterminated {
        parsed.issues.push(RowIssue {
            row: 0,
            kind: IssueKind::UnterminatedQuote,
        });
    }

    let expected = header.fields.len();
    for (i, row) in rows.enumerate() {
        let row_number = i + 1;
        let found = row.fields.len();
        if row.unterminated {
            parsed.issues.push(RowIssue {
                row: row_number,
                kind: IssueKind::UnterminatedQuote,
            });
        }
        let width = match found.cmp(&expected) {
            Ordering::Less => Some(IssueKind::TooFewFields { expected, found }),
            Ordering::Greater => Some(IssueKind::TooManyFields { expected, found }),
            Ordering::Equal => None,
        };
        if let Some(kind) = width {
            parsed.issues.push(RowIssue { row: row_number, kind });
        }
        parsed.records.push(record_from_row(&positions, row.fields));
    }

    parsed
}

fn record_from_row(positions: &[Option<usize>; 9], mut row: Vec<String>) -> RuleRecord {
    let mut cell = |column: usize| -> String {
        positions[column]
            .and_then(|p| row.get_mut(p))
            .map(std::mem::take)
            .unwrap_or_default()
    };

    RuleRecord {
        vertical: cell(0),
        funnel_type: cell(1),
        language: cell(2),
        traffic_source: cell(3),
        desktop_rule_id: cell(4),
        desktop_rule_name: cell(5),
        mobile_rule_id: cell(6),
        mobile_rule_name: cell(7),
        description: cell(8),
    }
}
