use std::fmt;

use super::group::ResultGroup;
use super::record::{CompiledRule, RuleRecord};
use super::selection::Selection;

/// Builder for constructing a [`RuleSet`] by hand.
///
/// Records keep the order they are added in.
///
/// # Example
///
/// ```
/// use campaign_rules::{RuleSetBuilder, Selection};
///
/// let ruleset = RuleSetBuilder::new()
///     .rule(|r| {
///         r.vertical("All")
///             .funnel_type("Content")
///             .language("English")
///             .traffic_source("Google, Bing")
///             .description("Search content")
///             .desktop("D1", "Desktop search")
///             .mobile("M1", "Mobile search")
///     })
///     .compile();
///
/// let sel = Selection::new()
///     .vertical("Auto")
///     .funnel_type("Content")
///     .language("English")
///     .traffic_source("bing");
/// assert_eq!(ruleset.find_groups(&sel).len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    records: Vec<RuleRecord>,
}

/// Intermediate builder passed to the record definition closure.
/// Unset fields stay empty.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    record: RuleRecord,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a record field by field.
    #[must_use]
    pub fn rule(mut self, f: impl FnOnce(RecordBuilder) -> RecordBuilder) -> Self {
        let builder = f(RecordBuilder::default());
        self.records.push(builder.record);
        self
    }

    /// Append an already-built record.
    #[must_use]
    pub fn record(mut self, record: RuleRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Classify every record's filter-expressions into an immutable `RuleSet`.
    #[must_use]
    pub fn compile(self) -> RuleSet {
        crate::compile::compile(self.records)
    }
}

impl RecordBuilder {
    #[must_use]
    pub fn vertical(mut self, expr: impl Into<String>) -> Self {
        self.record.vertical = expr.into();
        self
    }

    #[must_use]
    pub fn funnel_type(mut self, expr: impl Into<String>) -> Self {
        self.record.funnel_type = expr.into();
        self
    }

    #[must_use]
    pub fn language(mut self, expr: impl Into<String>) -> Self {
        self.record.language = expr.into();
        self
    }

    #[must_use]
    pub fn traffic_source(mut self, expr: impl Into<String>) -> Self {
        self.record.traffic_source = expr.into();
        self
    }

    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.record.description = text.into();
        self
    }

    #[must_use]
    pub fn desktop(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.record.desktop_rule_id = id.into();
        self.record.desktop_rule_name = name.into();
        self
    }

    #[must_use]
    pub fn mobile(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.record.mobile_rule_id = id.into();
        self.record.mobile_rule_name = name.into();
        self
    }
}

/// A compiled, immutable rule dataset. Thread-safe and designed to live
/// behind `Arc`.
///
/// Records are held in source order; duplicates and overlapping
/// filter-expressions are kept, and every match is returned.
#[derive(Debug, Default)]
pub struct RuleSet {
    pub(crate) rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// A rule set with no records. Every query against it is empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile parsed records, keeping their order.
    #[must_use]
    pub fn from_records(records: Vec<RuleRecord>) -> Self {
        crate::compile::compile(records)
    }

    /// Parse header-row CSV text and compile it into a `RuleSet`.
    ///
    /// Row-level problems (short or long rows, a quote left open) are logged
    /// and tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`](crate::parse::ParseError) if the text cannot be
    /// read as a table at all.
    pub fn from_csv(input: &str) -> Result<Self, crate::parse::ParseError> {
        let parsed = crate::parse::parse(input)?;
        parsed.log_issues();
        Ok(crate::compile::compile(parsed.records))
    }

    /// Records that match the selection on all four dimensions, in source
    /// order. Yields nothing for an incomplete selection.
    pub fn matching<'a>(
        &'a self,
        selection: &'a Selection,
    ) -> impl Iterator<Item = &'a RuleRecord> {
        let values = selection.values();
        self.rules
            .iter()
            .filter(move |rule| values.is_some_and(|v| crate::evaluate::rule_matches(rule, v)))
            .map(|rule| &rule.record)
    }

    /// Run a query and project every surviving record into a [`ResultGroup`].
    #[must_use]
    pub fn find_groups(&self, selection: &Selection) -> Vec<ResultGroup> {
        match selection.values() {
            Some(values) => crate::evaluate::evaluate(&self.rules, values),
            None => Vec::new(),
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Record at a source position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RuleRecord> {
        self.rules.get(index).map(|r| &r.record)
    }

    /// All records in source order.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &RuleRecord> {
        self.rules.iter().map(|r| &r.record)
    }

    /// Number of records whose filter for every dimension is the wildcard.
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|r| r.filters.iter().all(super::filter::FilterExpr::is_wildcard))
            .count()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({} records)", self.rules.len())
    }
}
