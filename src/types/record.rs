use std::fmt;

use super::filter::FilterExpr;

/// One of the four independent filter axes, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Dimension {
    Vertical,
    FunnelType,
    Language,
    TrafficSource,
}

impl Dimension {
    /// All dimensions in the order the wizard collects them.
    pub const ALL: [Dimension; 4] = [
        Dimension::Vertical,
        Dimension::FunnelType,
        Dimension::Language,
        Dimension::TrafficSource,
    ];

    /// Header of the source column holding this dimension's filter-expression.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Dimension::Vertical => "Vertical",
            Dimension::FunnelType => "Funnel Type",
            Dimension::Language => "Language",
            Dimension::TrafficSource => "Filter 4:",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Vertical => "Vertical",
            Dimension::FunnelType => "Funnel Type",
            Dimension::Language => "Language",
            Dimension::TrafficSource => "Traffic Source",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Dimension::Vertical => 0,
            Dimension::FunnelType => 1,
            Dimension::Language => 2,
            Dimension::TrafficSource => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the rule dataset.
///
/// The four dimension fields hold raw filter-expressions, not plain values.
/// Every field is a string; cells missing from the source are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RuleRecord {
    pub vertical: String,
    pub funnel_type: String,
    pub language: String,
    pub traffic_source: String,
    pub desktop_rule_id: String,
    pub desktop_rule_name: String,
    pub mobile_rule_id: String,
    pub mobile_rule_name: String,
    pub description: String,
}

impl RuleRecord {
    /// The raw filter-expression stored for a dimension.
    #[must_use]
    pub fn filter(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Vertical => &self.vertical,
            Dimension::FunnelType => &self.funnel_type,
            Dimension::Language => &self.language,
            Dimension::TrafficSource => &self.traffic_source,
        }
    }
}

/// A record whose four filter-expressions have been classified for matching.
///
/// Produced by the compilation step and stored inside a
/// [`RuleSet`](super::RuleSet). `index` is the record's position in the
/// source, which is also its position in the rule set.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    pub(crate) record: RuleRecord,
    pub(crate) filters: [FilterExpr; 4],
    pub(crate) index: usize,
}

impl CompiledRule {
    pub(crate) fn filter(&self, dimension: Dimension) -> &FilterExpr {
        &self.filters[dimension.index()]
    }
}
