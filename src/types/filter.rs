use std::fmt;

/// Literal prefix stripped from exclusion expressions. The trigger check is
/// case-insensitive but the strip is not.
const EXCLUDING_PREFIX: &str = "All Excluding ";

/// A rule-side filter-expression, classified once from its raw text.
///
/// All stored strings are already case-folded, so matching only folds the
/// selected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterExpr {
    /// `All` in any case. Matches every value, including the empty string.
    All,
    /// `All Excluding X`. Matches everything except the single excluded term.
    AllExcluding(String),
    /// Comma-separated list. Matches any member after trimming each token.
    AnyOf(Vec<String>),
    /// Anything else, compared for equality. The empty expression only
    /// matches the empty value.
    Exact(String),
}

impl FilterExpr {
    /// Classify a raw filter-expression. First applicable form wins:
    /// wildcard, exclusion, list, exact.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let folded = raw.to_lowercase();

        if folded == "all" {
            return FilterExpr::All;
        }

        if folded.contains("all excluding") {
            let excluded = raw.replacen(EXCLUDING_PREFIX, "", 1).to_lowercase();
            return FilterExpr::AllExcluding(excluded);
        }

        if raw.contains(',') {
            let values = raw.split(',').map(|v| v.trim().to_lowercase()).collect();
            return FilterExpr::AnyOf(values);
        }

        FilterExpr::Exact(folded)
    }

    /// Decide whether a concrete selected value passes this filter.
    #[must_use]
    pub fn matches(&self, selected: &str) -> bool {
        match self {
            FilterExpr::All => true,
            FilterExpr::AllExcluding(excluded) => selected.to_lowercase() != *excluded,
            FilterExpr::AnyOf(values) => {
                let selected = selected.to_lowercase();
                values.iter().any(|v| *v == selected)
            }
            FilterExpr::Exact(expected) => selected.to_lowercase() == *expected,
        }
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, FilterExpr::All)
    }
}

/// Match a raw rule-side expression against one selected value.
///
/// Equivalent to `FilterExpr::parse(rule_expression).matches(selected_value)`.
///
/// ```
/// use campaign_rules::matches;
///
/// assert!(matches("All", "anything"));
/// assert!(!matches("All Excluding Auto", "AUTO"));
/// assert!(matches("Revcontent, Applovin, Google", "applovin"));
/// assert!(matches("English", "english"));
/// ```
#[must_use]
pub fn matches(rule_expression: &str, selected_value: &str) -> bool {
    FilterExpr::parse(rule_expression).matches(selected_value)
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpr::All => write!(f, "*"),
            FilterExpr::AllExcluding(excluded) => write!(f, "!{excluded:?}"),
            FilterExpr::AnyOf(values) => write!(f, "any({})", values.join(" | ")),
            FilterExpr::Exact(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<&str> for FilterExpr {
    fn from(raw: &str) -> Self {
        FilterExpr::parse(raw)
    }
}
