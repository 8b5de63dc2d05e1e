use super::record::Dimension;

/// The user's choices, one concrete value per dimension.
///
/// Values are plain strings, never filter-expressions. A dimension left
/// unset, or set to the empty string, counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Selection {
    pub vertical: Option<String>,
    pub funnel_type: Option<String>,
    pub language: Option<String>,
    pub traffic_source: Option<String>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from the four optional wizard values.
    #[must_use]
    pub fn from_parts(
        vertical: Option<&str>,
        funnel_type: Option<&str>,
        language: Option<&str>,
        traffic_source: Option<&str>,
    ) -> Self {
        Self {
            vertical: vertical.map(str::to_owned),
            funnel_type: funnel_type.map(str::to_owned),
            language: language.map(str::to_owned),
            traffic_source: traffic_source.map(str::to_owned),
        }
    }

    #[must_use]
    pub fn vertical(mut self, value: impl Into<String>) -> Self {
        self.vertical = Some(value.into());
        self
    }

    #[must_use]
    pub fn funnel_type(mut self, value: impl Into<String>) -> Self {
        self.funnel_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn language(mut self, value: impl Into<String>) -> Self {
        self.language = Some(value.into());
        self
    }

    #[must_use]
    pub fn traffic_source(mut self, value: impl Into<String>) -> Self {
        self.traffic_source = Some(value.into());
        self
    }

    /// Set the value for a dimension (mutable reference version).
    pub fn set(&mut self, dimension: Dimension, value: impl Into<String>) {
        *self.slot_mut(dimension) = Some(value.into());
    }

    /// Clear the value for a dimension.
    pub fn clear(&mut self, dimension: Dimension) {
        *self.slot_mut(dimension) = None;
    }

    /// The selected value for a dimension. Empty strings read as `None`.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        let slot = match dimension {
            Dimension::Vertical => &self.vertical,
            Dimension::FunnelType => &self.funnel_type,
            Dimension::Language => &self.language,
            Dimension::TrafficSource => &self.traffic_source,
        };
        slot.as_deref().filter(|v| !v.is_empty())
    }

    /// True only when all four dimensions hold a non-empty value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Dimension::ALL.iter().all(|&d| self.get(d).is_some())
    }

    /// Dimensions still missing a value, in wizard order.
    #[must_use]
    pub fn missing(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|&d| self.get(d).is_none())
            .collect()
    }

    /// Borrow the four values if the selection is complete.
    pub(crate) fn values(&self) -> Option<[&str; 4]> {
        Some([
            self.get(Dimension::Vertical)?,
            self.get(Dimension::FunnelType)?,
            self.get(Dimension::Language)?,
            self.get(Dimension::TrafficSource)?,
        ])
    }

    fn slot_mut(&mut self, dimension: Dimension) -> &mut Option<String> {
        match dimension {
            Dimension::Vertical => &mut self.vertical,
            Dimension::FunnelType => &mut self.funnel_type,
            Dimension::Language => &mut self.language,
            Dimension::TrafficSource => &mut self.traffic_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Selection {
        Selection::new()
            .vertical("Auto")
            .funnel_type("Content")
            .language("English")
            .traffic_source("Google")
    }

    #[test]
    fn empty_selection_is_incomplete() {
        let sel = Selection::new();
        assert!(!sel.is_complete());
        assert_eq!(sel.missing(), Dimension::ALL.to_vec());
    }

    #[test]
    fn all_four_set_is_complete() {
        let sel = complete();
        assert!(sel.is_complete());
        assert!(sel.missing().is_empty());
        assert_eq!(sel.values(), Some(["Auto", "Content", "English", "Google"]));
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let sel = complete().language("");
        assert!(!sel.is_complete());
        assert_eq!(sel.get(Dimension::Language), None);
        assert_eq!(sel.missing(), vec![Dimension::Language]);
        assert_eq!(sel.values(), None);
    }

    #[test]
    fn from_parts_with_none() {
        let sel = Selection::from_parts(Some("Auto"), None, Some("English"), Some("Google"));
        assert!(!sel.is_complete());
        assert_eq!(sel.missing(), vec![Dimension::FunnelType]);
    }

    #[test]
    fn set_and_clear_by_dimension() {
        let mut sel = complete();
        sel.set(Dimension::TrafficSource, "Bing");
        assert_eq!(sel.get(Dimension::TrafficSource), Some("Bing"));

        sel.clear(Dimension::Vertical);
        assert_eq!(sel.get(Dimension::Vertical), None);
        assert!(!sel.is_complete());
    }

    #[test]
    fn editing_earlier_step_keeps_later_values() {
        let mut sel = complete();
        sel.set(Dimension::Vertical, "Health");
        assert!(sel.is_complete());
        assert_eq!(sel.values(), Some(["Health", "Content", "English", "Google"]));
    }
}
