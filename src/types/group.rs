use std::fmt;

use super::record::RuleRecord;

/// Identifier and name of one campaign variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CampaignRef {
    pub id: String,
    pub name: String,
}

impl CampaignRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A matching rule record projected for display: its description and the
/// desktop and mobile campaigns it resolves to.
///
/// Built fresh for every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultGroup {
    pub description: String,
    pub desktop: CampaignRef,
    pub mobile: CampaignRef,
}

impl From<&RuleRecord> for ResultGroup {
    fn from(record: &RuleRecord) -> Self {
        Self {
            description: record.description.clone(),
            desktop: CampaignRef::new(&record.desktop_rule_id, &record.desktop_rule_name),
            mobile: CampaignRef::new(&record.mobile_rule_id, &record.mobile_rule_name),
        }
    }
}

impl fmt::Display for CampaignRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

impl fmt::Display for ResultGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: desktop {}, mobile {}",
            self.description, self.desktop, self.mobile
        )
    }
}
