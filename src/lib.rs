//! Campaign rule-group lookup.
//!
//! A curated CSV table maps four filter dimensions (vertical, funnel type,
//! language, traffic source) to desktop and mobile campaigns. Each rule-side
//! cell is a filter-expression: `All`, `All Excluding X`, a comma-separated
//! list, or a single value, all compared case-insensitively. Given one
//! concrete value per dimension, every record passing all four filters is
//! returned in table order.
//!
//! - [`matches`] / [`FilterExpr`]: the filter-expression matcher
//! - [`RuleSet`]: compiled, immutable records with the query engine
//! - [`RuleSource`]: where table text comes from ([`HttpSource`],
//!   [`FileSource`], [`StaticSource`])
//! - [`RuleProvider`]: fetch-once cache and the UI-facing query
//!
//! ```
//! use campaign_rules::{RuleSet, Selection};
//!
//! let csv = "Vertical,Funnel Type,Language,Filter 4:,Desktop Rule ID,Desktop Rule Name,Mobile Rule ID,Mobile Rule Name,Decription\n\
//!            All Excluding Medicare,Content,English,\"Google, Bing\",D1,Desk,M1,Mob,Search content\n";
//! let ruleset = RuleSet::from_csv(csv).unwrap();
//!
//! let sel = Selection::new()
//!     .vertical("Auto")
//!     .funnel_type("content")
//!     .language("English")
//!     .traffic_source("bing");
//! let groups = ruleset.find_groups(&sel);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].desktop.id, "D1");
//! ```

pub mod catalog;
mod compile;
mod error;
mod evaluate;
pub mod parse;
mod provider;
pub mod source;
mod types;

pub use error::LoadError;
pub use provider::RuleProvider;
pub use source::{DEFAULT_RULES_URL, FileSource, HttpSource, RuleSource, StaticSource};
pub(crate) use types::CompiledRule;
pub use types::{
    CampaignRef, Dimension, FilterExpr, RecordBuilder, ResultGroup, RuleRecord, RuleSet,
    RuleSetBuilder, Selection, matches,
};
