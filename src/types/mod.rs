mod filter;
mod group;
mod record;
mod ruleset;
mod selection;

pub use filter::{FilterExpr, matches};
pub use group::{CampaignRef, ResultGroup};
pub(crate) use record::CompiledRule;
pub use record::{Dimension, RuleRecord};
pub use ruleset::{RecordBuilder, RuleSet, RuleSetBuilder};
pub use selection::Selection;
