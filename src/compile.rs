use crate::{CompiledRule, Dimension, FilterExpr, RuleRecord, RuleSet};

pub(crate) fn compile(records: Vec<RuleRecord>) -> RuleSet {
    let rules = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let filters = Dimension::ALL.map(|d| FilterExpr::parse(record.filter(d)));
            CompiledRule {
                record,
                filters,
                index,
            }
        })
        .collect();

    RuleSet { rules }
}
