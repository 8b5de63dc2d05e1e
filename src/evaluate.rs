use crate::{CompiledRule, Dimension, ResultGroup};

pub(crate) fn evaluate(rules: &[CompiledRule], values: [&str; 4]) -> Vec<ResultGroup> {
    let [vertical, funnel_type, language, traffic_source] = values;
    tracing::debug!(
        vertical,
        funnel_type,
        language,
        traffic_source,
        records = rules.len(),
        "searching rule groups"
    );

    let groups: Vec<ResultGroup> = rules
        .iter()
        .filter(|rule| rule_matches(rule, values))
        .map(|rule| {
            tracing::trace!(
                row = rule.index,
                description = %rule.record.description,
                "rule matched"
            );
            ResultGroup::from(&rule.record)
        })
        .collect();

    tracing::debug!(matches = groups.len(), "found matching rule groups");
    groups
}

/// A rule survives only if every dimension passes its filter.
pub(crate) fn rule_matches(rule: &CompiledRule, values: [&str; 4]) -> bool {
    Dimension::ALL
        .iter()
        .zip(values)
        .all(|(&dim, value)| rule.filter(dim).matches(value))
}

#[cfg(test)]
mod tests {
    use crate::{RecordBuilder, RuleSet, RuleSetBuilder, Selection};

    fn sel(v: &str, f: &str, l: &str, t: &str) -> Selection {
        Selection::new()
            .vertical(v)
            .funnel_type(f)
            .language(l)
            .traffic_source(t)
    }

    fn descriptions(ruleset: &RuleSet, selection: &Selection) -> Vec<String> {
        ruleset
            .find_groups(selection)
            .into_iter()
            .map(|g| g.description)
            .collect()
    }

    #[test]
    fn eval_requires_every_dimension() {
        let ruleset = RuleSetBuilder::new()
            .rule(|r| {
                r.vertical("Auto")
                    .funnel_type("Content")
                    .language("English")
                    .traffic_source("Google")
                    .description("exact")
            })
            .compile();

        assert_eq!(
            descriptions(&ruleset, &sel("Auto", "Content", "English", "Google")),
            ["exact"]
        );
        for off in [
            sel("Health", "Content", "English", "Google"),
            sel("Auto", "Offer", "English", "Google"),
            sel("Auto", "Content", "Spanish", "Google"),
            sel("Auto", "Content", "English", "Bing"),
        ] {
            assert!(descriptions(&ruleset, &off).is_empty(), "matched {off:?}");
        }
    }

    #[test]
    fn eval_mixed_expression_kinds() {
        let ruleset = RuleSetBuilder::new()
            .rule(|r| {
                r.vertical("All Excluding Medicare")
                    .funnel_type("All")
                    .language("english")
                    .traffic_source("Revcontent, Applovin, Google")
                    .description("mixed")
            })
            .compile();

        assert_eq!(
            descriptions(&ruleset, &sel("Auto", "Chat", "English", "applovin")),
            ["mixed"]
        );
        assert!(descriptions(&ruleset, &sel("medicare", "Chat", "English", "applovin")).is_empty());
        assert!(descriptions(&ruleset, &sel("Auto", "Chat", "English", "Facebook")).is_empty());
    }

    #[test]
    fn eval_returns_all_overlapping_matches_in_order() {
        let only_vertical = |vertical: &'static str, description: &'static str| {
            move |r: RecordBuilder| {
                r.vertical(vertical)
                    .funnel_type("All")
                    .language("All")
                    .traffic_source("All")
                    .description(description)
            }
        };
        let ruleset = RuleSetBuilder::new()
            .rule(only_vertical("All", "catch-all"))
            .rule(only_vertical("Health", "health"))
            .rule(only_vertical("Auto", "auto"))
            .rule(only_vertical("All", "catch-all"))
            .compile();

        assert_eq!(
            descriptions(&ruleset, &sel("Auto", "Offer", "Spanish", "Bing")),
            ["catch-all", "auto", "catch-all"]
        );
    }

    #[test]
    fn eval_empty_filter_never_matches_a_complete_selection() {
        let ruleset = RuleSetBuilder::new()
            .rule(|r| r.vertical("All").funnel_type("All").language("All").description("no source"))
            .compile();
        assert!(descriptions(&ruleset, &sel("Auto", "Offer", "English", "Google")).is_empty());
    }

    #[test]
    fn eval_projects_campaigns() {
        let ruleset = RuleSetBuilder::new()
            .rule(|r| {
                r.vertical("All")
                    .funnel_type("All")
                    .language("All")
                    .traffic_source("All")
                    .description("d")
                    .desktop("D-9", "Desktop Nine")
                    .mobile("M-9", "Mobile Nine")
            })
            .compile();

        let groups = ruleset.find_groups(&sel("a", "b", "c", "d"));
        assert_eq!(groups[0].desktop.id, "D-9");
        assert_eq!(groups[0].desktop.name, "Desktop Nine");
        assert_eq!(groups[0].mobile.id, "M-9");
        assert_eq!(groups[0].mobile.name, "Mobile Nine");
    }
}
