use campaign_rules::{RuleSet, Selection};

const TABLE: &str = "\
Vertical,Funnel Type,Language,Filter 4:,Desktop Rule ID,Desktop Rule Name,Mobile Rule ID,Mobile Rule Name,Decription
All Excluding Medicare,Content,English,\"Google, Bing\",1001,Search Desktop,2001,Search Mobile,Search content
Medicare,All,All,All,1002,Medicare Desktop,2002,Medicare Mobile,Medicare catch-all
All,Offer,Spanish,Taboola,1003,ES Offer Desktop,2003,ES Offer Mobile,Spanish offers
";

fn main() {
    let ruleset = RuleSet::from_csv(TABLE).expect("failed to parse rule table");
    println!("{ruleset}");

    let sel = Selection::new()
        .vertical("Auto")
        .funnel_type("Content")
        .language("English")
        .traffic_source("bing");

    let groups = ruleset.find_groups(&sel);
    if groups.is_empty() {
        println!("No rule groups matched.");
    }
    for group in &groups {
        println!("Result: {group}");
    }

    // Incomplete selections never match.
    let partial = Selection::new().vertical("Medicare");
    println!("missing: {:?}", partial.missing());
    assert!(ruleset.find_groups(&partial).is_empty());
}
