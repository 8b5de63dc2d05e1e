//! Query the live rule table.
//!
//! ```text
//! cargo run --example remote -- Auto Content English Google
//! RUST_LOG=campaign_rules=debug cargo run --example remote -- Medicare Chat Spanish Bing
//! ```

use campaign_rules::{RuleProvider, Selection};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("campaign_rules=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize| args.get(i).cloned();
    let sel = Selection::from_parts(
        arg(0).as_deref(),
        arg(1).as_deref(),
        arg(2).as_deref(),
        arg(3).as_deref(),
    );

    if !sel.is_complete() {
        let missing: Vec<String> = sel.missing().iter().map(ToString::to_string).collect();
        eprintln!("usage: remote <vertical> <funnel type> <language> <traffic source>");
        eprintln!("missing: {}", missing.join(", "));
        std::process::exit(2);
    }

    let provider = RuleProvider::remote();
    match provider.try_find_matching_rule_groups(&sel).await {
        Ok(groups) if groups.is_empty() => println!("No rule groups matched."),
        Ok(groups) => {
            for group in groups {
                println!("{group}");
            }
        }
        Err(e) => {
            eprintln!("rule table unavailable: {e}");
            std::process::exit(1);
        }
    }
}
