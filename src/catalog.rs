//! The options the selection wizard offers for each dimension.
//!
//! Matching does not consult these lists; any string can be queried.

use crate::Dimension;

pub const VERTICALS: &[&str] = &["Auto", "Medicare", "Health", "OPTB Child", "MidMarket"];

pub const FUNNEL_TYPES: &[&str] = &["Content", "Offer", "Chat"];

pub const LANGUAGES: &[&str] = &["English", "Spanish"];

pub const TRAFFIC_SOURCES: &[&str] = &[
    "Revcontent",
    "Applovin",
    "Newsbreak",
    "MGID",
    "Rumble",
    "YT",
    "SEO",
    "URL",
    "Mail",
    "QV",
    "Propeller Ads",
    "Quinstreet",
    "Snapchat",
    "Kayzen",
    "COMCAST",
    "Twitter",
    "Spotify",
    "ReadersDigest",
    "Pushnami",
    "Liveintent",
    "Incubeta",
    "Media Alpha",
    "QV Radio",
    "IW Media",
    "Jeeng",
    "Zemanta",
    "Bing",
    "Search",
    "Tiktok",
    "Google",
    "Facebook",
    "Taboola",
    "Outbrain",
];

/// Every option offered for a dimension, in display order.
#[must_use]
pub fn choices(dimension: Dimension) -> &'static [&'static str] {
    match dimension {
        Dimension::Vertical => VERTICALS,
        Dimension::FunnelType => FUNNEL_TYPES,
        Dimension::Language => LANGUAGES,
        Dimension::TrafficSource => TRAFFIC_SOURCES,
    }
}

/// Options whose text contains `term`, ignoring case. An empty term
/// returns every option.
#[must_use]
pub fn search(dimension: Dimension, term: &str) -> Vec<&'static str> {
    let term = term.to_lowercase();
    choices(dimension)
        .iter()
        .copied()
        .filter(|choice| choice.to_lowercase().contains(&term))
        .collect()
}
