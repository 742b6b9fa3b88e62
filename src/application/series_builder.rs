// Series builder - attach stable chart ids and colors to aggregate arrays
use crate::domain::bucket::hour_labels;
use crate::domain::probe::Grouping;
use crate::domain::series::{AggregationView, BucketValues, Series};
use std::collections::BTreeMap;

/// Fixed line palette for entity series. Entities hash onto a palette slot;
/// once more entities than colors exist the palette wraps around and colors
/// repeat. That reuse is the chosen exhaustion policy.
pub const LINE_PALETTE: [&str; 12] = [
    "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff", "#ff007f", "#7f00ff",
    "#00ff7f", "#ff7f00", "#7fff00", "#007fff",
];

/// Fixed colors for the overall min/avg/max trend series.
pub const MINIMUM_COLOR: &str = "#99ff99";
pub const MAXIMUM_COLOR: &str = "#ff9999";
pub const AVERAGE_COLOR: &str = "#99ccff";

/// FNV-1a. Stable across runs, unlike the std hasher.
fn fnv1a(input: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in input.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Deterministic, collision-free chart identifier for an entity key: a
/// sanitized slug for readability plus the full key hash to disambiguate
/// keys that sanitize identically.
pub fn chart_id(grouping: Grouping, entity_key: &str) -> String {
    let slug: String = entity_key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let prefix = match grouping {
        Grouping::Device => "dev",
        Grouping::Channel => "chan",
    };
    format!("{prefix}-{slug}-{:016x}", fnv1a(entity_key))
}

/// Deterministic palette color for an entity key. A pure function of the
/// key, so iteration order never leaks into visual identity.
pub fn color_for(entity_key: &str) -> String {
    let slot = (fnv1a(entity_key) % LINE_PALETTE.len() as u64) as usize;
    LINE_PALETTE[slot].to_string()
}

/// Converts one grouping's aggregate arrays into chart-ready series records
/// plus the shared label sequence. Builds new records only; the input map is
/// untouched.
pub fn build_view(
    grouping: Grouping,
    aggregates: &BTreeMap<String, BucketValues>,
) -> AggregationView {
    let series = aggregates
        .iter()
        .map(|(entity_key, values)| Series {
            entity_key: entity_key.clone(),
            chart_id: chart_id(grouping, entity_key),
            label: grouping.label_for(entity_key),
            color: color_for(entity_key),
            values: *values,
        })
        .collect();
    AggregationView {
        grouping,
        hour_labels: hour_labels(),
        series,
    }
}

/// The overall daily trend: three fixed series over the whole event stream.
pub fn build_overall_trend(
    minima: BucketValues,
    averages: BucketValues,
    maxima: BucketValues,
) -> Vec<Series> {
    let fixed = [
        ("Minimum", MINIMUM_COLOR, minima),
        ("Average", AVERAGE_COLOR, averages),
        ("Maximum", MAXIMUM_COLOR, maxima),
    ];
    fixed
        .into_iter()
        .map(|(label, color, values)| Series {
            entity_key: label.to_lowercase(),
            chart_id: format!("overall-{}", label.to_lowercase()),
            label: label.to_string(),
            color: color.to_string(),
            values,
        })
        .collect()
}
