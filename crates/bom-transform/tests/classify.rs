//! Property tests for category classification.

use proptest::prelude::*;

use bom_model::BomConfig;
use bom_transform::{classify, top_level_segment};

const UNKNOWN: &str = "Unknown";

fn category_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        ".*",
        "[ /\t]{0,6}",
        "[ /a-zA-Z电阻容ü]{0,12}",
        prop::sample::select(vec!["resistor", "CAPACITOR", " ic ", "Diode"])
            .prop_flat_map(|top| "[ /a-z0-9]{0,6}".prop_map(move |rest| format!("{top}/{rest}"))),
    ]
    .boxed()
}

proptest! {
    #[test]
    fn classify_always_yields_a_known_label(raw in category_strategy()) {
        let config = BomConfig::default();
        let label = classify(Some(&raw), &config.category_map, UNKNOWN);
        prop_assert!(
            label == UNKNOWN || config.category_map.values().any(|value| *value == label),
            "unexpected label {label:?} for {raw:?}"
        );
    }

    #[test]
    fn classify_depends_only_on_top_segment(raw in category_strategy()) {
        prop_assume!(!raw.trim().is_empty());
        let map = BomConfig::default().category_map;
        prop_assert_eq!(
            classify(Some(&raw), &map, UNKNOWN),
            classify(Some(top_level_segment(&raw)), &map, UNKNOWN)
        );
    }
}

#[test]
fn classify_handles_absent_category() {
    let map = BomConfig::default().category_map;
    assert_eq!(classify(None, &map, UNKNOWN), UNKNOWN);
}
