use super::*;
use proptest::prelude::*;
use typescale_core::FontMetrics;

fn any_metrics() -> impl Strategy<Value = FontMetrics> {
    (
        100i32..3000,
        -1500i32..0,
        0i32..300,
        prop::sample::select(vec![1000u16, 1024, 2048, 2816, 4096]),
        prop::option::of(100i32..2000),
    )
        .prop_map(|(ascent, descent, line_gap, upem, x_height)| {
            let mut metrics = FontMetrics::new("Probe", ascent, descent, line_gap, upem);
            metrics.x_height = x_height;
            metrics
        })
}

// Property: normalizing to a font's own units/em changes nothing
proptest! {
    #[test]
    fn prop_normalize_identity(metrics in any_metrics()) {
        let upem = metrics.units_per_em;
        prop_assert_eq!(normalize_metrics(&metrics, upem), metrics);
    }
}

// Property: normalizing twice to the same target is the same as once
proptest! {
    #[test]
    fn prop_normalize_idempotent(metrics in any_metrics()) {
        let once = normalize_metrics(&metrics, 1000);
        prop_assert_eq!(normalize_metrics(&once, 1000), once.clone());
    }
}

// Property: every adjustment is a non-negative percentage string
proptest! {
    #[test]
    fn prop_adjustments_non_negative(metrics in any_metrics(), index in 0usize..10) {
        let fallback = system_font_names().nth(index).unwrap();
        let adjustments = calculate_fallback_adjustments(&metrics, fallback);
        for value in [
            &adjustments.ascent_override,
            &adjustments.descent_override,
            &adjustments.line_gap_override,
            &adjustments.size_adjust,
        ] {
            prop_assert!(value.ends_with('%'), "{}", value);
            let number: f64 = value.trim_end_matches('%').parse().unwrap();
            prop_assert!(number >= 0.0, "{}", value);
        }
    }
}

// Property: the matcher only ever names a table font
proptest! {
    #[test]
    fn prop_best_match_is_known(metrics in any_metrics()) {
        let name = find_best_matching_fallback(&metrics);
        prop_assert!(system_font_names().any(|known| known == name));
    }
}
