use super::*;
use crate::format::round_to;
use crate::scale::{fluid_bounds, STEP_NAMES};
use proptest::prelude::*;

// Property: step 0 is the base itself
proptest! {
    #[test]
    fn prop_modular_step_zero_is_base(base in 0.5f64..200.0, ratio in 0.5f64..4.0) {
        prop_assert_eq!(calculate_modular_step(base, ratio, 0), base);

        let scale = calculate_modular_scale(base, ratio);
        prop_assert_eq!(scale["base"].as_px(), Some(round_to(base, 2)));
    }
}

// Property: with ratio > 1 the named steps strictly grow
proptest! {
    #[test]
    fn prop_modular_scale_monotonic(base in 1.0f64..100.0, ratio in 1.05f64..3.0) {
        let scale = calculate_modular_scale(base, ratio);
        let sizes: Vec<f64> = STEP_NAMES
            .iter()
            .map(|name| scale[*name].as_px().unwrap())
            .collect();
        for pair in sizes.windows(2) {
            prop_assert!(pair[0] < pair[1], "{:?}", sizes);
        }
    }
}

// Property: a range has steps_up + steps_down + 1 ascending entries
proptest! {
    #[test]
    fn prop_modular_range_shape(
        base in 1.0f64..100.0,
        ratio in 1.01f64..2.0,
        up in 0u32..8,
        down in 0u32..8,
    ) {
        let range = calculate_modular_scale_range(base, ratio, up, down);
        prop_assert_eq!(range.len(), (up + down + 1) as usize);
        prop_assert!(range.contains(&round_to(base, 2)));
        for pair in range.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }
}

// Property: the emitted clamp() parses back to the sizes it was built from
proptest! {
    #[test]
    fn prop_clamp_round_trip(
        min_px in 8.0f64..40.0,
        extra in 0.0f64..60.0,
        min_vw in 200.0f64..800.0,
        span in 200.0f64..1600.0,
    ) {
        let max_px = min_px + extra;
        let max_vw = min_vw + span;
        let expression = fluid_clamp(min_px, max_px, min_vw, max_vw);
        let parsed = parse_clamp_expression(&expression).unwrap();

        prop_assert!((parsed.min_px - min_px).abs() < 0.01, "{}", expression);
        prop_assert!((parsed.max_px - max_px).abs() < 0.01, "{}", expression);
        prop_assert!((parsed.preferred_px_at(min_vw) - min_px).abs() < 0.05, "{}", expression);
        prop_assert!((parsed.preferred_px_at(max_vw) - max_px).abs() < 0.05, "{}", expression);
    }
}

// Property: interpolated sizes stay inside [min, max]
proptest! {
    #[test]
    fn prop_fluid_size_bounded(
        min_px in 8.0f64..40.0,
        extra in 0.0f64..60.0,
        viewport in 0.0f64..4000.0,
    ) {
        let max_px = min_px + extra;
        let size = fluid_size_at_viewport(min_px, max_px, 320.0, 1280.0, viewport);
        prop_assert!(size >= min_px - 1e-9 && size <= max_px + 1e-9);
    }
}

// Property: every fluid step resolves inside its own [min, max] anywhere in the viewport range
proptest! {
    #[test]
    fn prop_fluid_scale_within_bounds_across_viewports(
        base in 8.0f64..32.0,
        min_scale in 0.5f64..1.5,
        extra in 0.0f64..1.0,
        min_viewport in 200.0f64..800.0,
        span in 200.0f64..1600.0,
        position in 0.0f64..=1.0,
    ) {
        let config = FluidScale {
            base,
            min_scale,
            max_scale: min_scale + extra,
            min_viewport,
            max_viewport: min_viewport + span,
        };
        let computed = calculate_scale(&ScaleConfig::Fluid(config));
        let viewport = min_viewport + position * span;

        for (step, (low, high)) in fluid_bounds(&config) {
            let expression = computed.value[&step].to_css();
            let clamp = parse_clamp_expression(&expression).unwrap();
            let px = clamp.resolve_px_at(viewport);
            prop_assert!(px >= low - 0.01 && px <= high + 0.01, "{} at {}: {}", step, viewport, expression);

            let interpolated = fluid_size_at_viewport(low, high, config.min_viewport, config.max_viewport, viewport);
            prop_assert!((px - interpolated).abs() < 0.05, "{} at {}: {}", step, viewport, expression);
        }
    }
}
