use proptest::prelude::*;
use stat_plot_layout::core::brackets::assign_levels;
use stat_plot_layout::{
    build_scene, jitter, BracketInterval, Comparison, GroupSummary, LayoutOptions, Observation,
    SceneStyle,
};

const GROUPS: &[&str] = &["A", "B", "C", "D", "E", "F"];

fn observation_strategy() -> impl Strategy<Value = Observation> {
    (0..GROUPS.len(), -1000.0f64..1000.0).prop_map(|(g, v)| Observation::new(GROUPS[g], v))
}

fn summary_strategy() -> impl Strategy<Value = GroupSummary> {
    (0..GROUPS.len(), -1000.0f64..1000.0, 0.0f64..50.0, 0.0f64..50.0)
        .prop_map(|(g, mean, lo, hi)| GroupSummary::new(GROUPS[g], mean, mean - lo, mean + hi))
}

fn comparison_strategy() -> impl Strategy<Value = Comparison> {
    (0..GROUPS.len(), 0..GROUPS.len(), 0.0f64..=1.0)
        .prop_filter("distinct groups", |(a, b, _)| a != b)
        .prop_map(|(a, b, p)| Comparison::new(GROUPS[a], GROUPS[b], p))
}

fn interval_strategy() -> impl Strategy<Value = BracketInterval> {
    (1usize..=8, 1usize..=8)
        .prop_filter("non-empty interval", |(a, b)| a != b)
        .prop_map(|(a, b)| BracketInterval::new(a.min(b), a.max(b), 0.01))
}

fn options(jitter_strength: f64) -> LayoutOptions {
    LayoutOptions {
        group_order: Some(GROUPS.iter().map(|g| g.to_string()).collect()),
        jitter_strength,
        style: SceneStyle::default(),
    }
}

proptest! {
    #[test]
    fn jitter_stays_inside_open_interval(value in -1e6f64..1e6, strength in 0.0f64..=1.0) {
        let offset = jitter(value, strength);
        if strength == 0.0 {
            prop_assert_eq!(offset, 0.0);
        } else {
            prop_assert!(offset > -strength / 2.0 && offset < strength / 2.0,
                "offset {} outside bounds for strength {}", offset, strength);
        }
    }
}

proptest! {
    #[test]
    fn same_level_brackets_never_overlap(intervals in prop::collection::vec(interval_strategy(), 0..30)) {
        let assignment = assign_levels(intervals);
        for (i, a) in assignment.brackets.iter().enumerate() {
            for b in assignment.brackets.iter().skip(i + 1) {
                if a.level == b.level {
                    prop_assert!(!a.overlaps(b), "{:?} and {:?} share level {}", a, b, a.level);
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn disjoint_brackets_stay_on_level_zero(count in 0usize..10) {
        // (1,2), (3,4), (5,6), ...
        let intervals: Vec<BracketInterval> = (0..count)
            .map(|i| BracketInterval::new(2 * i + 1, 2 * i + 2, 0.01))
            .collect();
        let assignment = assign_levels(intervals);
        prop_assert!(assignment.brackets.iter().all(|b| b.level == 0));
    }
}

proptest! {
    #[test]
    fn input_order_does_not_change_levels(
        intervals in prop::collection::vec(interval_strategy(), 0..20),
        seed in any::<u64>(),
    ) {
        let mut shuffled = intervals.clone();
        // deterministic permutation driven by the seed
        let n = shuffled.len();
        for i in (1..n).rev() {
            let j = (seed.wrapping_mul(i as u64 + 7) % (i as u64 + 1)) as usize;
            shuffled.swap(i, j);
        }

        let levels = |list: Vec<BracketInterval>| {
            let mut out: Vec<(usize, usize, usize)> = assign_levels(list)
                .brackets
                .iter()
                .map(|b| (b.start_index, b.end_index, b.level))
                .collect();
            out.sort();
            out
        };

        prop_assert_eq!(levels(intervals), levels(shuffled));
    }
}

proptest! {
    #[test]
    fn scene_is_deterministic(
        observations in prop::collection::vec(observation_strategy(), 0..40),
        summaries in prop::collection::vec(summary_strategy(), 0..6),
        comparisons in prop::collection::vec(comparison_strategy(), 0..10),
        strength in 0.0f64..=1.0,
    ) {
        let first = build_scene(&observations, &summaries, &comparisons, &options(strength));
        let second = build_scene(&observations, &summaries, &comparisons, &options(strength));
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn domain_contains_everything(
        observations in prop::collection::vec(observation_strategy(), 1..40),
        summaries in prop::collection::vec(summary_strategy(), 0..6),
        comparisons in prop::collection::vec(comparison_strategy(), 0..10),
    ) {
        let scene = build_scene(&observations, &summaries, &comparisons, &options(0.3));
        let [y_min, y_max] = scene.y_domain;
        prop_assert!(y_min < y_max);

        for p in &scene.points {
            prop_assert!(p.y > y_min && p.y < y_max, "point {} outside [{}, {}]", p.y, y_min, y_max);
        }
        for s in &scene.summaries {
            prop_assert!(s.y - s.error_neg > y_min && s.y + s.error_pos < y_max);
        }
        for b in &scene.brackets {
            prop_assert!(b.y > y_min && b.y < y_max, "bracket {} outside [{}, {}]", b.y, y_min, y_max);
        }
    }
}
