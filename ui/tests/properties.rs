use proptest::prelude::*;
use time::macros::date;

use ui::charts::geometry::{donut_segments, gauge_angle};
use ui::charts::{AnchorStrategy, ChartBox, HoverController, Placement, TooltipSize};
use ui::core::SeededSequence;
use ui::survey::{MetricDataset, MetricKind};

const TIP: TooltipSize = TooltipSize::new(180.0, 100.0);

fn strategy() -> impl Strategy<Value = AnchorStrategy> {
    prop_oneof![Just(AnchorStrategy::CenterClamp), Just(AnchorStrategy::EdgeSnap)]
}

proptest! {
    #[test]
    fn same_seed_same_stream(seed in any::<u64>(), n in 1usize..256) {
        let a: Vec<f64> = SeededSequence::new(seed).take(n).collect();
        let b: Vec<f64> = SeededSequence::new(seed).take(n).collect();
        prop_assert_eq!(&a, &b);
        prop_assert!(a.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn gauge_angle_is_clamped_and_monotonic(
        min in -500.0f64..500.0,
        span in 1.0f64..500.0,
        a in -2000.0f64..2000.0,
        b in -2000.0f64..2000.0,
    ) {
        let max = min + span;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(gauge_angle(lo, min, max) <= gauge_angle(hi, min, max));
        prop_assert!((0.0..=180.0).contains(&gauge_angle(a, min, max)));
        prop_assert_eq!(gauge_angle(min, min, max), 0.0);
        prop_assert!((gauge_angle(max, min, max) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn donut_sweeps_and_gaps_fill_the_circle(
        values in prop::collection::vec(1u32..10_000, 1..16),
        gap in 0.0f64..6.0,
    ) {
        let segments = donut_segments(&values, gap, 0.0);
        prop_assert_eq!(segments.len(), values.len());
        let swept: f64 = segments.iter().map(|s| s.sweep).sum();
        let total = swept + gap * values.len() as f64;
        prop_assert!((total - 360.0).abs() < 0.01, "total {}", total);
    }

    #[test]
    fn tooltip_stays_inside_the_box(
        strategy in strategy(),
        width in 180.0f64..2000.0,
        height in 100.0f64..800.0,
        count in 1usize..40,
        pick in any::<prop::sample::Index>(),
        pointer_y in -5000.0f64..5000.0,
    ) {
        let mut hover = HoverController::new(strategy, TIP, Placement::default());
        hover.pointer_moved(pointer_y);
        hover.enter(pick.index(count));

        let bounds = ChartBox::new(width, height);
        let anchor = hover.anchor(count, bounds).unwrap();
        prop_assert!(anchor.x >= 0.0 && anchor.x <= width - TIP.width);
        prop_assert!(anchor.y >= 0.0 && anchor.y <= height - TIP.height);
    }

    #[test]
    fn stacked_entries_sum_to_one_hundred(seed in any::<u64>(), days in 1usize..60) {
        let nps = MetricDataset::build(MetricKind::Nps, seed, "Last 30 days", days, 40.0, date!(2025 - 03 - 31));
        prop_assert_eq!(nps.stacked.len(), days);
        for entry in &nps.stacked {
            let sum: u32 = entry.components.iter().map(|c| c.share).sum();
            prop_assert!(sum.abs_diff(100) <= 1);
            prop_assert_eq!(entry.total, entry.components.iter().map(|c| c.raw).sum::<u32>());
        }
    }
}
