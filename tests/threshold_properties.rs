use code_gate::checker::{ThresholdEvaluator, ThresholdPolicy};
use code_gate::coverage::{Counter, CoverageReport, MetricType};
use proptest::prelude::*;

fn report_with_line(missed: u64, covered: u64) -> CoverageReport {
    let mut report = CoverageReport::default();
    report
        .totals
        .insert(MetricType::Line, Counter::new(MetricType::Line, missed, covered));
    report
}

fn line_passes(missed: u64, covered: u64, threshold: u8) -> bool {
    let evaluator =
        ThresholdEvaluator::new(ThresholdPolicy::new().with_threshold(MetricType::Line, threshold));
    evaluator
        .evaluate(&report_with_line(missed, covered))
        .metric(MetricType::Line)
        .is_some_and(|m| m.passed)
}

proptest! {
    #[test]
    fn percentage_is_bounded(missed in any::<u64>(), covered in any::<u64>()) {
        let pct = Counter::new(MetricType::Line, missed, covered).percentage();
        prop_assert!(pct <= 100);
    }

    #[test]
    fn percentage_is_floor_of_ratio(missed in 0u64..1_000_000, covered in 0u64..1_000_000) {
        prop_assume!(missed + covered > 0);
        let pct = Counter::new(MetricType::Line, missed, covered).percentage();
        prop_assert_eq!(pct, covered * 100 / (missed + covered));
        prop_assert!(pct * (missed + covered) <= covered * 100);
    }

    #[test]
    fn percentage_is_deterministic(missed in any::<u64>(), covered in any::<u64>()) {
        let a = Counter::new(MetricType::Branch, missed, covered).percentage();
        let b = Counter::new(MetricType::Branch, missed, covered).percentage();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn more_covered_never_lowers_percentage(
        missed in 0u64..100_000,
        covered in 0u64..100_000,
        extra in 0u64..100_000,
    ) {
        let before = Counter::new(MetricType::Line, missed, covered).percentage();
        let after = Counter::new(MetricType::Line, missed, covered + extra).percentage();
        prop_assert!(after >= before || missed + covered == 0);
    }

    #[test]
    fn raising_threshold_never_turns_fail_into_pass(
        missed in 0u64..10_000,
        covered in 0u64..10_000,
        low in 1u8..=100,
        raise in 0u8..=100,
    ) {
        let high = low.saturating_add(raise).min(100);
        if !line_passes(missed, covered, low) {
            prop_assert!(!line_passes(missed, covered, high));
        }
    }

    #[test]
    fn passes_exactly_at_or_above_threshold(
        missed in 0u64..10_000,
        covered in 0u64..10_000,
        threshold in 1u8..=100,
    ) {
        let pct = Counter::new(MetricType::Line, missed, covered).percentage();
        prop_assert_eq!(line_passes(missed, covered, threshold), pct >= u64::from(threshold));
    }

    #[test]
    fn zero_threshold_is_informational(missed in any::<u64>(), covered in any::<u64>()) {
        prop_assert!(line_passes(missed, covered, 0));
    }

    #[test]
    fn empty_counter_fails_any_nonzero_threshold(threshold in 1u8..=100) {
        prop_assert!(!line_passes(0, 0, threshold));
    }
}
