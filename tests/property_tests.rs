//! Property-based tests for training-summary
//!
//! - Best-epoch selection invariants
//! - Timing breakdown shape and totals
//! - Report JSON round-trip
//! - Run with ProptestConfig::with_cases(100)

use proptest::prelude::*;
use training_summary::metrics::summarize_metrics;
use training_summary::timing::summarize_times;
use training_summary::{
    ConfusionRecord, EpochMetrics, EpochTimeRecord, Report, Seconds, TrainTimeRecord,
    ZeroDivisionPolicy,
};

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Confusion matrix with tp >= 1 so every denominator is positive
fn arb_confusion() -> impl Strategy<Value = ConfusionRecord> {
    (1u32..1000, 0u32..1000, 0u32..1000, 0u32..1000).prop_map(|(tp, tn, fp, fn_)| {
        ConfusionRecord::new(f64::from(tp), f64::from(tn), f64::from(fp), f64::from(fn_))
    })
}

fn arb_confusions() -> impl Strategy<Value = Vec<ConfusionRecord>> {
    prop::collection::vec(arb_confusion(), 1..30)
}

/// Monotonic epoch spans built from (gap, duration) pairs
fn arb_epoch_times() -> impl Strategy<Value = Vec<EpochTimeRecord>> {
    (0i64..1_000_000, prop::collection::vec((0i64..500, 0i64..5000), 1..30)).prop_map(
        |(origin, spans)| {
            let mut cursor = origin;
            spans
                .into_iter()
                .map(|(gap, duration)| {
                    let start = cursor + gap;
                    cursor = start + duration;
                    EpochTimeRecord::new(start, cursor)
                })
                .collect()
        },
    )
}

fn f1_of(record: &ConfusionRecord) -> f64 {
    EpochMetrics::from_confusion(record, 0, ZeroDivisionPolicy::Fail)
        .unwrap()
        .f1()
        .unwrap()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: the selected epoch's f1 dominates every other epoch's f1
    #[test]
    fn prop_best_f1_dominates(records in arb_confusions()) {
        let best = summarize_metrics(&records, ZeroDivisionPolicy::Fail).unwrap();
        let best_f1 = best.f1().unwrap();

        for record in &records {
            prop_assert!(best_f1 >= f1_of(record));
        }
    }

    /// Property: the selected epoch is the first index reaching the maximum
    #[test]
    fn prop_tie_break_lowest_index(records in arb_confusions()) {
        let best = summarize_metrics(&records, ZeroDivisionPolicy::Fail).unwrap();
        let best_f1 = best.f1().unwrap();

        for record in &records[..best.epoch()] {
            prop_assert!(f1_of(record) < best_f1);
        }
        prop_assert_eq!(f1_of(&records[best.epoch()]), best_f1);
    }

    /// Property: duplicating the whole sequence never moves the winner
    #[test]
    fn prop_duplicated_sequence_keeps_first_winner(records in arb_confusions()) {
        let single = summarize_metrics(&records, ZeroDivisionPolicy::Fail).unwrap();
        let doubled: Vec<_> = records.iter().chain(records.iter()).copied().collect();
        let twice = summarize_metrics(&doubled, ZeroDivisionPolicy::Fail).unwrap();

        prop_assert_eq!(single.epoch(), twice.epoch());
    }

    /// Property: all derived metrics lie in [0, 1] for non-degenerate inputs
    #[test]
    fn prop_metrics_are_fractions(record in arb_confusion()) {
        let m = EpochMetrics::from_confusion(&record, 0, ZeroDivisionPolicy::Fail).unwrap();
        for value in [m.accuracy(), m.precision(), m.recall(), m.f1()] {
            let value = value.unwrap();
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    /// Property: one testing gap fewer than epochs, one training span per epoch
    #[test]
    fn prop_testing_len_is_epochs_minus_one(epochs in arb_epoch_times()) {
        let summary = summarize_times(&epochs, None).unwrap();
        prop_assert_eq!(summary.training_per_epoch_secs.len(), epochs.len());
        prop_assert_eq!(summary.testing_per_epoch_secs.len(), epochs.len() - 1);
    }

    /// Property: without train times the total spans first start to last end
    #[test]
    fn prop_fallback_total_time(epochs in arb_epoch_times()) {
        let summary = summarize_times(&epochs, None).unwrap();
        let first = epochs.first().unwrap();
        let last = epochs.last().unwrap();

        prop_assert_eq!(summary.total_time, last.end - first.start);
        prop_assert!(summary.data_loading_secs.is_none());
    }

    /// Property: with train times, total and data loading come from the run span
    #[test]
    fn prop_train_times_total(
        epochs in arb_epoch_times(),
        lead in 0i64..1000,
        tail in 0i64..1000
    ) {
        let first = epochs.first().unwrap();
        let last = epochs.last().unwrap();
        let train = TrainTimeRecord::new(
            first.start - Seconds::Int(lead),
            last.end - Seconds::Int(-tail),
        );

        let summary = summarize_times(&epochs, Some(&train)).unwrap();
        prop_assert_eq!(summary.total_time, train.end - train.start);
        prop_assert_eq!(summary.data_loading_secs, Some(Seconds::Int(lead)));
    }

    /// Property: training spans and testing gaps add up to the epoch span
    #[test]
    fn prop_spans_and_gaps_sum_to_total(epochs in arb_epoch_times()) {
        let summary = summarize_times(&epochs, None).unwrap();
        let sum: f64 = summary
            .training_per_epoch_secs
            .iter()
            .chain(summary.testing_per_epoch_secs.iter())
            .map(|s| s.as_f64())
            .sum();
        prop_assert!((sum - summary.total_time.as_f64()).abs() < 1e-6);
    }

    /// Property: serializing then deserializing the report is lossless
    #[test]
    fn prop_report_round_trip(records in arb_confusions(), epochs in arb_epoch_times()) {
        let report = Report {
            metrics: summarize_metrics(&records, ZeroDivisionPolicy::Fail).unwrap(),
            times: summarize_times(&epochs, None).unwrap(),
        };
        let json = report.to_json().unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(&parsed, &report);
        prop_assert_eq!(parsed.to_json().unwrap(), json);
    }
}
