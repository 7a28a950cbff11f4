//! Property tests for summary and distribution invariants.

use dprof_model::{Column, ProfileOptions, Table};
use dprof_stats::{column_distribution, compute_summary, correlation_matrix};
use proptest::prelude::*;

fn numeric_values() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(
        prop::option::weighted(0.8, (-1000i32..1000).prop_map(f64::from)),
        1..200,
    )
}

fn text_values() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::weighted(0.9, "[a-e]{1,2}"), 1..200)
}

proptest! {
    #[test]
    fn numeric_distribution_sums_to_100(values in numeric_values()) {
        let rows = values.len();
        let column = Column::numeric("n", "f64", values);
        let dist = column_distribution(&column, rows, &ProfileOptions::default());
        prop_assert!((dist.total_percentage() - 100.0).abs() < 0.01);
    }

    #[test]
    fn text_distribution_sums_to_100(values in text_values()) {
        let rows = values.len();
        let column = Column::text("t", "str", values);
        let dist = column_distribution(&column, rows, &ProfileOptions::default());
        prop_assert!((dist.total_percentage() - 100.0).abs() < 0.01);
    }

    #[test]
    fn distribution_is_sorted_descending(values in numeric_values()) {
        let rows = values.len();
        let column = Column::numeric("n", "f64", values);
        let dist = column_distribution(&column, rows, &ProfileOptions::default());
        for pair in dist.entries.windows(2) {
            prop_assert!(pair[0].percentage >= pair[1].percentage);
        }
    }

    #[test]
    fn range_and_extreme_percentiles_match_min_max(values in numeric_values()) {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        prop_assume!(!present.is_empty());
        let min = present.iter().copied().fold(f64::INFINITY, f64::min);
        let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let table = Table::new(vec![Column::numeric("n", "f64", values)]).unwrap();
        let summary = compute_summary(&table, &ProfileOptions::default());
        let stats = summary.get("n").unwrap().numeric.unwrap();
        prop_assert_eq!(stats.p0, min);
        prop_assert_eq!(stats.p100, max);
        prop_assert_eq!(stats.range, max - min);
        prop_assert!(stats.p25 <= stats.median && stats.median <= stats.p75);
    }

    #[test]
    fn null_percentage_matches_rounded_share(values in numeric_values()) {
        let rows = values.len();
        let nulls = values.iter().filter(|v| v.is_none()).count();
        let table = Table::new(vec![Column::numeric("n", "f64", values)]).unwrap();
        let summary = compute_summary(&table, &ProfileOptions::default());
        let pct = summary.get("n").unwrap().null_percent;
        let expected = (nulls as f64 / rows as f64 * 100.0).round();
        prop_assert!((pct.value() - expected).abs() <= 1.0);
    }

    #[test]
    fn correlation_is_symmetric(
        a in prop::collection::vec((-50i32..50).prop_map(|v| Some(f64::from(v))), 3..40),
        seed in 1i32..7,
    ) {
        let b: Vec<Option<f64>> = a
            .iter()
            .enumerate()
            .map(|(i, v)| v.map(|x| x * f64::from(seed) + (i % 3) as f64))
            .collect();
        let table = Table::new(vec![
            Column::numeric("a", "f64", a),
            Column::numeric("b", "f64", b),
        ])
        .unwrap();
        let corr = correlation_matrix(&table);
        let (ab, ba) = (corr.get(0, 1), corr.get(1, 0));
        prop_assert!(ab.is_nan() && ba.is_nan() || ab == ba);
        for i in 0..corr.size() {
            let d = corr.get(i, i);
            prop_assert!(d.is_nan() || d == 1.0);
        }
    }
}
