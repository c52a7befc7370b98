use ui::core::{EngineConfig, EngineError};
use ui::survey::{DatasetCatalog, MetricKind, Period};

fn catalog() -> DatasetCatalog {
    DatasetCatalog::build(&EngineConfig::default()).unwrap()
}

#[test]
fn totals_agree_with_categories_and_histogram() {
    for (kind, period, dataset) in catalog().iter() {
        let by_category: u32 = dataset.categories.iter().map(|c| c.responses).sum();
        let by_bucket: u32 = dataset.histogram.iter().map(|b| b.value).sum();
        assert_eq!(dataset.total, by_category, "{kind} {period}");
        assert_eq!(dataset.total, by_bucket, "{kind} {period}");
    }
}

#[test]
fn stacked_shares_sum_to_one_hundred() {
    for (kind, period, dataset) in catalog().iter() {
        for entry in &dataset.stacked {
            let sum: u32 = entry.components.iter().map(|c| c.share).sum();
            assert!(sum.abs_diff(100) <= 1, "{kind} {period} {}: {sum}", entry.label);
        }
    }
}

#[test]
fn every_period_label_resolves() {
    let catalog = catalog();
    let config = EngineConfig::default();
    for kind in MetricKind::ALL {
        for period in Period::ALL {
            let dataset = catalog.for_label(kind, period.label()).unwrap();
            assert_eq!(dataset.period_label, period.label());
            assert_eq!(dataset.trend.len(), config.periods.get(period).day_count);
        }
    }
    assert!(matches!(
        catalog.for_label(MetricKind::Nps, "Yesterday"),
        Err(EngineError::UnknownPeriod { .. })
    ));
}

#[test]
fn invalid_configuration_is_rejected() {
    let bad_date = EngineConfig {
        last_day: "31/03/2025".to_string(),
        ..EngineConfig::default()
    };
    assert!(matches!(
        DatasetCatalog::build(&bad_date),
        Err(EngineError::AnchorDate { .. })
    ));

    let mut empty = EngineConfig::default();
    empty.periods.last_3_months.day_count = 0;
    assert!(matches!(
        DatasetCatalog::build(&empty),
        Err(EngineError::EmptyPeriod { .. })
    ));
}
