//! The (metric kind, period) dataset cache.
//!
//! Built once, eagerly, before any chart becomes interactive. Entries are
//! shared read-only through `Rc`; switching period only changes which entry
//! a view reads.

use std::rc::Rc;

use crate::core::{config::EngineConfig, error::EngineError};

use super::{dataset::MetricDataset, kind::MetricKind, period::Period};

const PERIODS: usize = Period::ALL.len();
const KINDS: usize = MetricKind::ALL.len();

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetCatalog {
    entries: [[Rc<MetricDataset>; PERIODS]; KINDS],
}

impl DatasetCatalog {
    pub fn build(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let last_day = config.last_day()?;

        let entries = std::array::from_fn(|k| {
            let kind = MetricKind::ALL[k];
            std::array::from_fn(|p| {
                let period = Period::ALL[p];
                let settings = config.periods.get(period);
                Rc::new(MetricDataset::build(
                    kind,
                    settings.seed,
                    period.label(),
                    settings.day_count,
                    kind.profile().base_score + settings.score_offset,
                    last_day,
                ))
            })
        });

        tracing::info!(
            datasets = KINDS * PERIODS,
            last_day = %last_day,
            "dataset catalog ready"
        );
        Ok(Self { entries })
    }

    pub fn get(&self, kind: MetricKind, period: Period) -> Rc<MetricDataset> {
        Rc::clone(&self.entries[kind.index()][period.index()])
    }

    /// Resolves a period selector label.
    pub fn for_label(&self, kind: MetricKind, label: &str) -> Result<Rc<MetricDataset>, EngineError> {
        let period = Period::from_label(label)?;
        Ok(self.get(kind, period))
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKind, Period, &MetricDataset)> + '_ {
        MetricKind::ALL.into_iter().flat_map(move |kind| {
            Period::ALL
                .into_iter()
                .map(move |period| (kind, period, &*self.entries[kind.index()][period.index()]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_is_built_with_its_period_label() {
        let catalog = DatasetCatalog::build(&EngineConfig::default()).unwrap();
        assert_eq!(catalog.iter().count(), 12);
        for (kind, period, data) in catalog.iter() {
            assert_eq!(data.kind, kind);
            assert_eq!(data.period_label, period.label());
        }
    }

    #[test]
    fn get_shares_the_cached_entry() {
        let catalog = DatasetCatalog::build(&EngineConfig::default()).unwrap();
        let a = catalog.get(MetricKind::Nps, Period::AllTime);
        let b = catalog.for_label(MetricKind::Nps, "All time").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(a.trend.len(), 365);
    }

    #[test]
    fn unknown_label_is_an_error() {
        let catalog = DatasetCatalog::build(&EngineConfig::default()).unwrap();
        assert!(matches!(
            catalog.for_label(MetricKind::Csat, "Yesterday"),
            Err(EngineError::UnknownPeriod { .. })
        ));
    }

    #[test]
    fn score_applies_period_offset() {
        let catalog = DatasetCatalog::build(&EngineConfig::default()).unwrap();
        assert_eq!(catalog.get(MetricKind::Csat, Period::Last30Days).score, 72.0);
        assert_eq!(catalog.get(MetricKind::Csat, Period::Last3Months).score, 69.0);
        assert_eq!(catalog.get(MetricKind::Nps, Period::AllTime).score, 43.0);
    }
}
