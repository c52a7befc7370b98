//! Engine configuration: per-period seeds, tooltip metrics and donut spacing.
//!
//! The defaults reproduce the reference dashboards. Hosts may override any
//! subset through JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};

use crate::core::error::EngineError;
use crate::survey::Period;

/// Generation inputs for one reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodSettings {
    pub seed: u64,
    pub day_count: usize,
    /// Added to each metric's base score for this period.
    pub score_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodTable {
    pub last_30_days: PeriodSettings,
    pub last_3_months: PeriodSettings,
    pub last_6_months: PeriodSettings,
    pub all_time: PeriodSettings,
}

impl PeriodTable {
    pub fn get(&self, period: Period) -> &PeriodSettings {
        match period {
            Period::Last30Days => &self.last_30_days,
            Period::Last3Months => &self.last_3_months,
            Period::Last6Months => &self.last_6_months,
            Period::AllTime => &self.all_time,
        }
    }
}

impl Default for PeriodTable {
    fn default() -> Self {
        Self {
            last_30_days: PeriodSettings {
                seed: 55,
                day_count: 31,
                score_offset: 0.0,
            },
            last_3_months: PeriodSettings {
                seed: 89,
                day_count: 90,
                score_offset: -3.0,
            },
            last_6_months: PeriodSettings {
                seed: 144,
                day_count: 182,
                score_offset: 2.0,
            },
            all_time: PeriodSettings {
                seed: 233,
                day_count: 365,
                score_offset: -5.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub width: f64,
    /// Vertical distance between the pointer and the tooltip's top edge.
    pub pointer_gap: f64,
    /// Horizontal distance from the hovered item for edge-snapped tooltips.
    pub edge_margin: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            width: 180.0,
            pointer_gap: 12.0,
            edge_margin: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Final day covered by every period, `YYYY-MM-DD`.
    pub last_day: String,
    pub periods: PeriodTable,
    pub tooltip: TooltipConfig,
    pub donut_gap_degrees: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            last_day: "2025-03-31".to_string(),
            periods: PeriodTable::default(),
            tooltip: TooltipConfig::default(),
            donut_gap_degrees: 3.0,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON override document.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.last_day()?;
        for period in Period::ALL {
            if self.periods.get(period).day_count == 0 {
                return Err(EngineError::EmptyPeriod {
                    label: period.label().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn last_day(&self) -> Result<Date, EngineError> {
        Date::parse(&self.last_day, &format_description!("[year]-[month]-[day]")).map_err(
            |source| EngineError::AnchorDate {
                value: self.last_day.clone(),
                source,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        let last = config.last_day().unwrap();
        assert_eq!((last.year(), last.month(), last.day()), (2025, Month::March, 31));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "donut_gap_degrees": 2.5 }"#).unwrap();
        assert_eq!(config.donut_gap_degrees, 2.5);
        assert_eq!(config.periods.get(Period::Last30Days).seed, 55);
        assert_eq!(config.tooltip.width, 180.0);
    }

    #[test]
    fn rejects_bad_anchor_date() {
        let err = EngineConfig::from_json(r#"{ "last_day": "31/03/2025" }"#).unwrap_err();
        assert!(matches!(err, EngineError::AnchorDate { .. }));
    }

    #[test]
    fn rejects_empty_period() {
        let raw = r#"{ "periods": { "all_time": { "seed": 1, "day_count": 0, "score_offset": 0 } } }"#;
        let err = EngineConfig::from_json(raw).unwrap_err();
        assert!(matches!(err, EngineError::EmptyPeriod { label } if label == "All time"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = EngineConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }
}
