//! The four fixed reporting periods offered by the period selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Period {
    #[default]
    Last30Days,
    Last3Months,
    Last6Months,
    AllTime,
}

impl Period {
    /// Selector order.
    pub const ALL: [Period; 4] = [
        Period::Last30Days,
        Period::Last3Months,
        Period::Last6Months,
        Period::AllTime,
    ];

    /// Canonical label supplied by the period selector.
    pub fn label(self) -> &'static str {
        match self {
            Period::Last30Days => "Last 30 days",
            Period::Last3Months => "Last 3 months",
            Period::Last6Months => "Last 6 months",
            Period::AllTime => "All time",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, EngineError> {
        Self::ALL
            .into_iter()
            .find(|period| period.label() == label)
            .ok_or_else(|| EngineError::UnknownPeriod {
                label: label.to_string(),
            })
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Period::Last30Days => 0,
            Period::Last3Months => 1,
            Period::Last6Months => 2,
            Period::AllTime => 3,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_selector() {
        for period in Period::ALL {
            assert_eq!(Period::from_label(period.label()).unwrap(), period);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Last week".parse::<Period>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownPeriod { label } if label == "Last week"));
    }

    #[test]
    fn indices_are_dense() {
        let indices: Vec<usize> = Period::ALL.iter().map(|p| p.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
