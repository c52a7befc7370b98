//! Metric kinds and their compile-time generation profiles.
//!
//! CSAT, NPS and multiple-choice questions share one dataset shape; a
//! [`MetricProfile`] holds everything that differs between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Csat,
    Nps,
    Choice,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::Choice, MetricKind::Nps, MetricKind::Csat];

    pub fn name(self) -> &'static str {
        match self {
            MetricKind::Csat => "csat",
            MetricKind::Nps => "nps",
            MetricKind::Choice => "choice",
        }
    }

    pub fn profile(self) -> &'static MetricProfile {
        match self {
            MetricKind::Csat => &CSAT,
            MetricKind::Nps => &NPS,
            MetricKind::Choice => &CHOICE,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            MetricKind::Choice => 0,
            MetricKind::Nps => 1,
            MetricKind::Csat => 2,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::UnknownMetricKind {
                name: s.to_string(),
            })
    }
}

/// `floor(rng() * range) + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub range: u32,
    pub offset: u32,
}

impl Draw {
    pub const fn new(range: u32, offset: u32) -> Self {
        Self { range, offset }
    }
}

/// Category a scale point belongs to on classified metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseClass {
    Detractor,
    Passive,
    Promoter,
}

/// A contiguous run of scale points mapped to one class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassBand {
    pub class: ResponseClass,
    pub label: &'static str,
    pub color: &'static str,
    /// Number of consecutive buckets in this band.
    pub buckets: usize,
    /// Daily raw count draw for the stacked series.
    pub stack_draw: Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketLabels {
    Numeric,
    Letters,
}

/// How scale points turn into display categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grouping {
    /// One category per scale point.
    PerBucket {
        labels: BucketLabels,
        palette: &'static [&'static str],
        descending: bool,
        /// Answer text per scale point, in scale order; empty for rating scales.
        answers: &'static [&'static str],
    },
    /// Buckets are assigned to class bands by index, in band order.
    Classified(&'static [ClassBand]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricProfile {
    pub kind: MetricKind,
    pub bucket_count: usize,
    pub bucket_draw: Draw,
    pub grouping: Grouping,
    /// Band that median and average are drawn from.
    pub summary_range: (f64, f64),
    pub trend_value: Draw,
    pub trend_responses: Draw,
    /// Whether the dataset carries a per-day stacked class breakdown.
    pub stacked: bool,
    pub gauge_min: f64,
    pub gauge_max: f64,
    pub base_score: f64,
    /// Accent for single-series bars and unclassified gauges.
    pub accent: &'static str,
}

impl MetricProfile {
    pub fn class_bands(&self) -> &'static [ClassBand] {
        match self.grouping {
            Grouping::Classified(bands) => bands,
            Grouping::PerBucket { .. } => &[],
        }
    }

    /// Class of the bucket at `index` (zero-based), assigned statically by position.
    pub fn class_of(&self, index: usize) -> Option<ResponseClass> {
        let mut end = 0;
        for band in self.class_bands() {
            end += band.buckets;
            if index < end {
                return Some(band.class);
            }
        }
        None
    }

    pub fn band(&self, class: ResponseClass) -> Option<&'static ClassBand> {
        self.class_bands().iter().find(|band| band.class == class)
    }

    pub fn clamp_score(&self, score: f64) -> f64 {
        score.clamp(self.gauge_min, self.gauge_max)
    }
}

pub const CSAT_ACCENT: &str = "#A52E9D";
pub const CHOICE_ACCENT: &str = "#1966CA";
pub const TRACK_COLOR: &str = "#E8E8E8";

const NPS_BANDS: [ClassBand; 3] = [
    ClassBand {
        class: ResponseClass::Detractor,
        label: "Detractors",
        color: "#D8D8D8",
        buckets: 6,
        stack_draw: Draw::new(15, 5),
    },
    ClassBand {
        class: ResponseClass::Passive,
        label: "Passives",
        color: "#FB813F",
        buckets: 2,
        stack_draw: Draw::new(20, 10),
    },
    ClassBand {
        class: ResponseClass::Promoter,
        label: "Promoters",
        color: "#27A674",
        buckets: 2,
        stack_draw: Draw::new(40, 20),
    },
];

const CSAT_PALETTE: [&str; 1] = [CSAT_ACCENT];
const CHOICE_PALETTE: [&str; 4] = ["#1966CA", "#6B4FBB", "#2DB88A", "#E5AA28"];
const CHOICE_ANSWERS: [&str; 4] = [
    "What we gonna do today",
    "I think we should try play basketball",
    "Well, I probably agree with you",
    "Definitely",
];

static CSAT: MetricProfile = MetricProfile {
    kind: MetricKind::Csat,
    bucket_count: 5,
    bucket_draw: Draw::new(20, 2),
    grouping: Grouping::PerBucket {
        labels: BucketLabels::Numeric,
        palette: &CSAT_PALETTE,
        descending: true,
        answers: &[],
    },
    summary_range: (3.5, 4.7),
    trend_value: Draw::new(70, 10),
    trend_responses: Draw::new(25, 5),
    stacked: false,
    gauge_min: 0.0,
    gauge_max: 100.0,
    base_score: 72.0,
    accent: CSAT_ACCENT,
};

static NPS: MetricProfile = MetricProfile {
    kind: MetricKind::Nps,
    bucket_count: 10,
    bucket_draw: Draw::new(70, 5),
    grouping: Grouping::Classified(&NPS_BANDS),
    summary_range: (7.0, 9.0),
    trend_value: Draw::new(60, 10),
    trend_responses: Draw::new(30, 10),
    stacked: true,
    gauge_min: -100.0,
    gauge_max: 100.0,
    base_score: 48.0,
    accent: "#27A674",
};

static CHOICE: MetricProfile = MetricProfile {
    kind: MetricKind::Choice,
    bucket_count: 4,
    bucket_draw: Draw::new(120, 10),
    grouping: Grouping::PerBucket {
        labels: BucketLabels::Letters,
        palette: &CHOICE_PALETTE,
        descending: false,
        answers: &CHOICE_ANSWERS,
    },
    summary_range: (1.5, 3.5),
    trend_value: Draw::new(60, 20),
    trend_responses: Draw::new(30, 10),
    stacked: false,
    gauge_min: 0.0,
    gauge_max: 100.0,
    base_score: 50.0,
    accent: CHOICE_ACCENT,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nps_classes_follow_bucket_position() {
        let nps = MetricKind::Nps.profile();
        let classes: Vec<_> = (0..10).map(|i| nps.class_of(i).unwrap()).collect();
        assert!(classes[..6].iter().all(|c| *c == ResponseClass::Detractor));
        assert!(classes[6..8].iter().all(|c| *c == ResponseClass::Passive));
        assert!(classes[8..].iter().all(|c| *c == ResponseClass::Promoter));
        assert_eq!(nps.class_of(10), None);
    }

    #[test]
    fn class_bands_cover_the_scale() {
        for kind in MetricKind::ALL {
            let profile = kind.profile();
            let bands = profile.class_bands();
            if !bands.is_empty() {
                let covered: usize = bands.iter().map(|b| b.buckets).sum();
                assert_eq!(covered, profile.bucket_count, "{kind}");
            }
        }
    }

    #[test]
    fn unclassified_kinds_have_no_class() {
        assert_eq!(MetricKind::Csat.profile().class_of(0), None);
        assert_eq!(MetricKind::Choice.profile().class_of(3), None);
    }

    #[test]
    fn parses_kind_names() {
        assert_eq!("NPS".parse::<MetricKind>().unwrap(), MetricKind::Nps);
        assert!(matches!(
            "ces".parse::<MetricKind>(),
            Err(EngineError::UnknownMetricKind { .. })
        ));
    }

    #[test]
    fn scores_clamp_to_gauge_range() {
        assert_eq!(MetricKind::Nps.profile().clamp_score(-150.0), -100.0);
        assert_eq!(MetricKind::Csat.profile().clamp_score(120.0), 100.0);
    }
}
