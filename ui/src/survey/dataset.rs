//! Deterministic synthetic datasets for one (metric kind, period) pair.

use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date, Duration};

use crate::core::rng::SeededSequence;

use super::kind::{BucketLabels, Draw, Grouping, MetricKind, MetricProfile, ResponseClass};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub color: String,
    pub responses: u32,
    /// Answer text for multiple-choice options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<ResponseClass>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBucket {
    /// Scale point, starting at 1.
    pub bucket: u32,
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<ResponseClass>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: u32,
    pub responses: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackComponent {
    pub class: ResponseClass,
    /// Whole percent of the entry total.
    pub share: u32,
    pub raw: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackedEntry {
    pub label: String,
    pub components: Vec<StackComponent>,
    pub total: u32,
}

impl StackedEntry {
    pub fn component(&self, class: ResponseClass) -> Option<&StackComponent> {
        self.components.iter().find(|c| c.class == class)
    }

    /// Promoter share minus detractor share.
    pub fn net_score(&self) -> i32 {
        let share = |class| self.component(class).map_or(0, |c| c.share as i32);
        share(ResponseClass::Promoter) - share(ResponseClass::Detractor)
    }
}

/// Immutable snapshot backing every chart of one metric for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDataset {
    pub kind: MetricKind,
    pub period_label: String,
    pub score: f64,
    pub median: f64,
    pub average: f64,
    pub total: u32,
    pub categories: Vec<Category>,
    pub histogram: Vec<HistogramBucket>,
    pub trend: Vec<TrendPoint>,
    pub stacked: Vec<StackedEntry>,
}

impl MetricDataset {
    /// Generates a dataset from `seed`.
    ///
    /// Values are drawn in a fixed order: bucket counts, median, average,
    /// the daily trend (value then responses per day) and finally the daily
    /// stacked components in class order. Reordering any draw changes every
    /// value after it.
    pub fn build(
        kind: MetricKind,
        seed: u64,
        period_label: &str,
        day_count: usize,
        base_score: f64,
        last_day: Date,
    ) -> Self {
        let profile = kind.profile();
        let mut rng = SeededSequence::new(seed);

        let counts: Vec<u32> = (0..profile.bucket_count)
            .map(|_| draw(&mut rng, profile.bucket_draw))
            .collect();

        let (low, high) = profile.summary_range;
        let median = round_tenth(rng.draw_between(low, high));
        let average = round_tenth(rng.draw_between(low, high));

        let labels = day_labels(last_day, day_count);

        let trend = labels
            .iter()
            .map(|label| {
                let value = draw(&mut rng, profile.trend_value);
                let responses = draw(&mut rng, profile.trend_responses);
                TrendPoint {
                    label: label.clone(),
                    value,
                    responses,
                }
            })
            .collect();

        let stacked = if profile.stacked {
            labels
                .iter()
                .map(|label| stacked_entry(profile, &mut rng, label))
                .collect()
        } else {
            Vec::new()
        };

        let histogram: Vec<HistogramBucket> = counts
            .iter()
            .enumerate()
            .map(|(index, &value)| HistogramBucket {
                bucket: index as u32 + 1,
                value,
                class: profile.class_of(index),
            })
            .collect();

        let categories = categories(profile, &counts);
        let total = counts.iter().sum();

        tracing::debug!(
            kind = %kind,
            period = period_label,
            seed,
            total,
            days = day_count,
            "built metric dataset"
        );

        Self {
            kind,
            period_label: period_label.to_string(),
            score: profile.clamp_score(base_score),
            median,
            average,
            total,
            categories,
            histogram,
            trend,
            stacked,
        }
    }

    pub fn profile(&self) -> &'static MetricProfile {
        self.kind.profile()
    }

    pub fn has_stacked(&self) -> bool {
        !self.stacked.is_empty()
    }

    /// Largest single bucket count, used to scale bar tracks.
    pub fn peak_bucket(&self) -> u32 {
        self.histogram.iter().map(|b| b.value).max().unwrap_or(0)
    }
}

fn draw(rng: &mut SeededSequence, draw: Draw) -> u32 {
    rng.draw_count(draw.range, draw.offset)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn stacked_entry(profile: &MetricProfile, rng: &mut SeededSequence, label: &str) -> StackedEntry {
    let bands = profile.class_bands();
    let raw: Vec<u32> = bands.iter().map(|band| draw(rng, band.stack_draw)).collect();
    let shares = percent_shares(&raw);
    let components = bands
        .iter()
        .zip(raw.iter().zip(shares))
        .map(|(band, (&raw, share))| StackComponent {
            class: band.class,
            share,
            raw,
        })
        .collect();
    StackedEntry {
        label: label.to_string(),
        components,
        total: raw.iter().sum(),
    }
}

fn categories(profile: &MetricProfile, counts: &[u32]) -> Vec<Category> {
    match profile.grouping {
        Grouping::PerBucket {
            labels,
            palette,
            descending,
            answers,
        } => {
            let mut order: Vec<usize> = (0..counts.len()).collect();
            if descending {
                order.reverse();
            }
            order
                .into_iter()
                .enumerate()
                .map(|(position, index)| Category {
                    label: bucket_label(labels, index),
                    color: palette
                        .get(position % palette.len().max(1))
                        .copied()
                        .unwrap_or(profile.accent)
                        .to_string(),
                    responses: counts[index],
                    text: answers.get(index).map(|text| text.to_string()),
                    class: None,
                })
                .collect()
        }
        Grouping::Classified(bands) => {
            let mut start = 0;
            bands
                .iter()
                .map(|band| {
                    let end = (start + band.buckets).min(counts.len());
                    let responses = counts[start..end].iter().sum();
                    start = end;
                    Category {
                        label: band.label.to_string(),
                        color: band.color.to_string(),
                        responses,
                        text: None,
                        class: Some(band.class),
                    }
                })
                .collect()
        }
    }
}

fn bucket_label(labels: BucketLabels, index: usize) -> String {
    match labels {
        BucketLabels::Numeric => (index + 1).to_string(),
        BucketLabels::Letters => char::from(b'A' + (index % 26) as u8).to_string(),
    }
}

/// `count` consecutive calendar days ending on `last_day`, oldest first.
pub fn day_labels(last_day: Date, count: usize) -> Vec<String> {
    let format = format_description!("[month repr:short] [day padding:none]");
    (0..count)
        .rev()
        .map(|back| {
            let day = last_day.saturating_sub(Duration::days(back as i64));
            day.format(&format).unwrap_or_else(|_| day.to_string())
        })
        .collect()
}

/// Whole-percent shares of `values` that always sum to 100 (largest remainder).
/// An all-zero input yields all-zero shares.
pub fn percent_shares(values: &[u32]) -> Vec<u32> {
    let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
    if total == 0 {
        return vec![0; values.len()];
    }

    let mut shares: Vec<u32> = Vec::with_capacity(values.len());
    let mut remainders: Vec<(u64, usize)> = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        let scaled = u64::from(value) * 100;
        shares.push((scaled / total) as u32);
        remainders.push((scaled % total, index));
    }

    let assigned: u32 = shares.iter().sum();
    // Stable sort keeps earlier entries ahead on equal remainders.
    remainders.sort_by(|a, b| b.0.cmp(&a.0));
    for &(_, index) in remainders.iter().take(100usize.saturating_sub(assigned as usize)) {
        shares[index] += 1;
    }
    shares
}
