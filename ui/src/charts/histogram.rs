//! Per-scale-point response histogram.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::format;
use crate::i18n;
use crate::survey::MetricDataset;
use crate::t;

use super::geometry::bar_extents;
use super::placement::AnchorStrategy;
use super::plot::{slot_class, use_chart_hover, PlotArea};
use super::tooltip::{ChartTooltip, TooltipRow};

pub const TOOLTIP_HEIGHT: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBar {
    pub bucket: u32,
    /// Percent of the plot height.
    pub height: f64,
    pub color: &'static str,
}

impl HistogramBar {
    pub fn style(&self) -> String {
        format!("height: {:.2}%; background-color: {};", self.height, self.color)
    }
}

pub fn histogram_bars(dataset: &MetricDataset) -> Vec<HistogramBar> {
    let profile = dataset.profile();
    let values: Vec<u32> = dataset.histogram.iter().map(|b| b.value).collect();
    dataset
        .histogram
        .iter()
        .zip(bar_extents(&values, 100.0))
        .map(|(bucket, height)| HistogramBar {
            bucket: bucket.bucket,
            height,
            color: bucket
                .class
                .and_then(|class| profile.band(class))
                .map_or(profile.accent, |band| band.color),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramTip {
    pub responses: u32,
    /// Whole percent of the dataset total.
    pub share: u32,
}

pub fn histogram_tip(dataset: &MetricDataset, index: usize) -> Option<HistogramTip> {
    let bucket = dataset.histogram.get(index)?;
    Some(HistogramTip {
        responses: bucket.value,
        share: format::share_percent(bucket.value, dataset.total),
    })
}

#[component]
pub fn Histogram(dataset: Rc<MetricDataset>) -> Element {
    let hover = use_chart_hover(AnchorStrategy::CenterClamp, TOOLTIP_HEIGHT);
    let bars = histogram_bars(&dataset);
    let peak = dataset.peak_bucket();
    let half = peak / 2;

    let tooltip = hover.hovered().and_then(|index| {
        let tip = histogram_tip(&dataset, index)?;
        let anchor = hover.anchor(bars.len())?;
        Some((anchor, tip))
    });

    rsx! {
        div { class: "chart chart--histogram",
            div { class: "chart__body",
                div { class: "chart__axis",
                    span { "{peak}" }
                    span { "{half}" }
                    span { "0" }
                }
                PlotArea { hover, class: "chart__plot--bars",
                    div { class: "chart__grid",
                        div { class: "chart__gridline" }
                        div { class: "chart__gridline" }
                        div { class: "chart__gridline" }
                    }
                    for (i, bar) in bars.iter().enumerate() {
                        div {
                            key: "{bar.bucket}",
                            class: slot_class(hover.is_hovered(i)),
                            onmouseenter: move |_| hover.enter(i),
                            div {
                                class: "chart__bar chart__bar--narrow",
                                style: bar.style(),
                            }
                        }
                    }
                    if let Some((anchor, tip)) = tooltip {
                        ChartTooltip {
                            anchor,
                            size: hover.tooltip,
                            rows: vec![
                                TooltipRow::new(t!("tooltip-responses"), tip.responses),
                                TooltipRow::new(t!("tooltip-share"), format::format_percent(tip.share)),
                            ],
                            caption: i18n::period_caption(&dataset.period_label),
                        }
                    }
                }
            }
            div { class: "chart__labels",
                for bar in bars.iter() {
                    span { key: "{bar.bucket}", class: "chart__label", "{bar.bucket}" }
                }
            }
            ClassLegend { dataset: dataset.clone() }
        }
    }
}

/// Class swatches for classified metrics; renders nothing otherwise.
#[component]
pub fn ClassLegend(dataset: Rc<MetricDataset>) -> Element {
    let bands = dataset.profile().class_bands();
    rsx! {
        if !bands.is_empty() {
            div { class: "chart__legend",
                for band in bands.iter() {
                    div { key: "{band.label}", class: "chart__legend-item",
                        span { class: "chart__swatch", style: "background-color: {band.color};" }
                        span { {i18n::class_name(band.class)} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;
    use crate::survey::{DatasetCatalog, MetricKind, Period};

    fn dataset(kind: MetricKind) -> Rc<MetricDataset> {
        let catalog = DatasetCatalog::build(&EngineConfig::default()).unwrap();
        catalog.get(kind, Period::Last30Days)
    }

    #[test]
    fn nps_bars_take_class_colors() {
        let bars = histogram_bars(&dataset(MetricKind::Nps));
        assert_eq!(bars.len(), 10);
        assert_eq!(bars[0].color, "#D8D8D8");
        assert_eq!(bars[7].color, "#FB813F");
        assert_eq!(bars[9].color, "#27A674");
        assert!(bars.iter().any(|b| b.height == 100.0));
    }

    #[test]
    fn csat_tooltip_reports_share_of_total() {
        let data = dataset(MetricKind::Csat);
        let tip = histogram_tip(&data, 4).unwrap();
        assert_eq!(tip.responses, 8);
        assert_eq!(tip.share, format::share_percent(8, data.total));
        assert_eq!(histogram_tip(&data, 5), None);
    }
}
