//! Daily score trend, one bar per day of the period.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::format;
use crate::i18n;
use crate::survey::{MetricDataset, MetricKind};
use crate::t;

use super::geometry::bar_extents;
use super::placement::AnchorStrategy;
use super::plot::{slot_class, use_chart_hover, PlotArea};
use super::tooltip::{ChartTooltip, TooltipRow};

pub const TOOLTIP_HEIGHT: f64 = 100.0;

/// Bar heights in percent of the plot height.
pub fn trend_heights(dataset: &MetricDataset) -> Vec<f64> {
    let values: Vec<u32> = dataset.trend.iter().map(|p| p.value).collect();
    bar_extents(&values, 100.0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendTip {
    pub score: String,
    pub responses: u32,
    pub day: String,
}

pub fn trend_tip(dataset: &MetricDataset, index: usize) -> Option<TrendTip> {
    let point = dataset.trend.get(index)?;
    let score = match dataset.kind {
        MetricKind::Csat => format::format_percent(point.value),
        MetricKind::Nps | MetricKind::Choice => point.value.to_string(),
    };
    Some(TrendTip {
        score,
        responses: point.responses,
        day: point.label.clone(),
    })
}

/// Indices of the day labels printed under the axis; at most `max` of them.
pub fn label_ticks(len: usize, max: usize) -> Vec<usize> {
    if len == 0 || max == 0 {
        return Vec::new();
    }
    let step = len.div_ceil(max).max(1);
    let mut ticks: Vec<usize> = (0..len).step_by(step).collect();
    if ticks.last() != Some(&(len - 1)) && ticks.len() < max {
        ticks.push(len - 1);
    }
    ticks
}

#[component]
pub fn Trend(dataset: Rc<MetricDataset>) -> Element {
    let hover = use_chart_hover(AnchorStrategy::CenterClamp, TOOLTIP_HEIGHT);
    let heights = trend_heights(&dataset);
    let color = dataset.profile().accent;
    let ticks: Vec<(usize, String)> = label_ticks(dataset.trend.len(), 6)
        .into_iter()
        .map(|i| (i, dataset.trend[i].label.clone()))
        .collect();
    let peak = dataset.trend.iter().map(|p| p.value).max().unwrap_or(0);
    let half = peak / 2;

    let tooltip = hover.hovered().and_then(|index| {
        let tip = trend_tip(&dataset, index)?;
        let anchor = hover.anchor(heights.len())?;
        Some((anchor, tip))
    });

    rsx! {
        div { class: "chart chart--trend",
            div { class: "chart__body",
                div { class: "chart__axis",
                    span { "{peak}" }
                    span { "{half}" }
                    span { "0" }
                }
                PlotArea { hover, class: "chart__plot--bars",
                    for (i, height) in heights.iter().copied().enumerate() {
                        div {
                            key: "{i}",
                            class: slot_class(hover.is_hovered(i)),
                            onmouseenter: move |_| hover.enter(i),
                            div {
                                class: "chart__bar",
                                style: format!("height: {height:.2}%; background-color: {color};"),
                            }
                        }
                    }
                    if let Some((anchor, tip)) = tooltip {
                        ChartTooltip {
                            anchor,
                            size: hover.tooltip,
                            rows: vec![
                                TooltipRow::new(i18n::metric_short(dataset.kind), tip.score),
                                TooltipRow::new(t!("tooltip-responses"), tip.responses),
                            ],
                            caption: tip.day,
                        }
                    }
                }
            }
            div { class: "chart__labels chart__labels--sparse",
                for (i, label) in ticks {
                    span { key: "{i}", class: "chart__label", "{label}" }
                }
            }
        }
    }
}
