//! Multiple-choice option bars, vertical or horizontal.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::format;
use crate::i18n;
use crate::survey::MetricDataset;
use crate::t;

use super::geometry::bar_extents;
use super::placement::{TooltipAnchor, TooltipSize};
use super::plot::{slot_class, ChartHover, PlotArea};
use super::tooltip::{ChartTooltip, TooltipRow};

pub const TOOLTIP_HEIGHT: f64 = 110.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BarOrientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceBar {
    pub label: String,
    pub color: String,
    /// Percent of the track, relative to the most chosen option.
    pub extent: f64,
}

impl ChoiceBar {
    fn style(&self, orientation: BarOrientation) -> String {
        let axis = match orientation {
            BarOrientation::Vertical => "height",
            BarOrientation::Horizontal => "width",
        };
        format!("{axis}: {:.2}%; background-color: {};", self.extent, self.color)
    }
}

pub fn choice_bars(dataset: &MetricDataset) -> Vec<ChoiceBar> {
    let values: Vec<u32> = dataset.categories.iter().map(|c| c.responses).collect();
    dataset
        .categories
        .iter()
        .zip(bar_extents(&values, 100.0))
        .map(|(category, extent)| ChoiceBar {
            label: category.label.clone(),
            color: category.color.clone(),
            extent,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceTip {
    pub option: String,
    pub responses: u32,
    pub share: u32,
}

/// Tooltip content shared by the bar and donut renderings.
pub fn choice_tip(dataset: &MetricDataset, index: usize) -> Option<ChoiceTip> {
    let category = dataset.categories.get(index)?;
    Some(ChoiceTip {
        option: category.label.clone(),
        responses: category.responses,
        share: format::share_percent(category.responses, dataset.total),
    })
}

#[component]
pub fn ChoiceTooltip(anchor: TooltipAnchor, size: TooltipSize, tip: ChoiceTip, period_label: String) -> Element {
    rsx! {
        ChartTooltip {
            anchor,
            size,
            rows: vec![
                TooltipRow::new(t!("tooltip-option"), &tip.option),
                TooltipRow::new(t!("tooltip-responses"), tip.responses),
                TooltipRow::new(t!("tooltip-share"), format::format_percent(tip.share)),
            ],
            caption: i18n::period_caption(&period_label),
        }
    }
}

/// Bars for the choice card. The card owns `hover` so its option rows can
/// drive the same highlight and tooltip.
#[component]
pub fn ChoiceBars(dataset: Rc<MetricDataset>, orientation: BarOrientation, hover: ChartHover) -> Element {
    let bars = choice_bars(&dataset);

    let tooltip = hover.hovered().and_then(|index| {
        let tip = choice_tip(&dataset, index)?;
        let anchor = match orientation {
            BarOrientation::Vertical => hover.anchor(bars.len())?,
            BarOrientation::Horizontal => horizontal_anchor(hover, &bars, index)?,
        };
        Some((anchor, tip))
    });

    let layout_class = match orientation {
        BarOrientation::Vertical => "chart__plot--bars",
        BarOrientation::Horizontal => "chart__plot--rows",
    };

    rsx! {
        div { class: "chart chart--choice",
            PlotArea { hover, class: layout_class,
                for (i, bar) in bars.iter().enumerate() {
                    div {
                        key: "{bar.label}",
                        class: slot_class(hover.is_hovered(i)),
                        onmouseenter: move |_| hover.enter(i),
                        if orientation == BarOrientation::Horizontal {
                            span { class: "chart__row-label", "{bar.label}" }
                            div { class: "chart__track",
                                div { class: "chart__bar", style: bar.style(orientation) }
                            }
                        } else {
                            div { class: "chart__bar chart__bar--wide", style: bar.style(orientation) }
                        }
                    }
                }
                if let Some((anchor, tip)) = tooltip {
                    ChoiceTooltip {
                        anchor,
                        size: hover.tooltip,
                        tip,
                        period_label: dataset.period_label.clone(),
                    }
                }
            }
            if orientation == BarOrientation::Vertical {
                div { class: "chart__labels",
                    for bar in bars.iter() {
                        span { key: "{bar.label}", class: "chart__label", "{bar.label}" }
                    }
                }
            }
        }
    }
}

/// Row label width plus the gap before the track; kept in step with
/// `.chart__row-label` and `.chart__plot--rows .chart__slot` in dashboard.css.
pub const ROW_LABEL_EXTENT: f64 = 32.0;

/// X of a horizontal bar's end inside a plot `plot_width` wide. The track
/// starts after the row label.
pub fn horizontal_bar_end(extent: f64, plot_width: f64) -> f64 {
    let track = (plot_width - ROW_LABEL_EXTENT).max(0.0);
    ROW_LABEL_EXTENT.min(plot_width) + extent / 100.0 * track
}

/// Horizontal bars grow from the left, so the tooltip centers on the bar's end.
fn horizontal_anchor(hover: ChartHover, bars: &[ChoiceBar], index: usize) -> Option<TooltipAnchor> {
    let bar = bars.get(index)?;
    hover.anchor_at(horizontal_bar_end(bar.extent, hover.bounds().width))
}
