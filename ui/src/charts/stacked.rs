//! Daily class breakdown as 100% stacked columns.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::i18n;
use crate::survey::kind::ResponseClass;
use crate::survey::MetricDataset;
use crate::t;

use super::geometry::{stacked_boxes, SegmentBox};
use super::histogram::ClassLegend;
use super::placement::AnchorStrategy;
use super::plot::{slot_class, use_chart_hover, PlotArea};
use super::tooltip::{ChartTooltip, TooltipRow};

pub const TOOLTIP_HEIGHT: f64 = 140.0;

#[derive(Debug, Clone, PartialEq)]
pub struct StackedPiece {
    pub class: ResponseClass,
    pub color: &'static str,
    /// Offset and height in percent of the plot height, from the bottom.
    pub frame: SegmentBox,
}

impl StackedPiece {
    pub fn style(&self) -> String {
        format!(
            "bottom: {:.2}%; height: {:.2}%; background-color: {};",
            self.frame.offset, self.frame.height, self.color
        )
    }
}

pub fn stacked_columns(dataset: &MetricDataset) -> Vec<Vec<StackedPiece>> {
    let profile = dataset.profile();
    dataset
        .stacked
        .iter()
        .map(|entry| {
            let shares: Vec<u32> = entry.components.iter().map(|c| c.share).collect();
            entry
                .components
                .iter()
                .zip(stacked_boxes(&shares, 100.0))
                .map(|(component, frame)| StackedPiece {
                    class: component.class,
                    color: profile.band(component.class).map_or(profile.accent, |b| b.color),
                    frame,
                })
                .collect()
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackedTip {
    pub net: i32,
    pub total: u32,
    /// Raw count per class, in class order.
    pub counts: Vec<(ResponseClass, &'static str, u32)>,
    pub day: String,
}

pub fn stacked_tip(dataset: &MetricDataset, index: usize) -> Option<StackedTip> {
    let entry = dataset.stacked.get(index)?;
    let profile = dataset.profile();
    Some(StackedTip {
        net: entry.net_score(),
        total: entry.total,
        counts: entry
            .components
            .iter()
            .map(|c| {
                let color = profile.band(c.class).map_or(profile.accent, |b| b.color);
                (c.class, color, c.raw)
            })
            .collect(),
        day: entry.label.clone(),
    })
}

#[component]
pub fn Stacked(dataset: Rc<MetricDataset>) -> Element {
    let hover = use_chart_hover(AnchorStrategy::CenterClamp, TOOLTIP_HEIGHT);
    let columns = stacked_columns(&dataset);

    let tooltip = hover.hovered().and_then(|index| {
        let tip = stacked_tip(&dataset, index)?;
        let anchor = hover.anchor(columns.len())?;
        Some((anchor, tip))
    });

    rsx! {
        div { class: "chart chart--stacked",
            div { class: "chart__body",
                div { class: "chart__axis",
                    span { "100%" }
                    span { "50%" }
                    span { "0%" }
                }
                PlotArea { hover, class: "chart__plot--bars",
                    for (i, pieces) in columns.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: slot_class(hover.is_hovered(i)),
                            onmouseenter: move |_| hover.enter(i),
                            div { class: "chart__stack",
                                for piece in pieces.iter() {
                                    div {
                                        key: "{i}-{piece.frame.index}",
                                        class: "chart__stack-piece",
                                        style: piece.style(),
                                    }
                                }
                            }
                        }
                    }
                    if let Some((anchor, tip)) = tooltip {
                        ChartTooltip {
                            anchor,
                            size: hover.tooltip,
                            rows: tooltip_rows(&tip),
                            caption: tip.day,
                        }
                    }
                }
            }
            ClassLegend { dataset: dataset.clone() }
        }
    }
}

fn tooltip_rows(tip: &StackedTip) -> Vec<TooltipRow> {
    let mut rows = vec![
        TooltipRow::new(t!("tooltip-net-score"), tip.net),
        TooltipRow::new(t!("tooltip-total"), tip.total),
    ];
    rows.extend(
        tip.counts
            .iter()
            .map(|(class, color, raw)| TooltipRow::new(i18n::class_name(*class), raw).with_color(*color)),
    );
    rows
}
