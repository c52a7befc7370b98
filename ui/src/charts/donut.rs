//! Multiple-choice donut. Segments are separated by a fixed angular gap and
//! the tooltip snaps beside the hovered segment.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::survey::MetricDataset;

use super::bars::{choice_tip, ChoiceTooltip};
use super::geometry::{donut_segments, DonutFrame, Point};
use super::plot::{use_chart_settings, ChartHover, PlotArea};

fn stroke_width(active: bool) -> &'static str {
    if active {
        "17"
    } else {
        "14"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutArc {
    pub index: usize,
    pub path: String,
    pub color: String,
    /// Middle of the arc in SVG coordinates.
    pub mid: Point,
}

/// Arcs for every non-empty category, starting straight up and running clockwise.
pub fn donut_arcs(dataset: &MetricDataset, gap_degrees: f64, frame: DonutFrame) -> Vec<DonutArc> {
    let values: Vec<u32> = dataset.categories.iter().map(|c| c.responses).collect();
    donut_segments(&values, gap_degrees, 0.0)
        .into_iter()
        .filter_map(|segment| {
            let path = frame.arc_path(&segment)?;
            let color = dataset.categories.get(segment.index)?.color.clone();
            Some(DonutArc {
                index: segment.index,
                path,
                color,
                mid: frame.point_at(segment.mid_angle()),
            })
        })
        .collect()
}

/// Donut for the choice card; `hover` should use the edge-snap strategy.
#[component]
pub fn Donut(dataset: Rc<MetricDataset>, hover: ChartHover) -> Element {
    let settings = use_chart_settings();
    let frame = DonutFrame::STANDARD;
    let arcs = donut_arcs(&dataset, settings.donut_gap_degrees, frame);
    let size = frame.center * 2.0;

    let tooltip = hover.hovered().and_then(|index| {
        let tip = choice_tip(&dataset, index)?;
        let arc = arcs.iter().find(|arc| arc.index == index)?;
        // The ring is centered horizontally in the plot box.
        let item_x = hover.bounds().width / 2.0 + (arc.mid.x - frame.center);
        let anchor = hover.anchor_at(item_x)?;
        Some((anchor, tip))
    });

    rsx! {
        div { class: "chart chart--donut",
            PlotArea { hover, class: "chart__plot--center",
                svg {
                    width: "{size}",
                    height: "{size}",
                    view_box: "0 0 {size} {size}",
                    for (index, arc) in arcs.iter().map(|arc| (arc.index, arc)) {
                        path {
                            key: "{index}",
                            class: "chart__donut-arc",
                            d: "{arc.path}",
                            fill: "none",
                            stroke: "{arc.color}",
                            stroke_width: stroke_width(hover.is_hovered(index)),
                            onmouseenter: move |_| hover.enter(index),
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
        }
    }
}
