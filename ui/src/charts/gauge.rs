//! Half-circle score gauge.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::format;
use crate::i18n;
use crate::survey::kind::{MetricKind, MetricProfile, TRACK_COLOR};
use crate::survey::MetricDataset;

use super::geometry::{gauge_angle, gauge_bands, AngleSpan, GaugeFrame, Point};

const INDICATOR_INSET: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeArc {
    pub path: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeLayout {
    pub angle: f64,
    /// Background arcs, drawn first and independent of the score.
    pub track: Vec<GaugeArc>,
    /// Filled portion for unclassified gauges.
    pub value: Option<GaugeArc>,
    pub indicator: Point,
}

pub fn gauge_layout(profile: &MetricProfile, score: f64, frame: GaugeFrame) -> GaugeLayout {
    let angle = gauge_angle(score, profile.gauge_min, profile.gauge_max);
    let bands = profile.class_bands();

    let (track, value) = if bands.is_empty() {
        let track = vec![GaugeArc {
            path: frame.arc_path(AngleSpan { start: 0.0, end: 180.0 }),
            color: TRACK_COLOR,
        }];
        let value = (angle > 0.0).then(|| GaugeArc {
            path: frame.arc_path(AngleSpan { start: 0.0, end: angle }),
            color: profile.accent,
        });
        (track, value)
    } else {
        let weights: Vec<f64> = bands.iter().map(|band| band.buckets as f64).collect();
        let track = gauge_bands(&weights)
            .into_iter()
            .zip(bands)
            .map(|(span, band)| GaugeArc {
                path: frame.arc_path(span),
                color: band.color,
            })
            .collect();
        (track, None)
    };

    GaugeLayout {
        angle,
        track,
        value,
        indicator: frame.point_at(angle, INDICATOR_INSET),
    }
}

/// Headline score text: percentages for CSAT and choice, signed for NPS.
pub fn score_text(kind: MetricKind, score: f64) -> String {
    match kind {
        MetricKind::Nps => format::format_score(score),
        MetricKind::Csat | MetricKind::Choice => format::format_percent(format::format_score(score)),
    }
}

#[component]
pub fn Gauge(dataset: Rc<MetricDataset>) -> Element {
    let frame = GaugeFrame::STANDARD;
    let layout = gauge_layout(dataset.profile(), dataset.score, frame);
    let caption = i18n::metric_short(dataset.kind);
    let value = score_text(dataset.kind, dataset.score);
    let indicator_x = format!("{:.3}", layout.indicator.x);
    let indicator_y = format!("{:.3}", layout.indicator.y);

    rsx! {
        div { class: "gauge",
            svg {
                width: "144",
                height: "80",
                view_box: "0 0 144 80",
                for (i, arc) in layout.track.iter().enumerate() {
                    path {
                        key: "track-{i}",
                        d: "{arc.path}",
                        fill: "none",
                        stroke: arc.color,
                        stroke_width: "12",
                        stroke_linecap: "round",
                    }
                }
                if let Some(arc) = layout.value.as_ref() {
                    path {
                        d: "{arc.path}",
                        fill: "none",
                        stroke: arc.color,
                        stroke_width: "12",
                        stroke_linecap: "round",
                    }
                }
                circle {
                    cx: "{indicator_x}",
                    cy: "{indicator_y}",
                    r: "4",
                    fill: "#302E2A",
                }
            }
            div { class: "gauge__label",
                span { class: "gauge__caption", "{caption}" }
                span { class: "gauge__value", "{value}" }
            }
        }
    }
}
