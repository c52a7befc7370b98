//! CSAT and NPS cards: an overview (gauge and category rows) and a detailed
//! view with histogram, stacked and trend tabs.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::charts::{Gauge, Histogram, Stacked, Trend};
use crate::components::{Dropdown, DropdownOption, Segment, SegmentedControl};
use crate::core::format;
use crate::i18n;
use crate::survey::dataset::Category;
use crate::survey::{DatasetCatalog, MetricDataset, MetricKind, Period};
use crate::t;

use super::period_options;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Overview,
    Detailed,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Overview, ViewMode::Detailed];

    pub fn value(self) -> &'static str {
        match self {
            ViewMode::Overview => "overview",
            ViewMode::Detailed => "detailed",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.value() == value)
    }

    fn label(self) -> String {
        match self {
            ViewMode::Overview => t!("view-overview"),
            ViewMode::Detailed => t!("view-detailed"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Histogram,
    Stacked,
    Trend,
}

impl DetailTab {
    pub fn value(self) -> &'static str {
        match self {
            DetailTab::Histogram => "histogram",
            DetailTab::Stacked => "stacked",
            DetailTab::Trend => "trend",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        [DetailTab::Histogram, DetailTab::Stacked, DetailTab::Trend]
            .into_iter()
            .find(|tab| tab.value() == value)
    }

    fn label(self) -> String {
        match self {
            DetailTab::Histogram => t!("tab-histogram"),
            DetailTab::Stacked => t!("tab-stacked"),
            DetailTab::Trend => t!("tab-trend"),
        }
    }
}

/// Tabs offered for `dataset`; the stacked tab needs a stacked series.
pub fn detail_tabs(dataset: &MetricDataset) -> Vec<DetailTab> {
    let mut tabs = vec![DetailTab::Histogram];
    if dataset.has_stacked() {
        tabs.push(DetailTab::Stacked);
    }
    tabs.push(DetailTab::Trend);
    tabs
}

/// Falls back to the histogram when `tab` is not offered for `dataset`.
pub fn resolve_tab(tab: DetailTab, dataset: &MetricDataset) -> DetailTab {
    if detail_tabs(dataset).contains(&tab) {
        tab
    } else {
        DetailTab::Histogram
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewRow {
    pub label: String,
    pub color: String,
    pub responses: u32,
    pub share: u32,
}

pub fn overview_rows(dataset: &MetricDataset) -> Vec<OverviewRow> {
    dataset
        .categories
        .iter()
        .map(|category| OverviewRow {
            label: category_label(category),
            color: category.color.clone(),
            responses: category.responses,
            share: format::share_percent(category.responses, dataset.total),
        })
        .collect()
}

fn category_label(category: &Category) -> String {
    category
        .class
        .map(i18n::class_name)
        .unwrap_or_else(|| category.label.clone())
}

#[component]
pub fn ScoreCard(kind: MetricKind, catalog: Rc<DatasetCatalog>) -> Element {
    let mut period = use_signal(Period::default);
    let mut mode = use_signal(ViewMode::default);
    let mut tab = use_signal(DetailTab::default);

    let dataset = catalog.get(kind, period());
    let active_tab = resolve_tab(tab(), &dataset);

    let mode_options: Vec<DropdownOption> = ViewMode::ALL
        .iter()
        .map(|m| DropdownOption::new(m.value(), m.label()))
        .collect();
    let tab_segments: Vec<Segment> = detail_tabs(&dataset)
        .into_iter()
        .map(|t| Segment::new(t.value(), t.label()))
        .collect();

    rsx! {
        section { class: "card card--{kind}",
            div { class: "card__header",
                h2 { class: "card__title", {i18n::metric_title(kind)} }
                div { class: "card__controls",
                    Dropdown {
                        label: t!("view-mode-label"),
                        options: mode_options,
                        selected: mode().value().to_string(),
                        on_select: move |value: String| {
                            if let Some(next) = ViewMode::from_value(&value) {
                                mode.set(next);
                            }
                        },
                    }
                    Dropdown {
                        label: t!("period-label"),
                        options: period_options(),
                        selected: period().label().to_string(),
                        on_select: move |value: String| match Period::from_label(&value) {
                            Ok(next) => period.set(next),
                            Err(err) => tracing::warn!(%err, "period selection ignored"),
                        },
                    }
                }
            }
            match mode() {
                ViewMode::Overview => rsx! {
                    Overview { dataset: dataset.clone() }
                },
                ViewMode::Detailed => rsx! {
                    SegmentedControl {
                        tabs: true,
                        segments: tab_segments,
                        selected: active_tab.value().to_string(),
                        on_select: move |value: String| {
                            if let Some(next) = DetailTab::from_value(&value) {
                                tab.set(next);
                            }
                        },
                    }
                    match active_tab {
                        DetailTab::Histogram => rsx! { Histogram { dataset: dataset.clone() } },
                        DetailTab::Stacked => rsx! { Stacked { dataset: dataset.clone() } },
                        DetailTab::Trend => rsx! { Trend { dataset: dataset.clone() } },
                    }
                },
            }
        }
    }
}

#[component]
fn Overview(dataset: Rc<MetricDataset>) -> Element {
    let mut highlighted = use_signal(|| Option::<usize>::None);
    let rows = overview_rows(&dataset);
    let median = format::format_decimal(dataset.median);
    let average = format::format_decimal(dataset.average);

    rsx! {
        div { class: "overview",
            div { class: "overview__score",
                Gauge { dataset: dataset.clone() }
                div { class: "overview__stats",
                    div { class: "overview__stat",
                        span { class: "overview__stat-label", {t!("summary-median")} }
                        strong { "{median}" }
                    }
                    div { class: "overview__stat",
                        span { class: "overview__stat-label", {t!("summary-average")} }
                        strong { "{average}" }
                    }
                }
                span { class: "overview__caption", {t!("summary-based-on", count = dataset.total)} }
            }
            div { class: "overview__rows", onmouseleave: move |_| highlighted.set(None),
                {rows.iter().enumerate().map(|(i, row)| {
                    let class = if highlighted() == Some(i) {
                        "overview__row overview__row--active"
                    } else {
                        "overview__row"
                    };
                    let share = format::format_percent(row.share);
                    let fill = format!("width: {}%; background-color: {};", row.share, row.color);
                    rsx! {
                        div {
                            key: "{i}",
                            class,
                            onmouseenter: move |_| highlighted.set(Some(i)),
                            span { class: "overview__row-label", "{row.label}" }
                            div { class: "overview__track",
                                div { class: "overview__fill", style: fill }
                            }
                            span { class: "overview__row-count", "{row.responses}" }
                            span { class: "overview__row-share", "{share}" }
                        }
                    }
                })}
            }
        }
    }
}
