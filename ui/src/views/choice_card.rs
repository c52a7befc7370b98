//! Multiple-choice card: top option summary, option rows and a chart that
//! switches between vertical bars, horizontal bars and a donut.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::charts::bars::TOOLTIP_HEIGHT;
use crate::charts::plot::{use_chart_hover, ChartHover};
use crate::charts::{AnchorStrategy, BarOrientation, ChoiceBars, Donut};
use crate::components::{Dropdown, Segment, SegmentedControl};
use crate::core::format;
use crate::i18n;
use crate::survey::{DatasetCatalog, MetricDataset, MetricKind, Period};
use crate::t;

use super::period_options;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChoiceChart {
    #[default]
    Vertical,
    Horizontal,
    Donut,
}

impl ChoiceChart {
    pub const ALL: [ChoiceChart; 3] = [ChoiceChart::Vertical, ChoiceChart::Horizontal, ChoiceChart::Donut];

    pub fn value(self) -> &'static str {
        match self {
            ChoiceChart::Vertical => "vertical",
            ChoiceChart::Horizontal => "horizontal",
            ChoiceChart::Donut => "donut",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|chart| chart.value() == value)
    }

    fn segment(self) -> Segment {
        let (label, glyph) = match self {
            ChoiceChart::Vertical => (t!("chart-vertical"), "▮"),
            ChoiceChart::Horizontal => (t!("chart-horizontal"), "▬"),
            ChoiceChart::Donut => (t!("chart-donut"), "◔"),
        };
        Segment::new(self.value(), label).with_glyph(glyph)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopChoice {
    pub option: String,
    pub share: u32,
}

/// Most chosen option; the earliest option wins a tie. `None` when nobody answered.
pub fn top_choice(dataset: &MetricDataset) -> Option<TopChoice> {
    if dataset.total == 0 {
        return None;
    }
    let best = dataset
        .categories
        .iter()
        .reduce(|best, c| if c.responses > best.responses { c } else { best })?;
    Some(TopChoice {
        option: best.label.clone(),
        share: format::share_percent(best.responses, dataset.total),
    })
}

impl ChoiceChart {
    /// Anchor strategy of the chart's tooltip.
    pub fn anchor_strategy(self) -> AnchorStrategy {
        match self {
            ChoiceChart::Vertical | ChoiceChart::Horizontal => AnchorStrategy::CenterClamp,
            ChoiceChart::Donut => AnchorStrategy::EdgeSnap,
        }
    }
}

/// One option row beside the chart. `index` is the chart item it highlights.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow {
    pub index: usize,
    pub letter: String,
    pub text: String,
    pub color: String,
    pub share: u32,
}

pub fn option_rows(dataset: &MetricDataset) -> Vec<OptionRow> {
    dataset
        .categories
        .iter()
        .enumerate()
        .map(|(index, category)| OptionRow {
            index,
            letter: category.label.clone(),
            text: category.text.clone().unwrap_or_default(),
            color: category.color.clone(),
            share: format::share_percent(category.responses, dataset.total),
        })
        .collect()
}

#[component]
pub fn ChoiceCard(catalog: Rc<DatasetCatalog>) -> Element {
    let mut period = use_signal(Period::default);
    let mut chart = use_signal(ChoiceChart::default);
    let bars_hover = use_chart_hover(ChoiceChart::Vertical.anchor_strategy(), TOOLTIP_HEIGHT);
    let donut_hover = use_chart_hover(ChoiceChart::Donut.anchor_strategy(), TOOLTIP_HEIGHT);
    let hover = match chart() {
        ChoiceChart::Vertical | ChoiceChart::Horizontal => bars_hover,
        ChoiceChart::Donut => donut_hover,
    };

    let dataset = catalog.get(MetricKind::Choice, period());
    let segments: Vec<Segment> = ChoiceChart::ALL.iter().map(|c| c.segment()).collect();

    rsx! {
        section { class: "card card--choice",
            div { class: "card__header",
                h2 { class: "card__title", {i18n::metric_title(MetricKind::Choice)} }
                div { class: "card__controls",
                    SegmentedControl {
                        segments,
                        selected: chart().value().to_string(),
                        on_select: move |value: String| {
                            if let Some(next) = ChoiceChart::from_value(&value) {
                                chart.set(next);
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
            div { class: "choice",
                ChoiceSummary { dataset: dataset.clone(), hover }
                div { class: "choice__chart",
                    match chart() {
                        ChoiceChart::Vertical => rsx! {
                            ChoiceBars { dataset: dataset.clone(), orientation: BarOrientation::Vertical, hover }
                        },
                        ChoiceChart::Horizontal => rsx! {
                            ChoiceBars { dataset: dataset.clone(), orientation: BarOrientation::Horizontal, hover }
                        },
                        ChoiceChart::Donut => rsx! {
                            Donut { dataset: dataset.clone(), hover }
                        },
                    }
                }
            }
        }
    }
}

/// Top option, option rows and the response count. Hovering a row hovers
/// the same item in the chart.
#[component]
fn ChoiceSummary(dataset: Rc<MetricDataset>, hover: ChartHover) -> Element {
    let top = top_choice(&dataset);
    let rows = option_rows(&dataset);

    rsx! {
        div { class: "choice__summary",
            if let Some(top) = top {
                span { class: "choice__summary-label", {t!("choice-top")} }
                strong { class: "choice__top", "{top.option}" }
                span { class: "choice__top-share", {format::format_percent(top.share)} }
            } else {
                span { class: "chart-empty", {t!("chart-empty")} }
            }
            ul { class: "choice__options",
                {rows.iter().map(|row| {
                    let index = row.index;
                    let class = if hover.is_hovered(index) {
                        "choice__option choice__option--active"
                    } else {
                        "choice__option"
                    };
                    let share = format::format_percent(row.share);
                    let swatch = format!("background-color: {};", row.color);
                    rsx! {
                        li {
                            key: "{row.letter}",
                            class,
                            onmouseenter: move |_| hover.focus(index),
                            onmouseleave: move |_| hover.on_pointer_leave(),
                            span { class: "choice__letter", style: swatch, "{row.letter}" }
                            span { class: "choice__text", title: "{row.text}", "{row.text}" }
                            span { class: "choice__share", "{share}" }
                        }
                    }
                })}
            }
            span { class: "choice__caption", {t!("summary-based-on", count = dataset.total)} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;

    #[test]
    fn top_choice_prefers_most_responses() {
        let catalog = DatasetCatalog::build(&EngineConfig::default()).unwrap();
        for period in Period::ALL {
            let dataset = catalog.get(MetricKind::Choice, period);
            let top = top_choice(&dataset).unwrap();
            let max = dataset.categories.iter().map(|c| c.responses).max().unwrap();
            let first = dataset.categories.iter().find(|c| c.responses == max).unwrap();
            assert_eq!(top.option, first.label);
        }
    }

    #[test]
    fn empty_dataset_has_no_top_choice() {
        let catalog = DatasetCatalog::build(&EngineConfig::default()).unwrap();
        let mut dataset = (*catalog.get(MetricKind::Choice, Period::AllTime)).clone();
        for category in &mut dataset.categories {
            category.responses = 0;
        }
        dataset.total = 0;
        assert_eq!(top_choice(&dataset), None);
    }

    #[test]
    fn option_rows_highlight_the_matching_chart_item() {
        use crate::charts::bars::choice_bars;
        use crate::charts::donut::donut_arcs;
        use crate::charts::geometry::DonutFrame;
        use crate::charts::{HoverController, Placement, TooltipSize};

        let catalog = DatasetCatalog::build(&EngineConfig::default()).unwrap();
        let dataset = catalog.get(MetricKind::Choice, Period::Last30Days);
        let rows = option_rows(&dataset);
        let bars = choice_bars(&dataset);
        let arcs = donut_arcs(&dataset, 3.0, DonutFrame::STANDARD);
        assert_eq!(rows.len(), bars.len());

        for chart in ChoiceChart::ALL {
            let size = TooltipSize::new(180.0, TOOLTIP_HEIGHT);
            let mut hover = HoverController::new(chart.anchor_strategy(), size, Placement::default());
            for row in &rows {
                hover.enter(row.index);
                let hovered = hover.hovered().unwrap();
                assert_eq!(bars[hovered].label, row.letter);
                let arc = arcs.iter().find(|arc| arc.index == hovered).unwrap();
                assert_eq!(arc.color, row.color);
            }
            hover.leave();
            assert_eq!(hover.hovered(), None);
        }
    }

    #[test]
    fn option_rows_show_answer_text() {
        let catalog = DatasetCatalog::build(&EngineConfig::default()).unwrap();
        let rows = option_rows(&catalog.get(MetricKind::Choice, Period::AllTime));
        assert_eq!(rows[0].letter, "A");
        assert_eq!(rows[0].text, "What we gonna do today");
        assert!(rows.iter().all(|row| !row.text.is_empty()));
    }

    #[test]
    fn chart_values_round_trip() {
        for chart in ChoiceChart::ALL {
            assert_eq!(ChoiceChart::from_value(chart.value()), Some(chart));
        }
        assert_eq!(ChoiceChart::from_value("pie"), None);
    }
}
