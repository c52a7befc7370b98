use dioxus::prelude::*;

use super::placement::{TooltipAnchor, TooltipSize};

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
    /// Optional swatch shown before the label.
    pub color: Option<String>,
}

impl TooltipRow {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Pins the rendered box to `size`, the size placement clamped against.
pub fn tooltip_style(anchor: TooltipAnchor, size: TooltipSize) -> String {
    format!(
        "left: {:.1}px; top: {:.1}px; width: {}px; height: {}px;",
        anchor.x, anchor.y, size.width, size.height
    )
}

/// Absolutely positioned popover; the parent plot box must be `position: relative`.
#[component]
pub fn ChartTooltip(
    anchor: TooltipAnchor,
    size: TooltipSize,
    rows: Vec<TooltipRow>,
    caption: Option<String>,
) -> Element {
    let style = tooltip_style(anchor, size);

    rsx! {
        div { class: "chart-tooltip", style: "{style}", role: "tooltip",
            div { class: "chart-tooltip__body",
                for (i, row) in rows.iter().enumerate() {
                    div { key: "{i}", class: "chart-tooltip__row",
                        if let Some(color) = row.color.as_ref() {
                            span {
                                class: "chart-tooltip__swatch",
                                style: "background-color: {color};",
                            }
                        }
                        span { class: "chart-tooltip__label", "{row.label}" }
                        span { class: "chart-tooltip__value", "{row.value}" }
                    }
                }
                if let Some(caption) = caption {
                    div { class: "chart-tooltip__caption", "{caption}" }
                }
            }
        }
    }
}
