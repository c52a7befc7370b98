use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub value: String,
    pub label: String,
    /// Short glyph shown in place of the label; the label stays as the accessible name.
    pub glyph: Option<String>,
}

impl Segment {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            glyph: None,
        }
    }

    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }
}

/// Row of mutually exclusive buttons (chart type, detail tabs).
#[component]
pub fn SegmentedControl(
    segments: Vec<Segment>,
    selected: String,
    on_select: EventHandler<String>,
    #[props(default = false)] tabs: bool,
) -> Element {
    let (base, role) = if tabs { ("tabs", "tablist") } else { ("segmented", "group") };

    rsx! {
        div { class: "{base}", role,
            {segments.iter().map(|segment| {
                let value = segment.value.clone();
                let active = segment.value == selected;
                let class = if active {
                    format!("{base}__item {base}__item--active")
                } else {
                    format!("{base}__item")
                };
                let text = segment.glyph.clone().unwrap_or_else(|| segment.label.clone());
                rsx! {
                    button {
                        key: "{segment.value}",
                        r#type: "button",
                        class,
                        title: "{segment.label}",
                        aria_label: "{segment.label}",
                        aria_pressed: "{active}",
                        onclick: move |_| on_select.call(value.clone()),
                        "{text}"
                    }
                }
            })}
        }
    }
}
