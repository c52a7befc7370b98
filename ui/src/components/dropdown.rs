use dioxus::prelude::*;

use super::overlay::OverlayHost;

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Single-select menu. Closes on selection and on the next pointer-down
/// outside the menu; opening it counts as an outside interaction for charts.
#[component]
pub fn Dropdown(
    options: Vec<DropdownOption>,
    selected: String,
    on_select: EventHandler<String>,
    #[props(into, default)] label: String,
) -> Element {
    let mut open = use_signal(|| false);
    let overlay = try_use_context::<OverlayHost>();

    let current = options
        .iter()
        .find(|option| option.value == selected)
        .map(|option| option.label.clone())
        .unwrap_or_else(|| selected.clone());

    let toggle = move |_| {
        let opening = !open();
        if opening {
            if let Some(host) = overlay {
                host.notify_opened();
            }
        }
        open.set(opening);
    };

    rsx! {
        div { class: "dropdown",
            if !label.is_empty() {
                span { class: "visually-hidden", "{label}" }
            }
            button {
                class: "dropdown__trigger",
                r#type: "button",
                aria_expanded: "{open()}",
                onclick: toggle,
                span { "{current}" }
                span { class: "dropdown__chevron", aria_hidden: "true", "▾" }
            }
            if open() {
                div {
                    class: "dropdown__backdrop",
                    onmousedown: move |_| open.set(false),
                }
                ul { class: "dropdown__menu", role: "listbox",
                    {options.iter().map(|option| {
                        let value = option.value.clone();
                        let is_selected = option.value == selected;
                        let class = if is_selected {
                            "dropdown__item dropdown__item--selected"
                        } else {
                            "dropdown__item"
                        };
                        rsx! {
                            li {
                                key: "{option.value}",
                                role: "option",
                                class,
                                aria_selected: "{is_selected}",
                                onclick: move |_| {
                                    open.set(false);
                                    on_select.call(value.clone());
                                },
                                "{option.label}"
                            }
                        }
                    })}
                }
            }
        }
    }
}
