use std::rc::Rc;

use dioxus::prelude::*;

use crate::charts::ChartSettings;
use crate::components::{use_overlay_host, Dropdown, DropdownOption};
use crate::core::EngineConfig;
use crate::i18n;
use crate::survey::{DatasetCatalog, MetricKind};
use crate::t;

use super::{ChoiceCard, ScoreCard};

const DASHBOARD_CSS: &str = include_str!("../../assets/dashboard.css");

/// Composition root: builds the dataset catalog once and hands read-only
/// datasets to the cards.
///
/// The cards are keyed by the active language so a switch remounts them with
/// freshly localized labels.
#[component]
pub fn Dashboard(#[props(default)] config: EngineConfig) -> Element {
    let catalog = use_hook(|| match DatasetCatalog::build(&config) {
        Ok(catalog) => Ok(Rc::new(catalog)),
        Err(err) => {
            tracing::error!(%err, "dataset catalog build failed");
            Err(err.to_string())
        }
    });
    use_context_provider(|| ChartSettings::from(&config));
    use_overlay_host();

    let mut lang_code = use_signal(i18n::current_language);

    let languages: Vec<DropdownOption> = i18n::available_languages()
        .into_iter()
        .map(|code| DropdownOption::new(code.clone(), code))
        .collect();

    let on_language = move |tag: String| match i18n::set_language(&tag) {
        Ok(()) => {
            tracing::info!(%tag, "language switched");
            lang_code.set(tag);
        }
        Err(err) => tracing::warn!(%err, %tag, "language switch failed"),
    };

    rsx! {
        document::Style { "{DASHBOARD_CSS}" }

        div { key: "{lang_code()}", class: "dashboard",
            header { class: "dashboard__header",
                div {
                    h1 { class: "dashboard__title", {t!("dashboard-title")} }
                    p { class: "dashboard__subtitle", {t!("dashboard-subtitle")} }
                }
                Dropdown {
                    label: t!("language-label"),
                    options: languages,
                    selected: lang_code(),
                    on_select: on_language,
                }
            }
            match catalog {
                Ok(catalog) => rsx! {
                    div { class: "dashboard__grid",
                        ScoreCard { kind: MetricKind::Csat, catalog: catalog.clone() }
                        ScoreCard { kind: MetricKind::Nps, catalog: catalog.clone() }
                        ChoiceCard { catalog: catalog.clone() }
                    }
                },
                Err(reason) => rsx! {
                    p { class: "dashboard__error", role: "alert",
                        {t!("dashboard-load-error", reason = reason)}
                    }
                },
            }
        }
    }
}
