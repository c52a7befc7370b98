//! Internationalization (i18n) support for `pulseboard-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/pulseboard-ui.ftl   (fallback/reference)
//!   es-ES/pulseboard-ui.ftl
//!   fr-FR/pulseboard-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("dashboard-title");
//! let based_on = t!("summary-based-on", count = 412u32);
//! ```
//!
//! To add a new locale, copy `en-US/pulseboard-ui.ftl` to
//! `i18n/<lang-id>/pulseboard-ui.ftl`, translate each value (keep IDs and
//! placeables identical) and list it in `tests/translations.rs`.
//!
//! Desktop builds ask the OS for the preferred languages; web builds read
//! `navigator.languages`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::survey::{MetricKind, Period, ResponseClass};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("tab-trend")
///     t!("summary-based-on", count = 412u32)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "pulseboard-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE.parse().unwrap_or_default();
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Tooltip values are mixed into fixed-width rows; skip bidi isolation marks.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages, continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => {
            tracing::warn!(tag, "ignoring unparsable language tag");
            return Ok(());
        }
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language currently used for lookups.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

pub fn period_name(period: Period) -> String {
    match period {
        Period::Last30Days => t!("period-last-30-days"),
        Period::Last3Months => t!("period-last-3-months"),
        Period::Last6Months => t!("period-last-6-months"),
        Period::AllTime => t!("period-all-time"),
    }
}

/// Localized caption for a dataset's period label; unknown labels pass through.
pub fn period_caption(label: &str) -> String {
    Period::from_label(label)
        .map(period_name)
        .unwrap_or_else(|_| label.to_string())
}

pub fn class_name(class: ResponseClass) -> String {
    match class {
        ResponseClass::Detractor => t!("class-detractors"),
        ResponseClass::Passive => t!("class-passives"),
        ResponseClass::Promoter => t!("class-promoters"),
    }
}

/// Short metric caption used on gauges and trend tooltips.
pub fn metric_short(kind: MetricKind) -> String {
    match kind {
        MetricKind::Csat => t!("metric-csat-short"),
        MetricKind::Nps => t!("metric-nps-short"),
        MetricKind::Choice => t!("metric-choice-short"),
    }
}

pub fn metric_title(kind: MetricKind) -> String {
    match kind {
        MetricKind::Csat => t!("metric-csat-title"),
        MetricKind::Nps => t!("metric-nps-title"),
        MetricKind::Choice => t!("metric-choice-title"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == FALLBACK_LANGUAGE));
        assert!(available_languages().len() >= 3);
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let _ = set_language(FALLBACK_LANGUAGE);
        assert_eq!(fl!(&*LOADER, "tab-trend"), "Trend");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "tab-histogram");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "tab-histogram");
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_period_labels_pass_through() {
        init();
        assert_eq!(period_caption("Fiscal year"), "Fiscal year");
        assert!(!period_caption("All time").is_empty());
    }
}
