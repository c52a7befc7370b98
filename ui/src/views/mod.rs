//! Cards and the dashboard root composing them.

mod choice_card;
mod dashboard;
mod score_card;

pub use choice_card::{ChoiceCard, ChoiceChart};
pub use dashboard::Dashboard;
pub use score_card::{DetailTab, ScoreCard, ViewMode};

use crate::components::DropdownOption;
use crate::i18n;
use crate::survey::Period;

/// Period dropdown entries; values are the fixed period labels.
fn period_options() -> Vec<DropdownOption> {
    Period::ALL
        .iter()
        .map(|period| DropdownOption::new(period.label(), i18n::period_name(*period)))
        .collect()
}
