//! Shared UI crate for Pulseboard: the seeded survey dataset engine, chart
//! geometry, hover tracking and the Dioxus views built on them.

pub mod charts;
pub mod components;
pub mod core;
pub mod i18n;
pub mod survey;
pub mod views;

pub use views::Dashboard;
