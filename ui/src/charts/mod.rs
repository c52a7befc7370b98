//! Chart geometry, hover tracking and the chart views built on them.

pub mod bars;
pub mod donut;
pub mod gauge;
pub mod geometry;
pub mod histogram;
pub mod hover;
pub mod placement;
pub mod plot;
pub mod stacked;
pub mod tooltip;
pub mod trend;

pub use bars::{BarOrientation, ChoiceBars};
pub use donut::Donut;
pub use gauge::Gauge;
pub use histogram::Histogram;
pub use hover::{HoverController, HoverState};
pub use placement::{AnchorStrategy, ChartBox, Placement, TooltipAnchor, TooltipSize};
pub use plot::ChartSettings;
pub use stacked::Stacked;
pub use trend::Trend;
