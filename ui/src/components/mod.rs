//! Selector widgets and the overlay dismissal host.

pub mod dropdown;
pub mod overlay;
pub mod segmented;

pub use dropdown::{Dropdown, DropdownOption};
pub use overlay::{use_overlay_host, OverlayHost};
pub use segmented::{Segment, SegmentedControl};
