//! Tooltip anchoring inside a chart's bounding box.

use crate::core::config::TooltipConfig;

/// Measured size of a chart's plot area, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChartBox {
    pub width: f64,
    pub height: f64,
}

impl ChartBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// False until layout has produced a positive, finite size.
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

impl TooltipSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// How a tooltip is positioned horizontally relative to the hovered item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnchorStrategy {
    /// Centered over the item, then clamped into the box.
    #[default]
    CenterClamp,
    /// Beside the item, on whichever side has more room.
    EdgeSnap,
}

/// Top-left corner of the tooltip relative to the chart box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipAnchor {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub pointer_gap: f64,
    pub edge_margin: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self::from(&TooltipConfig::default())
    }
}

impl From<&TooltipConfig> for Placement {
    fn from(config: &TooltipConfig) -> Self {
        Self {
            pointer_gap: config.pointer_gap,
            edge_margin: config.edge_margin,
        }
    }
}

impl Placement {
    /// Anchor for a tooltip of `size` over the item centered at `item_x`, with
    /// the pointer `pointer_y` below the top of `bounds`.
    ///
    /// Returns `None` while the box is unmeasured. Otherwise the tooltip
    /// rectangle lies inside the box whenever the box is at least as large as
    /// the tooltip; a smaller box pins the tooltip to the top-left corner.
    pub fn place(
        &self,
        strategy: AnchorStrategy,
        item_x: f64,
        pointer_y: f64,
        size: TooltipSize,
        bounds: ChartBox,
    ) -> Option<TooltipAnchor> {
        if !bounds.is_measured() {
            tracing::trace!("chart box not measured, tooltip suppressed");
            return None;
        }

        let item_x = if item_x.is_finite() { item_x } else { 0.0 };
        let pointer_y = if pointer_y.is_finite() { pointer_y } else { 0.0 };

        let preferred_x = match strategy {
            AnchorStrategy::CenterClamp => item_x - size.width / 2.0,
            AnchorStrategy::EdgeSnap => {
                let room_left = item_x;
                let room_right = bounds.width - item_x;
                if room_right >= room_left {
                    item_x + self.edge_margin
                } else {
                    item_x - self.edge_margin - size.width
                }
            }
        };

        Some(TooltipAnchor {
            x: clamp_into(preferred_x, bounds.width - size.width),
            y: clamp_into(pointer_y + self.pointer_gap, bounds.height - size.height),
        })
    }
}

/// `max(0, min(value, limit))`.
fn clamp_into(value: f64, limit: f64) -> f64 {
    value.min(limit).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIP: TooltipSize = TooltipSize::new(180.0, 100.0);

    fn place(strategy: AnchorStrategy, x: f64, y: f64, bounds: ChartBox) -> TooltipAnchor {
        Placement::default().place(strategy, x, y, TIP, bounds).unwrap()
    }

    #[test]
    fn centers_over_item_when_room_allows() {
        let anchor = place(AnchorStrategy::CenterClamp, 250.0, 20.0, ChartBox::new(500.0, 160.0));
        assert_eq!(anchor, TooltipAnchor { x: 160.0, y: 32.0 });
    }

    #[test]
    fn clamps_at_both_edges() {
        let bounds = ChartBox::new(500.0, 160.0);
        assert_eq!(place(AnchorStrategy::CenterClamp, 10.0, 0.0, bounds).x, 0.0);
        assert_eq!(place(AnchorStrategy::CenterClamp, 495.0, 0.0, bounds).x, 320.0);
        assert_eq!(place(AnchorStrategy::CenterClamp, 10.0, 150.0, bounds).y, 60.0);
        assert_eq!(place(AnchorStrategy::CenterClamp, 10.0, -40.0, bounds).y, 0.0);
    }

    #[test]
    fn edge_snap_picks_the_roomier_side() {
        let bounds = ChartBox::new(500.0, 160.0);
        assert_eq!(place(AnchorStrategy::EdgeSnap, 100.0, 0.0, bounds).x, 108.0);
        assert_eq!(place(AnchorStrategy::EdgeSnap, 400.0, 0.0, bounds).x, 212.0);
        assert_eq!(place(AnchorStrategy::EdgeSnap, 450.0, 0.0, bounds).x, 262.0);
    }

    #[test]
    fn unmeasured_box_suppresses_tooltip() {
        let placement = Placement::default();
        for bounds in [ChartBox::default(), ChartBox::new(0.0, 120.0), ChartBox::new(f64::NAN, 1.0)] {
            assert_eq!(
                placement.place(AnchorStrategy::CenterClamp, 10.0, 10.0, TIP, bounds),
                None
            );
        }
    }

    #[test]
    fn box_smaller_than_tooltip_pins_to_origin() {
        let anchor = place(AnchorStrategy::CenterClamp, 50.0, 50.0, ChartBox::new(100.0, 60.0));
        assert_eq!(anchor, TooltipAnchor { x: 0.0, y: 0.0 });
    }
}
