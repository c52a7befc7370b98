//! Per-chart hover tracking.
//!
//! [`HoverState`] is a plain value moved by pure transition functions;
//! [`HoverController`] pairs it with the last pointer offset and the chart's
//! tooltip placement so views only forward events and read back an anchor.

use super::geometry::SlotLayout;
use super::placement::{AnchorStrategy, ChartBox, Placement, TooltipAnchor, TooltipSize};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering {
        index: usize,
        /// Pointer distance from the top of the chart box.
        offset_y: f64,
    },
}

impl HoverState {
    /// Pointer entered the `index`-th region. Valid from any state, so moving
    /// between regions never passes through `Idle`.
    pub fn enter(self, index: usize, offset_y: f64) -> Self {
        HoverState::Hovering { index, offset_y }
    }

    pub fn pointer_moved(self, offset_y: f64) -> Self {
        match self {
            HoverState::Idle => HoverState::Idle,
            HoverState::Hovering { index, .. } => HoverState::Hovering { index, offset_y },
        }
    }

    /// Pointer left the chart box, or an outside interaction dismissed it.
    pub fn leave(self) -> Self {
        HoverState::Idle
    }

    pub fn hovered(&self) -> Option<usize> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering { index, .. } => Some(*index),
        }
    }

    pub fn offset_y(&self) -> Option<f64> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering { offset_y, .. } => Some(*offset_y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverController {
    state: HoverState,
    last_pointer_y: f64,
    strategy: AnchorStrategy,
    tooltip: TooltipSize,
    placement: Placement,
}

impl HoverController {
    pub fn new(strategy: AnchorStrategy, tooltip: TooltipSize, placement: Placement) -> Self {
        Self {
            state: HoverState::Idle,
            last_pointer_y: 0.0,
            strategy,
            tooltip,
            placement,
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn strategy(&self) -> AnchorStrategy {
        self.strategy
    }

    pub fn hovered(&self) -> Option<usize> {
        self.state.hovered()
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered() == Some(index)
    }

    pub fn enter(&mut self, index: usize) {
        self.state = self.state.enter(index, self.last_pointer_y);
    }

    /// Records the pointer offset; tracked while idle too so the first
    /// `enter` already knows where the pointer is.
    pub fn pointer_moved(&mut self, offset_y: f64) {
        self.last_pointer_y = offset_y;
        self.state = self.state.pointer_moved(offset_y);
    }

    pub fn leave(&mut self) {
        self.state = self.state.leave();
    }

    /// Outside interaction (another control opened).
    pub fn dismiss(&mut self) {
        if self.state != HoverState::Idle {
            tracing::trace!("hover dismissed by outside interaction");
        }
        self.state = self.state.leave();
    }

    /// Anchor for a series of `count` evenly spaced slots across the box.
    ///
    /// `None` while idle, while the box is unmeasured, or if the hovered index
    /// does not belong to this series.
    pub fn anchor(&self, count: usize, bounds: ChartBox) -> Option<TooltipAnchor> {
        let index = self.hovered().filter(|index| *index < count)?;
        let center = SlotLayout::new(count, bounds.width).center(index);
        self.anchor_at(center, bounds)
    }

    /// Anchor for an item whose horizontal center is already known.
    pub fn anchor_at(&self, item_x: f64, bounds: ChartBox) -> Option<TooltipAnchor> {
        let offset_y = self.state.offset_y()?;
        self.placement
            .place(self.strategy, item_x, offset_y, self.tooltip, bounds)
    }
}
