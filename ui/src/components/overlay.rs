//! Outside-interaction broadcast.
//!
//! Opening any popover bumps a counter; every chart hover handle subscribes to
//! it and returns to idle.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayHost {
    generation: Signal<u64>,
}

impl OverlayHost {
    pub fn generation(&self) -> u64 {
        (self.generation)()
    }

    /// A popover opened; dismiss every hover.
    pub fn notify_opened(mut self) {
        let next = self.generation.peek().wrapping_add(1);
        self.generation.set(next);
    }
}

/// Provides the host to the subtree. Call once, at the composition root.
pub fn use_overlay_host() -> OverlayHost {
    let generation = use_signal(|| 0u64);
    use_context_provider(|| OverlayHost { generation })
}
