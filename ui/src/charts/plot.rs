//! Binds a [`HoverController`] to a mounted plot element.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::overlay::OverlayHost;
use crate::core::config::{EngineConfig, TooltipConfig};

use super::hover::HoverController;
use super::placement::{AnchorStrategy, ChartBox, Placement, TooltipAnchor, TooltipSize};

/// Chart-wide settings provided by the dashboard through context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSettings {
    pub tooltip: TooltipConfig,
    pub donut_gap_degrees: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for ChartSettings {
    fn from(config: &EngineConfig) -> Self {
        Self {
            tooltip: config.tooltip,
            donut_gap_degrees: config.donut_gap_degrees,
        }
    }
}

pub fn use_chart_settings() -> ChartSettings {
    try_use_context::<ChartSettings>().unwrap_or_default()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Frame {
    bounds: ChartBox,
    /// Viewport y of the box's top edge at the last measurement.
    top: f64,
}

/// Hover handle for one chart instance. Copy it into event closures.
#[derive(Clone, Copy, PartialEq)]
pub struct ChartHover {
    controller: Signal<HoverController>,
    element: Signal<Option<Rc<MountedData>>>,
    frame: Signal<Frame>,
    /// Size the tooltip renders at; placement clamps with the same size.
    pub tooltip: TooltipSize,
}

/// Creates the hover handle for a chart whose tooltip is `tooltip_height`
/// tall. The handle returns to idle whenever the overlay host reports an
/// outside interaction.
pub fn use_chart_hover(strategy: AnchorStrategy, tooltip_height: f64) -> ChartHover {
    let settings = use_chart_settings();
    let size = TooltipSize::new(settings.tooltip.width, tooltip_height);
    let placement = Placement::from(&settings.tooltip);

    let mut controller = use_signal(|| HoverController::new(strategy, size, placement));
    let element = use_signal(|| None);
    let frame = use_signal(Frame::default);

    let overlay = try_use_context::<OverlayHost>();
    use_effect(move || {
        if let Some(host) = overlay {
            // Subscribes to the dismissal counter.
            let _ = host.generation();
            controller.write().dismiss();
        }
    });

    ChartHover {
        controller,
        element,
        frame,
        tooltip: size,
    }
}

impl ChartHover {
    pub fn on_mounted(mut self, evt: MountedEvent) {
        self.element.set(Some(evt.data()));
        self.measure();
    }

    /// Re-reads the element rectangle; layout may have changed since mount.
    pub fn measure(self) {
        let Some(element) = self.element.peek().as_ref().map(Rc::clone) else {
            return;
        };
        let mut frame = self.frame;
        spawn(async move {
            match element.get_client_rect().await {
                Ok(rect) => frame.set(Frame {
                    bounds: ChartBox::new(rect.size.width, rect.size.height),
                    top: rect.origin.y,
                }),
                Err(err) => tracing::debug!(?err, "chart box measurement failed"),
            }
        });
    }

    pub fn on_pointer_move(mut self, evt: MouseEvent) {
        let offset_y = evt.client_coordinates().y - self.frame.peek().top;
        self.controller.write().pointer_moved(offset_y);
    }

    pub fn on_pointer_leave(mut self) {
        self.controller.write().leave();
    }

    pub fn enter(mut self, index: usize) {
        self.controller.write().enter(index);
    }

    /// Hover driven from outside the plot box, e.g. a legend row. The box is
    /// re-measured so the tooltip can be placed without a pointer pass over it.
    pub fn focus(self, index: usize) {
        self.measure();
        self.enter(index);
    }

    pub fn hovered(&self) -> Option<usize> {
        self.controller.read().hovered()
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.controller.read().is_hovered(index)
    }

    pub fn bounds(&self) -> ChartBox {
        self.frame.read().bounds
    }

    /// Anchor for the hovered slot of an evenly spaced series.
    pub fn anchor(&self, count: usize) -> Option<TooltipAnchor> {
        self.controller.read().anchor(count, self.bounds())
    }

    pub fn anchor_at(&self, item_x: f64) -> Option<TooltipAnchor> {
        self.controller.read().anchor_at(item_x, self.bounds())
    }
}

/// The measured, pointer-tracked box every chart draws into.
#[component]
pub fn PlotArea(hover: ChartHover, #[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "chart__plot {class}",
            onmounted: move |evt| hover.on_mounted(evt),
            onmouseenter: move |_| hover.measure(),
            onmousemove: move |evt| hover.on_pointer_move(evt),
            onmouseleave: move |_| hover.on_pointer_leave(),
            {children}
        }
    }
}

pub fn slot_class(active: bool) -> &'static str {
    if active {
        "chart__slot chart__slot--active"
    } else {
        "chart__slot"
    }
}
