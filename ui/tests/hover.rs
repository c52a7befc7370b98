//! Pointer scenarios driven through the hover controller, without a renderer.

use ui::charts::{AnchorStrategy, ChartBox, HoverController, HoverState, Placement, TooltipSize};

const BOX: ChartBox = ChartBox {
    width: 480.0,
    height: 200.0,
};

fn histogram_controller() -> HoverController {
    HoverController::new(
        AnchorStrategy::CenterClamp,
        TooltipSize::new(180.0, 100.0),
        Placement::default(),
    )
}

#[test]
fn moving_across_buckets_never_passes_through_idle() {
    let mut hover = histogram_controller();
    hover.pointer_moved(40.0);
    hover.enter(0);

    let mut seen = vec![hover.state()];
    for index in 1..=9 {
        hover.pointer_moved(40.0 + index as f64);
        seen.push(hover.state());
        hover.enter(index);
        seen.push(hover.state());
    }

    assert!(seen.iter().all(|state| *state != HoverState::Idle));
    assert_eq!(hover.hovered(), Some(9));
    assert!(hover.anchor(10, BOX).is_some());
}

#[test]
fn leaving_the_box_hides_the_tooltip() {
    let mut hover = histogram_controller();
    hover.pointer_moved(64.0);
    hover.enter(3);
    assert_eq!(hover.state(), HoverState::Hovering { index: 3, offset_y: 64.0 });

    hover.leave();
    assert_eq!(hover.state(), HoverState::Idle);
    assert_eq!(hover.anchor(10, BOX), None);
}

#[test]
fn outside_interaction_dismisses_the_hover() {
    let mut hover = histogram_controller();
    hover.pointer_moved(10.0);
    hover.enter(2);
    hover.dismiss();
    assert_eq!(hover.hovered(), None);
}

#[test]
fn unmeasured_box_suppresses_the_tooltip() {
    let mut hover = histogram_controller();
    hover.pointer_moved(10.0);
    hover.enter(2);
    assert_eq!(hover.anchor(10, ChartBox::new(0.0, 0.0)), None);
    assert_eq!(hover.anchor(10, ChartBox::new(f64::NAN, 200.0)), None);
}
