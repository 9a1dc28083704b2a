//! Drives the widgets through whole frames with synthetic pointer input and
//! checks the gesture semantics end to end.

use egui::{Context, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};
use egui_adaptive::{
    AdaptivePanel, CursorVisual, HandleFeedback, InputPointer, Phase, PointerTracker, Settings,
};

fn run_frame(ctx: &Context, settings: &Settings, events: Vec<egui::Event>) {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1200., 700.))),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| {
        PointerTracker::track(ctx, &InputPointer);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(&AdaptivePanel::new(settings));
            ui.add(&CursorVisual::new(settings).with_native_cursor());
        });
    });
}

fn moved(pos: Pos2) -> egui::Event {
    egui::Event::PointerMoved(pos)
}

fn button(pos: Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    }
}

fn feedback(ctx: &Context) -> HandleFeedback {
    HandleFeedback::load(ctx).expect("panel was shown")
}

/// One frame with no input to learn where the layout put the handle.
fn handle_rect(ctx: &Context, settings: &Settings) -> Rect {
    run_frame(ctx, settings, vec![]);
    feedback(ctx).handle_rect
}

#[test]
fn hover_is_entered_inside_the_hit_zone_only() {
    let ctx = Context::default();
    let settings = Settings::default();
    let handle = handle_rect(&ctx, &settings);

    // Strictly inside the expanded zone, outside the geometry.
    let near = Pos2::new(handle.left() - 20., handle.top() - 20.);
    run_frame(&ctx, &settings, vec![moved(near)]);
    assert_eq!(feedback(&ctx).phase, Phase::Hovered);
    assert_eq!(
        feedback(&ctx).snap_pos,
        Some(handle.min + Vec2::splat(settings.handle.snap_offset))
    );

    // Strictly outside the zone.
    let far = Pos2::new(handle.left() - 40., handle.top());
    run_frame(&ctx, &settings, vec![moved(far)]);
    assert_eq!(feedback(&ctx).phase, Phase::Idle);
    assert_eq!(feedback(&ctx).snap_pos, None);
}

#[test]
fn drag_resizes_within_bounds_and_springs_back() {
    let ctx = Context::default();
    let settings = Settings::default();
    let handle = handle_rect(&ctx, &settings);
    let grab_at = handle.center();

    run_frame(&ctx, &settings, vec![moved(grab_at)]);
    run_frame(&ctx, &settings, vec![button(grab_at, true)]);
    assert_eq!(feedback(&ctx).phase, Phase::Dragging);
    // The cursor fades out for the duration of the drag.
    assert_eq!(CursorVisual::opacity_target(&ctx), Some(0.));

    // Pull 500px right: the width clamps to the maximum and the height
    // follows the grab-time aspect ratio.
    let pulled = Pos2::new(grab_at.x + 500., grab_at.y);
    run_frame(&ctx, &settings, vec![moved(pulled)]);
    assert_eq!(feedback(&ctx).phase, Phase::Dragging);
    assert_eq!(
        AdaptivePanel::size_target(&ctx),
        Some(Vec2::new(800., 500.))
    );

    // Release far away from the handle: back to idle and to the exact
    // default size.
    run_frame(&ctx, &settings, vec![button(pulled, false)]);
    assert_eq!(feedback(&ctx).phase, Phase::Idle);
    assert_eq!(
        AdaptivePanel::size_target(&ctx),
        Some(settings.resize.default_size)
    );
    assert_eq!(CursorVisual::opacity_target(&ctx), Some(1.));
}

#[test]
fn pull_left_clamps_at_the_minimum() {
    let ctx = Context::default();
    let settings = Settings::default();
    let handle = handle_rect(&ctx, &settings);
    let grab_at = handle.center();

    run_frame(&ctx, &settings, vec![moved(grab_at)]);
    run_frame(&ctx, &settings, vec![button(grab_at, true)]);
    let pulled = Pos2::new(grab_at.x - 300., grab_at.y);
    run_frame(&ctx, &settings, vec![moved(pulled)]);
    assert_eq!(
        AdaptivePanel::size_target(&ctx),
        Some(settings.resize.default_size)
    );
}

#[test]
fn press_outside_the_zone_does_not_grab() {
    let ctx = Context::default();
    let settings = Settings::default();
    let handle = handle_rect(&ctx, &settings);

    let outside = Pos2::new(handle.left() - 100., handle.top() - 100.);
    run_frame(&ctx, &settings, vec![moved(outside)]);
    run_frame(&ctx, &settings, vec![button(outside, true)]);
    assert_eq!(feedback(&ctx).phase, Phase::Idle);

    let pulled = Pos2::new(outside.x + 500., outside.y);
    run_frame(&ctx, &settings, vec![moved(pulled)]);
    assert_eq!(
        AdaptivePanel::size_target(&ctx),
        Some(settings.resize.default_size)
    );
}

#[test]
fn repeated_release_is_idempotent() {
    let ctx = Context::default();
    let settings = Settings::default();
    let handle = handle_rect(&ctx, &settings);
    let grab_at = handle.center();

    run_frame(&ctx, &settings, vec![moved(grab_at)]);
    run_frame(&ctx, &settings, vec![button(grab_at, true)]);
    let pulled = Pos2::new(grab_at.x + 100., grab_at.y);
    run_frame(&ctx, &settings, vec![moved(pulled)]);
    run_frame(&ctx, &settings, vec![button(pulled, false)]);

    let after_release = AdaptivePanel::size_target(&ctx);
    assert_eq!(after_release, Some(settings.resize.default_size));

    // Stray releases while not dragging change nothing.
    for _ in 0..3 {
        run_frame(&ctx, &settings, vec![button(pulled, false)]);
        assert_eq!(AdaptivePanel::size_target(&ctx), after_release);
        assert_eq!(feedback(&ctx).phase, Phase::Idle);
    }
}

#[test]
fn release_inside_the_zone_returns_to_hover() {
    let ctx = Context::default();
    let settings = Settings::default();
    let handle = handle_rect(&ctx, &settings);
    let grab_at = handle.center();

    run_frame(&ctx, &settings, vec![moved(grab_at)]);
    run_frame(&ctx, &settings, vec![button(grab_at, true)]);
    run_frame(&ctx, &settings, vec![button(grab_at, false)]);
    assert_eq!(feedback(&ctx).phase, Phase::Hovered);
    assert_eq!(
        AdaptivePanel::size_target(&ctx),
        Some(settings.resize.default_size)
    );
}

#[test]
fn reset_drops_interaction_state() {
    let ctx = Context::default();
    let settings = Settings::default();
    let handle = handle_rect(&ctx, &settings);

    run_frame(&ctx, &settings, vec![moved(handle.center())]);
    assert!(HandleFeedback::load(&ctx).is_some());

    AdaptivePanel::reset(&ctx);
    CursorVisual::reset(&ctx);
    assert!(HandleFeedback::load(&ctx).is_none());
    assert!(AdaptivePanel::size_target(&ctx).is_none());
    assert!(CursorVisual::opacity_target(&ctx).is_none());
}
