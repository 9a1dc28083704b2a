use egui::{
    Color32, Context, CornerRadius, CursorIcon, Id, LayerId, Order, Rect, Response, Sense, Ui,
    Vec2, Widget,
};
use instant::Instant;

use crate::metadata::{CursorMetadata, HandleFeedback};
use crate::pointer::{FrameScheduler, PointerTracker};
use crate::settings::Settings;
use crate::state::Phase;

const LAYER_KEY: &str = "egui_adaptive_cursor_layer";

/// Appearance the cursor animates towards for a given phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CursorTargets {
    pub size: Vec2,
    pub rounding: f32,
    pub color: Color32,
    pub opacity: f32,
}

/// Pure target selection: a circle while idle, the handle's silhouette while
/// hovering, invisible while a drag is in progress.
pub(crate) fn cursor_targets(
    phase: Phase,
    handle_size: Vec2,
    settings: &Settings,
) -> CursorTargets {
    let style = &settings.style;
    match phase {
        Phase::Idle => CursorTargets {
            size: Vec2::splat(style.cursor_size),
            rounding: style.cursor_size / 2.,
            color: style.cursor_color,
            opacity: 1.,
        },
        Phase::Hovered => CursorTargets {
            size: handle_size,
            rounding: style.cursor_hover_rounding,
            color: style.cursor_hover_color,
            opacity: 1.,
        },
        Phase::Dragging => CursorTargets {
            size: handle_size,
            rounding: style.cursor_hover_rounding,
            color: style.cursor_hover_color,
            opacity: 0.,
        },
    }
}

/// A floating cursor indicator drawn on the foreground layer.
///
/// Follows the position published by [`PointerTracker`] with a short
/// ease-out tween and shape-shifts based on the [`HandleFeedback`] the panel
/// stored this frame. Allocates no space and never intercepts input. State
/// is kept under a fixed key, so show at most one overlay per `Context`.
pub struct CursorVisual<'a> {
    settings: &'a Settings,
    hide_native_cursor: bool,
}

impl<'a> CursorVisual<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            hide_native_cursor: true,
        }
    }

    /// Keep the platform cursor visible alongside the overlay.
    pub fn with_native_cursor(mut self) -> Self {
        self.hide_native_cursor = false;
        self
    }

    /// The opacity the cursor is currently animating towards, once it has
    /// been shown at least once.
    pub fn opacity_target(ctx: &Context) -> Option<f32> {
        CursorMetadata::get(ctx).map(|m| m.opacity.target())
    }

    /// Drops the overlay's animation state.
    pub fn reset(ctx: &Context) {
        CursorMetadata::reset(ctx);
    }
}

impl Widget for &CursorVisual<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (_, response) = ui.allocate_exact_size(Vec2::ZERO, Sense::hover());
        let now = Instant::now();
        let s = self.settings;

        if self.hide_native_cursor {
            ui.ctx().set_cursor_icon(CursorIcon::None);
        }

        let Some(pointer) = PointerTracker::sampled(ui.ctx()) else {
            // Pointer not seen yet; nothing to draw.
            return response;
        };

        let feedback = HandleFeedback::load(ui.ctx()).unwrap_or_default();
        let mut meta =
            CursorMetadata::load(ui).unwrap_or_else(|| CursorMetadata::fresh(&s.style, pointer));

        // While hovering, the drawn position snaps to the handle anchor; the
        // canonical pointer position stays untouched.
        let display_pos = match feedback.snap_pos {
            Some(snap) if feedback.phase == Phase::Hovered => snap,
            _ => pointer,
        };
        meta.pos.retarget(
            now,
            display_pos.to_vec2(),
            s.animation.follow_duration,
            s.animation.follow_easing,
        );

        let targets = cursor_targets(feedback.phase, feedback.handle_rect.size(), s);
        // Morphing onto the handle is slower than falling back to the
        // default shape.
        let (shape_duration, shape_easing) = match feedback.phase {
            Phase::Hovered | Phase::Dragging => (s.animation.morph_duration, s.animation.morph_easing),
            Phase::Idle => (s.animation.fade_duration, s.animation.fade_easing),
        };
        meta.size.retarget(now, targets.size, shape_duration, shape_easing);
        meta.rounding
            .retarget(now, targets.rounding, shape_duration, shape_easing);
        meta.color
            .retarget(now, targets.color, shape_duration, shape_easing);
        meta.opacity.retarget(
            now,
            targets.opacity,
            s.animation.fade_duration,
            s.animation.fade_easing,
        );

        let rect = Rect::from_center_size(meta.pos.value(now).to_pos2(), meta.size.value(now));
        let opacity = meta.opacity.value(now).clamp(0., 1.);
        let color = meta.color.value(now).gamma_multiply(opacity);
        let painter = ui
            .ctx()
            .layer_painter(LayerId::new(Order::Foreground, Id::new(LAYER_KEY)));
        painter.rect_filled(rect, CornerRadius::same(meta.rounding.value(now) as u8), color);

        let settled = meta.pos.is_settled(now)
            && meta.size.is_settled(now)
            && meta.rounding.is_settled(now)
            && meta.color.is_settled(now)
            && meta.opacity.is_settled(now);
        if !settled {
            ui.ctx().request_frame();
        }

        meta.save(ui);
        response
    }
}
