use egui::{Color32, Context, Id, Pos2, Rect, Ui, Vec2};

use crate::settings::SettingsStyle;
use crate::state::Phase;
use crate::tween::Tween;

const CURSOR_KEY: &str = "egui_adaptive_cursor_metadata";
const PANEL_KEY: &str = "egui_adaptive_panel_metadata";
const FEEDBACK_KEY: &str = "egui_adaptive_handle_feedback";

/// Animation state of the cursor overlay, kept between frames in the egui
/// data map. Temp storage only: tweens hold instants and must not survive a
/// restart.
///
/// Stored under a fixed key: the effect is one cursor overlay per `Context`.
#[derive(Clone, Debug)]
pub(crate) struct CursorMetadata {
    pub pos: Tween<Vec2>,
    pub size: Tween<Vec2>,
    pub rounding: Tween<f32>,
    pub color: Tween<Color32>,
    pub opacity: Tween<f32>,
}

impl CursorMetadata {
    /// Fresh state settled at the default cursor appearance over `pos`.
    pub fn fresh(style: &SettingsStyle, pos: Pos2) -> Self {
        Self {
            pos: Tween::settled(pos.to_vec2()),
            size: Tween::settled(Vec2::splat(style.cursor_size)),
            rounding: Tween::settled(style.cursor_size / 2.),
            color: Tween::settled(style.cursor_color),
            opacity: Tween::settled(1.),
        }
    }

    pub fn load(ui: &Ui) -> Option<Self> {
        ui.data_mut(|d| d.get_temp(Id::new(CURSOR_KEY)))
    }

    pub fn save(self, ui: &mut Ui) {
        ui.data_mut(|d| d.insert_temp(Id::new(CURSOR_KEY), self));
    }

    pub fn get(ctx: &Context) -> Option<Self> {
        ctx.data_mut(|d| d.get_temp(Id::new(CURSOR_KEY)))
    }

    pub fn reset(ctx: &Context) {
        ctx.data_mut(|d| d.remove::<Self>(Id::new(CURSOR_KEY)));
    }
}

/// Pointer position and panel size recorded when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Grab {
    pub pointer: Pos2,
    pub size: Vec2,
}

/// Interaction and animation state of the panel, kept between frames.
///
/// Stored under a fixed key: the effect is one panel per `Context`, and the
/// accessors ([`PanelMetadata::get`], reset) rely on that.
#[derive(Clone, Debug)]
pub(crate) struct PanelMetadata {
    pub phase: Phase,
    pub grab: Option<Grab>,
    pub size: Tween<Vec2>,
    pub handle_color: Tween<Color32>,
}

impl PanelMetadata {
    pub fn fresh(default_size: Vec2, style: &SettingsStyle) -> Self {
        Self {
            phase: Phase::Idle,
            grab: None,
            size: Tween::settled(default_size),
            handle_color: Tween::settled(style.handle_color),
        }
    }

    pub fn load(ui: &Ui) -> Option<Self> {
        ui.data_mut(|d| d.get_temp(Id::new(PANEL_KEY)))
    }

    pub fn save(self, ui: &mut Ui) {
        ui.data_mut(|d| d.insert_temp(Id::new(PANEL_KEY), self));
    }

    pub fn get(ctx: &Context) -> Option<Self> {
        ctx.data_mut(|d| d.get_temp(Id::new(PANEL_KEY)))
    }

    pub fn reset(ctx: &Context) {
        ctx.data_mut(|d| d.remove::<Self>(Id::new(PANEL_KEY)));
    }
}

/// What the panel tells the cursor about its handle each frame.
///
/// The snap position is a display-only offset target; the canonical pointer
/// position published by the tracker is never mutated by rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleFeedback {
    pub phase: Phase,
    pub handle_rect: Rect,
    /// Where the cursor should visually snap to while hovering.
    pub snap_pos: Option<Pos2>,
}

impl Default for HandleFeedback {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            handle_rect: Rect::NOTHING,
            snap_pos: None,
        }
    }
}

impl HandleFeedback {
    pub fn load(ctx: &Context) -> Option<Self> {
        ctx.data_mut(|d| d.get_temp(Id::new(FEEDBACK_KEY)))
    }

    pub fn store(self, ctx: &Context) {
        ctx.data_mut(|d| d.insert_temp(Id::new(FEEDBACK_KEY), self));
    }

    pub(crate) fn reset(ctx: &Context) {
        ctx.data_mut(|d| d.remove::<Self>(Id::new(FEEDBACK_KEY)));
    }
}
