use egui::{Color32, Stroke, Vec2};
use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// All widget configuration in one place. Every field set carries the fixed
/// defaults of the effect; hosts tweak individual groups.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub resize: SettingsResize,
    pub handle: SettingsHandle,
    pub animation: SettingsAnimation,
    pub style: SettingsStyle,
}

/// Panel size bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingsResize {
    /// Size the panel returns to when a drag is released.
    pub default_size: Vec2,
    pub min_width: f32,
    pub max_width: f32,
}

impl Default for SettingsResize {
    fn default() -> Self {
        Self {
            default_size: Vec2::new(400., 250.),
            min_width: 400.,
            max_width: 800.,
        }
    }
}

/// Geometry of the drag handle and its hit-zone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingsHandle {
    pub width: f32,
    /// Handle height as a fraction of the panel height.
    pub height_fraction: f32,
    /// Gap between the panel's right edge and the handle.
    pub gap: f32,
    pub rounding: f32,
    /// Margin added around the handle geometry for hover detection.
    pub hit_zone_margin: f32,
    /// Offset from the handle's top-left corner the cursor snaps to while
    /// hovering.
    pub snap_offset: f32,
}

impl Default for SettingsHandle {
    fn default() -> Self {
        Self {
            width: 6.,
            height_fraction: 1. / 3.,
            gap: 12.,
            rounding: 8.,
            hit_zone_margin: 30.,
            snap_offset: 15.,
        }
    }
}

/// Durations (seconds) and easing curves of every tween the widgets run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingsAnimation {
    /// Cursor following the pointer.
    pub follow_duration: f32,
    pub follow_easing: Easing,
    /// Cursor morphing into the handle shape on hover.
    pub morph_duration: f32,
    pub morph_easing: Easing,
    /// Cursor fade and short resets (leaving hover, handle recolor).
    pub fade_duration: f32,
    pub fade_easing: Easing,
    /// Panel chasing the drag target.
    pub resize_duration: f32,
    pub resize_easing: Easing,
    /// Panel springing back to the default size on release.
    pub release_duration: f32,
    pub release_easing: Easing,
}

impl Default for SettingsAnimation {
    fn default() -> Self {
        Self {
            follow_duration: 0.1618,
            follow_easing: Easing::CubicOut,
            morph_duration: 0.3,
            morph_easing: Easing::QuadOut,
            fade_duration: 0.1,
            fade_easing: Easing::QuadOut,
            resize_duration: 0.8,
            resize_easing: Easing::QuartOut,
            release_duration: 1.,
            release_easing: Easing::ElasticOut {
                amplitude: 1.,
                period: 1.,
            },
        }
    }
}

/// Colors and fixed dimensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingsStyle {
    /// Side length of the default (circular) cursor.
    pub cursor_size: f32,
    /// Corner radius of the cursor while morphed onto the handle.
    pub cursor_hover_rounding: f32,
    pub cursor_color: Color32,
    pub cursor_hover_color: Color32,
    pub handle_color: Color32,
    pub handle_active_color: Color32,
    pub panel_fill: Color32,
    pub panel_stroke: Stroke,
    pub panel_rounding: f32,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            cursor_size: 30.,
            cursor_hover_rounding: 30.,
            cursor_color: Color32::from_rgb(0x33, 0x33, 0x33),
            cursor_hover_color: Color32::from_rgb(0x75, 0x75, 0x75),
            handle_color: Color32::from_rgb(0x21, 0x21, 0x21),
            handle_active_color: Color32::from_rgb(0x75, 0x75, 0x75),
            panel_fill: Color32::from_rgb(0x0E, 0x0E, 0x0E),
            panel_stroke: Stroke::new(1., Color32::from_rgb(0x3C, 0x3C, 0x3C)),
            panel_rounding: 10.,
        }
    }
}
