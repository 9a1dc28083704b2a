//! Animated cursor overlay and drag-resizable panel widgets for egui.
//!
//! [`CursorVisual`] replaces the platform cursor with a floating indicator
//! that follows the pointer with eased motion and morphs onto the resize
//! handle of an [`AdaptivePanel`] when the pointer comes close. Dragging the
//! handle resizes the panel within fixed bounds; releasing it springs the
//! panel back to its default size with an elastic settle.
//!
//! Hosts install a [`PointerTracker`] once per frame and then add the two
//! widgets anywhere in the ui:
//!
//! ```no_run
//! # use egui_adaptive::{AdaptivePanel, CursorVisual, InputPointer, PointerTracker, Settings};
//! # fn show(ctx: &egui::Context, settings: &Settings) {
//! PointerTracker::track(ctx, &InputPointer);
//! egui::CentralPanel::default().show(ctx, |ui| {
//!     ui.add(&AdaptivePanel::new(settings));
//!     ui.add(&CursorVisual::new(settings));
//! });
//! # }
//! ```

mod cursor;
mod easing;
mod helpers;
mod metadata;
mod panel;
mod pointer;
mod settings;
mod state;
mod tween;

#[cfg(feature = "events")]
pub mod events;

pub use cursor::CursorVisual;
pub use easing::Easing;
pub use helpers::{hit_zone, resize_target};
pub use metadata::HandleFeedback;
pub use panel::AdaptivePanel;
pub use pointer::{FrameScheduler, InputPointer, PointerProvider, PointerTracker};
pub use settings::{
    Settings, SettingsAnimation, SettingsHandle, SettingsResize, SettingsStyle,
};
pub use state::{transition, Input, Phase};
pub use tween::{Lerp, Tween};
