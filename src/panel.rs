use egui::{Context, CornerRadius, Pos2, Rect, Response, Sense, StrokeKind, Ui, Vec2, Widget};
use instant::Instant;

#[cfg(feature = "events")]
use crossbeam::channel::Sender;

#[cfg(feature = "events")]
use crate::events::{
    Event, PayloadDragEnd, PayloadDragStart, PayloadHoverEnter, PayloadHoverLeave, PayloadResize,
};
use crate::helpers::{hit_zone, resize_target};
use crate::metadata::{Grab, HandleFeedback, PanelMetadata};
use crate::pointer::{FrameScheduler, PointerTracker};
use crate::settings::Settings;
use crate::state::{transition, Input, Phase};

/// A bounded-size panel resized by dragging the handle at its right edge.
///
/// A press inside the handle's expanded hit-zone grabs the panel; horizontal
/// pointer displacement since the grab drives the target width, clamped to
/// the configured bounds with the grab-time aspect ratio preserved. Size
/// changes are tweened rather than applied instantly, and releasing the drag
/// springs the panel back to its default size.
///
/// Requires a [`PointerTracker::track`] call earlier in the frame. State is
/// kept under a fixed key, so show at most one panel per `Context`.
pub struct AdaptivePanel<'a> {
    settings: &'a Settings,
    #[cfg(feature = "events")]
    events: Option<Sender<Event>>,
}

impl<'a> AdaptivePanel<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            #[cfg(feature = "events")]
            events: None,
        }
    }

    /// Reports interaction milestones to `sender`.
    #[cfg(feature = "events")]
    pub fn with_events(mut self, sender: &Sender<Event>) -> Self {
        self.events = Some(sender.clone());
        self
    }

    /// The size the panel is currently animating towards, once it has been
    /// shown at least once.
    pub fn size_target(ctx: &Context) -> Option<Vec2> {
        PanelMetadata::get(ctx).map(|m| m.size.target())
    }

    /// Drops all interaction and animation state.
    pub fn reset(ctx: &Context) {
        PanelMetadata::reset(ctx);
        HandleFeedback::reset(ctx);
    }

    #[cfg(feature = "events")]
    fn emit(&self, event: Event) {
        if let Some(sender) = &self.events {
            let _ = sender.send(event);
        }
    }

    fn handle_rect(&self, panel_rect: Rect, size: Vec2) -> Rect {
        let handle = &self.settings.handle;
        let height = size.y * handle.height_fraction;
        Rect::from_min_size(
            Pos2::new(
                panel_rect.right() + handle.gap,
                panel_rect.center().y - height / 2.,
            ),
            Vec2::new(handle.width, height),
        )
    }
}

impl Widget for &AdaptivePanel<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let now = Instant::now();
        let s = self.settings;

        // Allocate the maximum footprint so resizing never reflows the
        // surrounding ui; the panel grows inside it.
        let aspect = s.resize.default_size.y / s.resize.default_size.x;
        let side = s.handle.gap + s.handle.width;
        let footprint = Vec2::new(
            s.resize.max_width + 2. * side,
            s.resize.max_width * aspect,
        );
        let (response, painter) = ui.allocate_painter(footprint, Sense::hover());

        let mut meta = PanelMetadata::load(ui)
            .unwrap_or_else(|| PanelMetadata::fresh(s.resize.default_size, &s.style));

        let size = meta.size.value(now);
        let panel_rect = Rect::from_center_size(response.rect.center(), size);
        let handle_rect = self.handle_rect(panel_rect, size);

        let pointer = PointerTracker::sampled(ui.ctx());
        let zone = hit_zone(handle_rect, s.handle.hit_zone_margin);
        let over_handle = pointer.is_some_and(|p| zone.contains(p));
        let (pressed, released) = ui.input(|i| {
            (i.pointer.primary_pressed(), i.pointer.primary_released())
        });

        let prev = meta.phase;
        let mut phase = transition(prev, Input::PointerMoved { over_handle });
        if pressed {
            phase = transition(phase, Input::Pressed { over_handle });
        }
        if released {
            phase = transition(phase, Input::Released { over_handle });
        }

        // Grab: record where the drag started and how big the panel was.
        if phase == Phase::Dragging && prev != Phase::Dragging {
            if let Some(p) = pointer {
                meta.grab = Some(Grab { pointer: p, size });
                #[cfg(feature = "events")]
                self.emit(Event::DragStart(PayloadDragStart {
                    position: [p.x, p.y],
                    size: [size.x, size.y],
                }));
            }
        }

        // Drag: chase the clamped target derived from the displacement.
        if phase == Phase::Dragging {
            if let (Some(p), Some(grab)) = (pointer, meta.grab) {
                let target = resize_target(
                    grab.size,
                    p.x - grab.pointer.x,
                    s.resize.min_width,
                    s.resize.max_width,
                );
                if target != meta.size.target() {
                    #[cfg(feature = "events")]
                    self.emit(Event::Resize(PayloadResize {
                        size: [target.x, target.y],
                    }));
                    meta.size.retarget(
                        now,
                        target,
                        s.animation.resize_duration,
                        s.animation.resize_easing,
                    );
                }
            }
        }

        // Release: spring back to exactly the default size. Releases while
        // not dragging never get here, so they cause no size change.
        if prev == Phase::Dragging && phase != Phase::Dragging {
            meta.grab = None;
            #[cfg(feature = "events")]
            self.emit(Event::DragEnd(PayloadDragEnd {
                size: [size.x, size.y],
            }));
            meta.size.retarget(
                now,
                s.resize.default_size,
                s.animation.release_duration,
                s.animation.release_easing,
            );
        }

        #[cfg(feature = "events")]
        {
            let position = pointer.map_or([0., 0.], |p| [p.x, p.y]);
            if prev == Phase::Idle && phase == Phase::Hovered {
                self.emit(Event::HoverEnter(PayloadHoverEnter { position }));
            }
            if prev == Phase::Hovered && phase == Phase::Idle {
                self.emit(Event::HoverLeave(PayloadHoverLeave { position }));
            }
        }

        let handle_color_target = match phase {
            Phase::Idle => s.style.handle_color,
            Phase::Hovered | Phase::Dragging => s.style.handle_active_color,
        };
        meta.handle_color.retarget(
            now,
            handle_color_target,
            s.animation.fade_duration,
            s.animation.fade_easing,
        );

        painter.rect(
            panel_rect,
            CornerRadius::same(s.style.panel_rounding as u8),
            s.style.panel_fill,
            s.style.panel_stroke,
            StrokeKind::Inside,
        );
        painter.rect_filled(
            handle_rect,
            CornerRadius::same(s.handle.rounding as u8),
            meta.handle_color.value(now),
        );

        HandleFeedback {
            phase,
            handle_rect,
            snap_pos: (phase == Phase::Hovered)
                .then(|| handle_rect.min + Vec2::splat(s.handle.snap_offset)),
        }
        .store(ui.ctx());

        if phase == Phase::Dragging
            || !meta.size.is_settled(now)
            || !meta.handle_color.is_settled(now)
        {
            ui.ctx().request_frame();
        }

        meta.phase = phase;
        meta.save(ui);

        response
    }
}
