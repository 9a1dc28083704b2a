use egui::{Context, Id, Pos2};

const TRACKER_KEY: &str = "egui_adaptive_pointer";

/// Source of the canonical pointer position.
///
/// Widgets never read input state directly for positioning; they consume the
/// position a [`PointerTracker`] sampled from a provider, so hosts can swap
/// the source (tests drive widgets with synthetic providers).
pub trait PointerProvider {
    /// Latest known pointer position in screen coordinates.
    fn pointer_pos(&self, ctx: &Context) -> Option<Pos2>;
}

/// Reads the pointer straight from egui's input state.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputPointer;

impl PointerProvider for InputPointer {
    fn pointer_pos(&self, ctx: &Context) -> Option<Pos2> {
        ctx.input(|i| i.pointer.latest_pos())
    }
}

/// Next-frame callback. Animations that have not settled schedule one more
/// frame through this instead of calling a platform primitive directly.
pub trait FrameScheduler {
    fn request_frame(&self);
}

impl FrameScheduler for Context {
    fn request_frame(&self) {
        self.request_repaint();
    }
}

#[derive(Clone, Copy, Debug)]
struct Sample(Option<Pos2>);

/// Samples a [`PointerProvider`] once per frame and publishes the canonical
/// position for all consumers.
///
/// egui delivers coalesced input once per frame, so one `track` call per
/// frame bounds pointer handling to the animation-frame cadence.
pub struct PointerTracker;

impl PointerTracker {
    /// Samples `provider` and publishes the position. Call once per frame,
    /// before any widget that consumes the position.
    pub fn track(ctx: &Context, provider: &impl PointerProvider) {
        let sample = Sample(provider.pointer_pos(ctx));
        ctx.data_mut(|d| d.insert_temp(Id::new(TRACKER_KEY), sample));
    }

    /// The canonical pointer position published for this frame, `None` while
    /// the pointer has not been seen yet.
    ///
    /// # Panics
    ///
    /// Panics when no [`PointerTracker::track`] call has published a sample;
    /// consuming the shared position without a tracker installed is a
    /// programming error, surfaced immediately.
    pub fn sampled(ctx: &Context) -> Option<Pos2> {
        let sample = ctx.data_mut(|d| d.get_temp::<Sample>(Id::new(TRACKER_KEY)));
        match sample {
            Some(Sample(pos)) => pos,
            None => panic!(
                "PointerTracker::sampled called without a tracker; \
                 call PointerTracker::track at the start of the frame"
            ),
        }
    }
}
