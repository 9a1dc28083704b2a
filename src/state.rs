use serde::{Deserialize, Serialize};

/// Interaction phase of a drag handle.
///
/// Exactly one phase holds at a time; transitions are computed by the pure
/// [`transition`] function so they can be tested without a `Ui`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    /// The pointer is inside the handle's expanded hit-zone.
    Hovered,
    /// A press inside the hit-zone started a drag that has not been released.
    Dragging,
}

/// Pointer input relevant to the phase machine, one event per frame step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    PointerMoved { over_handle: bool },
    Pressed { over_handle: bool },
    Released { over_handle: bool },
}

/// Computes the next phase.
///
/// A drag survives any pointer movement, including movement far outside the
/// handle, and only ends on release. A press outside the hit-zone never
/// starts a drag. A release while not dragging leaves the hover decision to
/// the pointer position alone.
pub fn transition(phase: Phase, input: Input) -> Phase {
    match (phase, input) {
        (Phase::Dragging, Input::Released { over_handle }) => {
            if over_handle {
                Phase::Hovered
            } else {
                Phase::Idle
            }
        }
        (Phase::Dragging, _) => Phase::Dragging,
        (Phase::Hovered, Input::Pressed { over_handle: true }) => Phase::Dragging,
        (
            _,
            Input::PointerMoved { over_handle }
            | Input::Pressed { over_handle }
            | Input::Released { over_handle },
        ) => {
            if over_handle {
                Phase::Hovered
            } else {
                Phase::Idle
            }
        }
    }
}
