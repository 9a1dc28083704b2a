use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadHoverEnter {
    /// Pointer position when the hit-zone was entered.
    pub position: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadHoverLeave {
    pub position: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadDragStart {
    /// Pointer position recorded at grab time.
    pub position: [f32; 2],
    /// Panel size recorded at grab time.
    pub size: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadDragEnd {
    /// Panel size when the drag was released, before the spring-back.
    pub size: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadResize {
    /// New target size of the panel.
    pub size: [f32; 2],
}

/// Interaction milestones reported by [`crate::AdaptivePanel`] when a
/// channel is attached with `with_events`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    HoverEnter(PayloadHoverEnter),
    HoverLeave(PayloadHoverLeave),
    DragStart(PayloadDragStart),
    DragEnd(PayloadDragEnd),
    Resize(PayloadResize),
}
