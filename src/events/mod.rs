mod event;

pub use event::{
    Event, PayloadDragEnd, PayloadDragStart, PayloadHoverEnter, PayloadHoverLeave, PayloadResize,
};
