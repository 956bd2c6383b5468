//! Motion of the single bouncing body, and dragging it around with the pointer.
//! Nothing in here knows about windows or rendering.

pub use crate::body::{Body, BodyBuilder, Bounce, Sprite, Step};
pub use crate::drag::Drag;
pub use crate::geometry::{Bounds, Extent};

mod body;
mod drag;
mod geometry;
