use crate::Vector2;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Backend-agnostic input, translated from the windowing library's events.
/// Pointer positions are in container (window pixel) coordinates
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    Close,
    Resize { width: u32, height: u32 },
    PointerPress { button: PointerButton, position: Vector2 },
    PointerMove { position: Vector2 },
    PointerRelease { button: PointerButton },
}
