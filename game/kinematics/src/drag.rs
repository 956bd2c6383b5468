use common::*;

use crate::body::Body;

/// Pointer drag gesture. While active the body only moves by pointer deltas
#[derive(Clone, Debug, Default)]
pub struct Drag {
    /// Pointer position at the last press/move, `Some` while dragging
    last_pointer: Option<Vector2>,
}

impl Drag {
    pub fn is_dragging(&self) -> bool {
        self.last_pointer.is_some()
    }

    /// Starts dragging if `pointer` is over the body. Returns true if now dragging
    pub fn press(&mut self, pointer: Vector2, body: &Body) -> bool {
        if body.bounds().contains(pointer) {
            if !self.is_dragging() {
                debug!("started dragging"; "pointer" => ?pointer);
            }
            self.last_pointer = Some(pointer);
        }

        self.is_dragging()
    }

    /// Moves the body by the pointer's movement since the last press/move. Returns the delta
    /// applied, or None if not dragging
    pub fn move_to(&mut self, pointer: Vector2, body: &mut Body) -> Option<Vector2> {
        let last = self.last_pointer.as_mut()?;
        let delta = pointer - *last;
        *last = pointer;

        body.translate(delta);
        Some(delta)
    }

    /// Returns true if a drag was in progress
    pub fn release(&mut self) -> bool {
        let was_dragging = self.last_pointer.take().is_some();
        if was_dragging {
            debug!("stopped dragging");
        }
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Extent;

    fn body() -> Body {
        Body::builder()
            .position(100.0, 100.0)
            .velocity(250.0, -250.0)
            .attach(&Extent::new(50.0, 50.0))
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut drag = Drag::default();
        let mut body = body();

        assert!(!drag.press(Vector2::new(10.0, 10.0), &body));
        assert!(!drag.is_dragging());
        assert_eq!(drag.move_to(Vector2::new(20.0, 20.0), &mut body), None);
        assert_eq!(body.position(), Vector2::new(100.0, 100.0));
    }

    #[test]
    fn drag_moves_by_delta() {
        let mut drag = Drag::default();
        let mut body = body();

        assert!(drag.press(Vector2::new(110.0, 120.0), &body));

        let delta = drag.move_to(Vector2::new(130.0, 115.0), &mut body);
        assert_eq!(delta, Some(Vector2::new(20.0, -5.0)));
        assert_eq!(body.position(), Vector2::new(120.0, 95.0));

        drag.move_to(Vector2::new(140.0, 115.0), &mut body);
        assert_eq!(body.position(), Vector2::new(130.0, 95.0));

        // velocity is left alone
        assert_eq!(body.velocity(), Vector2::new(250.0, -250.0));

        assert!(drag.release());
        assert!(!drag.is_dragging());
        assert!(!drag.release());

        drag.move_to(Vector2::new(500.0, 500.0), &mut body);
        assert_eq!(body.position(), Vector2::new(130.0, 95.0));
    }
}
