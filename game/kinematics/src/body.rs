use std::time::Duration;

use common::*;

use crate::geometry::{Bounds, Extent};

/// Anything drawn at the body's position. Its on-screen size is used for collision
pub trait Sprite {
    fn extent(&self) -> Extent;
}

/// Starting state for a [Body]. The only way to get a [Body] is [BodyBuilder::attach], so a body
/// always knows the size of the sprite it moves around
#[derive(Clone, Debug)]
pub struct BodyBuilder {
    position: Vector2,
    velocity: Vector2,
}

#[derive(Clone, Debug)]
pub struct Body {
    /// Top left corner
    position: Vector2,
    /// Captured from the attached sprite
    size: Extent,
    /// Pixels/second
    velocity: Vector2,
}

/// Which axes hit a container edge during an update
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

/// Outcome of [Body::update]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    pub position: Vector2,
    pub bounce: Bounce,
}

impl Sprite for Extent {
    fn extent(&self) -> Extent {
        *self
    }
}

impl BodyBuilder {
    pub fn position(mut self, x: F, y: F) -> Self {
        self.position = Vector2::new(x, y);
        self
    }

    pub fn velocity(mut self, vx: F, vy: F) -> Self {
        self.velocity = Vector2::new(vx, vy);
        self
    }

    /// Captures the sprite's current size as the body's bounds
    pub fn attach(self, sprite: &impl Sprite) -> Body {
        let size = sprite.extent();
        debug!("attached sprite to body"; "size" => size, "position" => ?self.position);

        Body {
            position: self.position,
            size,
            velocity: self.velocity,
        }
    }
}

impl Body {
    pub fn builder() -> BodyBuilder {
        BodyBuilder {
            position: Vector2::zero(),
            velocity: Vector2::zero(),
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn size(&self) -> Extent {
        self.size
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }

    pub fn set_velocity(&mut self, vx: F, vy: F) {
        self.velocity = Vector2::new(vx, vy);
    }

    /// Call again whenever the sprite's on-screen size changes
    pub fn capture_bounds(&mut self, sprite: &impl Sprite) {
        self.size = sprite.extent();
    }

    /// Moves without touching velocity
    pub fn translate(&mut self, delta: Vector2) {
        self.position += delta;
    }

    /// Advances by `velocity * dt`, then clamps into `container` and reflects the velocity of any
    /// axis that hit an edge. Per axis the far edge is checked first, so if a huge `dt` carries
    /// the body past both edges it ends up against the far one.
    pub fn update(&mut self, dt: Duration, container: Extent) -> Step {
        let candidate = self.position + self.velocity * dt.as_secs_f32();

        let (x, bounce_x) = clamp_axis(candidate.x, self.size.width, container.width);
        let (y, bounce_y) = clamp_axis(candidate.y, self.size.height, container.height);
        self.position = Vector2::new(x, y);

        if bounce_x {
            self.velocity.x = -self.velocity.x;
        }

        if bounce_y {
            self.velocity.y = -self.velocity.y;
        }

        let bounce = Bounce {
            x: bounce_x,
            y: bounce_y,
        };

        if bounce.is_corner() {
            trace!("corner hit"; "position" => ?self.position);
        }

        Step {
            position: self.position,
            bounce,
        }
    }
}

impl Bounce {
    pub fn any(self) -> bool {
        self.x || self.y
    }

    pub fn is_corner(self) -> bool {
        self.x && self.y
    }
}

/// (clamped position, bounced)
fn clamp_axis(candidate: F, size: F, extent: F) -> (F, bool) {
    if candidate + size > extent {
        // a body bigger than the container sticks to the min edge
        ((extent - size).max(0.0), true)
    } else if candidate < 0.0 {
        (0.0, true)
    } else {
        (candidate, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGO: Extent = Extent::new(100.0, 100.0);

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    fn body(pos: (F, F), vel: (F, F)) -> Body {
        Body::builder()
            .position(pos.0, pos.1)
            .velocity(vel.0, vel.1)
            .attach(&LOGO)
    }

    #[test]
    fn builder_captures_size() {
        let body = body((3.0, 4.0), (1.0, 2.0));
        assert_eq!(body.size(), LOGO);
        assert_eq!(body.position(), Vector2::new(3.0, 4.0));
        assert_eq!(body.velocity(), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn bounce_off_far_edge() {
        let mut body = body((0.0, 0.0), (100.0, 0.0));
        let step = body.update(secs(1.0), Extent::new(150.0, 720.0));

        assert_eq!(step.position, Vector2::new(50.0, 0.0));
        assert_eq!(
            step.bounce,
            Bounce {
                x: true,
                y: false
            }
        );
        assert_eq!(body.velocity(), Vector2::new(-100.0, 0.0));
    }

    #[test]
    fn overshoot_is_clamped() {
        let mut body = body((700.0, 0.0), (200.0, 0.0));
        let step = body.update(secs(0.5), Extent::new(750.0, 720.0));

        // candidate 800 is past 750-100
        assert_eq!(step.position.x, 650.0);
        assert!(step.bounce.x);
        assert!(!step.bounce.y);
        assert_eq!(body.velocity().x, -200.0);
    }

    #[test]
    fn no_time_no_motion() {
        let mut body = body((123.0, 45.0), (50.0, 50.0));
        let step = body.update(Duration::ZERO, Extent::new(1280.0, 720.0));

        assert_eq!(step.position, Vector2::new(123.0, 45.0));
        assert!(!step.bounce.any());
        assert_eq!(body.velocity(), Vector2::new(50.0, 50.0));
    }

    #[test]
    fn corner_flips_both() {
        let mut body = body((1170.0, 610.0), (100.0, 100.0));
        let step = body.update(secs(0.5), Extent::new(1280.0, 720.0));

        assert!(step.bounce.is_corner());
        assert_eq!(step.position, Vector2::new(1180.0, 620.0));
        assert_eq!(body.velocity(), Vector2::new(-100.0, -100.0));
    }

    #[test]
    fn bounce_off_near_edge() {
        let mut body = body((10.0, 300.0), (-40.0, 0.0));
        let step = body.update(secs(1.0), Extent::new(1280.0, 720.0));

        assert_eq!(step.position, Vector2::new(0.0, 300.0));
        assert!(step.bounce.x);
        assert_eq!(body.velocity(), Vector2::new(40.0, 0.0));
    }

    #[test]
    fn huge_step_lands_on_edge() {
        let mut body = body((0.0, 0.0), (5000.0, 0.0));
        let step = body.update(secs(1.0), Extent::new(300.0, 300.0));
        assert_eq!(step.position.x, 200.0);
        assert_eq!(body.velocity().x, -5000.0);

        let step = body.update(secs(1.0), Extent::new(300.0, 300.0));
        assert_eq!(step.position.x, 0.0);
        assert_eq!(body.velocity().x, 5000.0);
    }

    #[test]
    fn bigger_than_container_stays_non_negative() {
        let mut body = body((0.0, 0.0), (10.0, 10.0));
        let step = body.update(secs(1.0), Extent::new(50.0, 50.0));

        assert_eq!(step.position, Vector2::new(0.0, 0.0));
        assert!(step.bounce.is_corner());
    }

    #[test]
    fn many_small_steps() {
        let mut body = body((100.0, 100.0), (250.0, -60.0));
        for _ in 0..60 {
            body.update(secs(1.0 / 60.0), Extent::new(1280.0, 720.0));
        }

        let position = body.position();
        assert!(position.x.approx_eq(350.0, (0.01, 4)));
        assert!(position.y.approx_eq(40.0, (0.01, 4)));
    }

    #[test]
    fn zero_velocity_never_moves() {
        let mut body = body((20.0, 30.0), (0.0, 0.0));
        for _ in 0..100 {
            let step = body.update(secs(0.016), Extent::new(1280.0, 720.0));
            assert_eq!(step.position, Vector2::new(20.0, 30.0));
            assert!(!step.bounce.any());
        }
    }

    #[test]
    fn stays_inside_container() {
        let container = Extent::new(640.0, 480.0);
        let velocities = [
            (250.0, 250.0),
            (-900.0, 35.0),
            (3000.0, -3000.0),
            (0.5, -0.25),
        ];
        let timesteps = [0.0, 0.001, 0.016, 0.1, 1.0, 10.0];

        for &vel in &velocities {
            let mut body = body((270.0, 190.0), vel);
            for _ in 0..50 {
                for &dt in &timesteps {
                    let Step { position, .. } = body.update(secs(dt), container);

                    assert!(position.x >= 0.0 && position.x <= container.width - LOGO.width);
                    assert!(position.y >= 0.0 && position.y <= container.height - LOGO.height);
                }
            }
        }
    }

    #[test]
    fn bounce_only_flips_bouncing_axis() {
        let mut body = body((500.0, 100.0), (300.0, 20.0));
        let before = body.velocity();
        let step = body.update(secs(1.0), Extent::new(700.0, 720.0));

        assert!(step.bounce.x && !step.bounce.y);
        assert_eq!(body.velocity().x, -before.x);
        assert_eq!(body.velocity().y, before.y);
    }

    #[test]
    fn recapture_after_resize() {
        let mut body = body((0.0, 0.0), (0.0, 0.0));
        body.capture_bounds(&Extent::new(50.0, 25.0));
        assert_eq!(body.size(), Extent::new(50.0, 25.0));
        assert!(body.bounds().contains(Vector2::new(49.0, 24.0)));
        assert!(!body.bounds().contains(Vector2::new(51.0, 24.0)));
    }

    #[test]
    fn translate_keeps_velocity() {
        let mut body = body((10.0, 10.0), (7.0, -3.0));
        body.translate(Vector2::new(5.0, -2.0));
        assert_eq!(body.position(), Vector2::new(15.0, 8.0));
        assert_eq!(body.velocity(), Vector2::new(7.0, -3.0));

        body.set_velocity(1.0, 1.0);
        assert_eq!(body.velocity(), Vector2::new(1.0, 1.0));
    }
}
