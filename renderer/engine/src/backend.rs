use common::input::InputEvent;
use common::*;
use kinematics::{Body, Extent};

use crate::asset::Logo;

/// Windowing and drawing, everything the loop needs from the platform
pub trait Backend: Sized {
    type Error: Error + 'static;

    /// Creates the window and uploads the logo
    fn new(logo: &Logo) -> Result<Self, Self::Error>;

    fn name() -> &'static str;

    /// Drains every pending event into `events`. Any resize has already been applied to the
    /// backend's coordinate mapping by the time this returns
    fn consume_events(&mut self, events: &mut Vec<InputEvent>);

    /// Area the body must stay inside
    fn container(&self) -> Extent;

    /// Clear, draw the logo at the body's position, present
    fn render(&mut self, body: &Body) -> Result<(), Self::Error>;
}
