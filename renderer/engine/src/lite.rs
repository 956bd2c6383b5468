use std::convert::Infallible;
use std::time::{Duration, Instant};

use common::input::InputEvent;
use common::*;
use kinematics::{Body, Extent};

use crate::asset::Logo;
use crate::backend::Backend;

/// How long a headless run lasts before closing itself
const RUN_TIME: Duration = Duration::from_secs(5);

/// No window, for running without a display. Closes itself after [RUN_TIME]
pub struct DummyBackend {
    end_time: Instant,
    container: Extent,
    frame_delay: Duration,
}

impl Backend for DummyBackend {
    type Error = Infallible;

    fn new(logo: &Logo) -> Result<Self, Self::Error> {
        let container = Extent::from(config::get().display.resolution);
        info!("running headless"; "container" => container, "logo" => ?logo);

        Ok(Self {
            end_time: Instant::now() + RUN_TIME,
            container,
            // stand in for vsync
            frame_delay: Duration::from_millis(16),
        })
    }

    fn name() -> &'static str {
        "dummy"
    }

    fn consume_events(&mut self, events: &mut Vec<InputEvent>) {
        if Instant::now() > self.end_time {
            events.push(InputEvent::Close);
        }
    }

    fn container(&self) -> Extent {
        self.container
    }

    fn render(&mut self, body: &Body) -> Result<(), Self::Error> {
        trace!("render"; "position" => ?body.position());
        std::thread::sleep(self.frame_delay);
        Ok(())
    }
}
