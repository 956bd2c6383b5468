use std::time::Duration;

use common::input::{InputEvent, PointerButton};
use common::*;
use kinematics::{Body, Drag};

use crate::backend::Backend;
use crate::clock::FrameClock;

pub struct Engine<'b, B: Backend> {
    backend: &'b mut B,
    body: Body,
    drag: Drag,
    /// Set by a close request, checked at the end of the frame
    quit: bool,
    /// Events drained from the backend this frame, all applied before the body moves
    events: Vec<InputEvent>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FrameOutcome {
    Continue,
    Exit,
}

#[derive(Copy, Clone, Debug)]
pub struct Summary {
    pub frames: u64,
    pub elapsed: Duration,
}

impl<'b, B: Backend> Engine<'b, B> {
    pub fn new(body: Body, backend: &'b mut B) -> Self {
        Self {
            backend,
            body,
            drag: Drag::default(),
            quit: false,
            events: Vec::with_capacity(32),
        }
    }

    /// Runs frames until the window is closed
    pub fn run(mut self) -> Summary {
        info!("starting main loop"; "backend" => B::name());

        let mut clock = FrameClock::start();
        let mut frames = 0;
        loop {
            frames += 1;

            let dt = clock.restart();
            if let FrameOutcome::Exit = self.frame(dt) {
                break;
            }
        }

        let summary = Summary {
            frames,
            elapsed: clock.total(),
        };
        info!("main loop finished"; "frames" => summary.frames, "elapsed" => ?summary.elapsed);
        summary
    }

    /// One iteration: handle all pending input, move the body by `dt` unless it's being
    /// dragged, then draw it
    pub fn frame(&mut self, dt: Duration) -> FrameOutcome {
        // swap out the buffer to keep its allocation while handling events mutably
        let mut events = std::mem::take(&mut self.events);
        self.backend.consume_events(&mut events);
        for event in events.drain(..) {
            self.handle_event(event);
        }
        self.events = events;

        if !self.drag.is_dragging() {
            let container = self.backend.container();
            let step = self.body.update(dt, container);

            if step.bounce.any() {
                trace!("bounced"; "x" => step.bounce.x, "y" => step.bounce.y, "position" => ?step.position);
            }
        }

        if let Err(e) = self.backend.render(&self.body) {
            warn!("failed to render frame"; "error" => %e);
        }

        if self.quit {
            FrameOutcome::Exit
        } else {
            FrameOutcome::Continue
        }
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Close => {
                debug!("close requested");
                self.quit = true;
            }
            InputEvent::Resize { width, height } => {
                debug!("resized window"; "width" => width, "height" => height);
            }
            InputEvent::PointerPress {
                button: PointerButton::Primary,
                position,
            } => {
                self.drag.press(position, &self.body);
            }
            InputEvent::PointerMove { position } => {
                self.drag.move_to(position, &mut self.body);
            }
            InputEvent::PointerRelease {
                button: PointerButton::Primary,
            } => {
                self.drag.release();
            }
            _ => {}
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}
