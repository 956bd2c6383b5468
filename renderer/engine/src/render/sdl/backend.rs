use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{
    BlendMode, Texture, TextureCreator, TextureValueError, UpdateTextureError, WindowCanvas,
};
use sdl2::surface::Surface;
use sdl2::video::{WindowBuildError, WindowContext};
use sdl2::{EventPump, IntegerOrSdlError, Sdl, VideoSubsystem};

use common::input::{InputEvent, PointerButton};
use common::*;
use kinematics::{Body, Extent};

use crate::asset::Logo;
use crate::backend::Backend;

/// Byte order of [Logo::pixels], RGBA in memory
const LOGO_FORMAT: PixelFormatEnum = PixelFormatEnum::ABGR8888;

pub struct SdlBackend {
    events: EventPump,
    canvas: WindowCanvas,
    /// Freed along with the renderer in `canvas`
    logo: Texture,
    background: Color,
    container: Extent,

    #[allow(dead_code)]
    keep_alive: GraphicsKeepAlive,
}

/// Unused fields but need to be kept alive
#[allow(dead_code)]
struct GraphicsKeepAlive {
    sdl: Sdl,
    video: VideoSubsystem,
    textures: TextureCreator<WindowContext>,
}

#[derive(Debug, Error)]
pub enum SdlBackendError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Failed to create window: {0}")]
    WindowCreation(#[from] WindowBuildError),

    #[error("Failed to create renderer: {0}")]
    Renderer(#[from] IntegerOrSdlError),

    #[error("Failed to create logo texture: {0}")]
    TextureCreation(#[from] TextureValueError),

    #[error("Failed to upload logo texture: {0}")]
    TextureUpload(#[from] UpdateTextureError),
}

impl Backend for SdlBackend {
    type Error = SdlBackendError;

    fn new(logo: &Logo) -> Result<Self, Self::Error> {
        let sdl = sdl2::init().map_err(SdlBackendError::Sdl)?;
        let video = sdl.video().map_err(SdlBackendError::Sdl)?;
        info!("initialized SDL"; "version" => %sdl2::version::version());

        let display = &config::get().display;
        let (w, h) = display.resolution;
        info!("window size {width}x{height}", width = w, height = h);

        let mut window = {
            let mut builder = video.window(&display.title, w, h);
            builder.position_centered();

            if display.resizable {
                builder.resizable();
            }
            builder.build()?
        };

        let (logo_w, logo_h) = logo.dimensions();
        if display.set_icon {
            let mut pixels = logo.pixels().to_vec();
            let pitch = logo.pitch() as u32;
            let icon = Surface::from_data(&mut pixels, logo_w, logo_h, pitch, LOGO_FORMAT)
                .map_err(SdlBackendError::Sdl)?;
            window.set_icon(icon);
        }

        let container = Extent::from(window.size());

        let canvas = {
            let mut builder = window.into_canvas().accelerated();
            if display.vsync {
                builder = builder.present_vsync();
            }
            builder.build()?
        };

        // smooth scaling of the downsized logo
        if !sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "1") {
            warn!("linear texture filtering is unavailable");
        }

        let textures = canvas.texture_creator();
        let mut texture = textures.create_texture_static(LOGO_FORMAT, logo_w, logo_h)?;
        texture.update(None, logo.pixels(), logo.pitch())?;
        texture.set_blend_mode(BlendMode::Blend);

        let events = sdl.event_pump().map_err(SdlBackendError::Sdl)?;

        let (r, g, b) = display.background;
        Ok(Self {
            events,
            canvas,
            logo: texture,
            background: Color::RGB(r, g, b),
            container,
            keep_alive: GraphicsKeepAlive {
                sdl,
                video,
                textures,
            },
        })
    }

    fn name() -> &'static str {
        "SDL2"
    }

    fn consume_events(&mut self, events: &mut Vec<InputEvent>) {
        let canvas = &mut self.canvas;
        let container = &mut self.container;

        for event in self.events.poll_iter() {
            let event = match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => InputEvent::Close,

                Event::Window {
                    win_event: WindowEvent::Resized(width, height),
                    ..
                } => {
                    let (width, height) = (width.max(0) as u32, height.max(0) as u32);

                    // keep drawing in window pixels at the new size
                    canvas.set_viewport(Rect::new(0, 0, width, height));
                    *container = Extent::from((width, height));

                    InputEvent::Resize { width, height }
                }

                Event::MouseButtonDown {
                    mouse_btn, x, y, ..
                } => match map_sdl_mouse_button(mouse_btn) {
                    Some(button) => InputEvent::PointerPress {
                        button,
                        position: Vector2::new(x as F, y as F),
                    },
                    None => continue,
                },

                Event::MouseButtonUp { mouse_btn, .. } => match map_sdl_mouse_button(mouse_btn) {
                    Some(button) => InputEvent::PointerRelease { button },
                    None => continue,
                },

                Event::MouseMotion { x, y, .. } => InputEvent::PointerMove {
                    position: Vector2::new(x as F, y as F),
                },

                _ => continue,
            };

            events.push(event);
        }
    }

    fn container(&self) -> Extent {
        self.container
    }

    fn render(&mut self, body: &Body) -> Result<(), Self::Error> {
        self.canvas.set_draw_color(self.background);
        self.canvas.clear();

        let position = body.position();
        let size = body.size();
        let dst = Rect::new(
            position.x.round() as i32,
            position.y.round() as i32,
            size.width.round() as u32,
            size.height.round() as u32,
        );

        // present regardless so a failed copy only loses the logo for one frame
        let result = self
            .canvas
            .copy(&self.logo, None, dst)
            .map_err(SdlBackendError::Sdl);
        self.canvas.present();
        result
    }
}

fn map_sdl_mouse_button(button: MouseButton) -> Option<PointerButton> {
    Some(match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => return None,
    })
}
