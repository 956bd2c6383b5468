#[cfg(feature = "use-sdl")]
mod render;

#[cfg(feature = "use-sdl")]
pub use render::sdl::{SdlBackend, SdlBackendError};

#[cfg(feature = "lite")]
mod lite;
#[cfg(feature = "lite")]
pub use lite::DummyBackend;

mod asset;
mod backend;
mod clock;
mod engine;

pub use crate::asset::{AssetError, Logo, LOGO_PNG};
pub use crate::backend::Backend;
pub use crate::clock::FrameClock;
pub use crate::engine::{Engine, FrameOutcome, Summary};
