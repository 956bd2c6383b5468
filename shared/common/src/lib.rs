pub use cgmath;
pub use cgmath::Zero;
pub use float_cmp::ApproxEq;
pub use lazy_static::lazy_static;
pub use logging::{self, prelude::*, slog_value_display};
pub use thiserror::{self, Error};

// misc imports that annoyingly get resolved to other pub exports of std/core
pub use std::{
    error::Error,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
};

pub type BoxedResult<T> = Result<T, Box<dyn Error>>;

pub type F = f32;
pub type Vector2 = cgmath::Vector2<F>;

pub mod input;
pub mod panic;
