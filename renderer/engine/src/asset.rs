use image::ImageFormat;

use common::*;
use kinematics::{Extent, Sprite};

/// The logo artwork, baked into the binary
pub static LOGO_PNG: &[u8] = include_bytes!("../../../resources/logo.png");

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to decode logo: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Logo image has no pixels")]
    Empty,

    #[error("Logo scale must be positive and finite, not {0}")]
    BadScale(F),
}

/// Decoded logo, tightly packed RGBA8 rows
pub struct Logo {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    scale: F,
}

impl Logo {
    pub fn embedded(scale: F) -> Result<Self, AssetError> {
        Self::decode(LOGO_PNG, scale)
    }

    pub fn decode(png: &[u8], scale: F) -> Result<Self, AssetError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(AssetError::BadScale(scale));
        }

        let image = image::load_from_memory_with_format(png, ImageFormat::Png)?.to_rgba8();
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::Empty);
        }

        debug!("decoded logo"; "width" => width, "height" => height, "scale" => scale);
        Ok(Self {
            pixels: image.into_raw(),
            width,
            height,
            scale,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row
    pub fn pitch(&self) -> usize {
        self.width as usize * 4
    }

    pub fn scale(&self) -> F {
        self.scale
    }
}

impl Sprite for Logo {
    /// On-screen size
    fn extent(&self) -> Extent {
        Extent::from(self.dimensions()).scaled(self.scale)
    }
}

impl Debug for Logo {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Logo({}x{} @ {})", self.width, self.height, self.scale)
    }
}
