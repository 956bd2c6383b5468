use common::*;

/// Width and height in window pixels
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Extent {
    pub width: F,
    pub height: F,
}

/// Axis-aligned rectangle, top-left origin
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    min: Vector2,
    extent: Extent,
}

impl Extent {
    pub const fn new(width: F, height: F) -> Self {
        Self { width, height }
    }

    pub fn scaled(self, scale: F) -> Self {
        Self::new(self.width * scale, self.height * scale)
    }

    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<(u32, u32)> for Extent {
    fn from((w, h): (u32, u32)) -> Self {
        Self::new(w as F, h as F)
    }
}

impl Display for Extent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}x{}", self.width, self.height)
    }
}

slog_value_display!(Extent);

impl Bounds {
    pub fn new(min: Vector2, extent: Extent) -> Self {
        Self { min, extent }
    }

    pub fn min(&self) -> Vector2 {
        self.min
    }

    /// Exclusive
    pub fn max(&self) -> Vector2 {
        self.min + Vector2::new(self.extent.width, self.extent.height)
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Min edge inclusive, max edge exclusive
    pub fn contains(&self, point: Vector2) -> bool {
        let max = self.max();
        (self.min.x..max.x).contains(&point.x) && (self.min.y..max.y).contains(&point.y)
    }
}
