use serde::{Deserialize, Serialize};

use crate::{color::Color, types::{Float, PixelLocation}};

/// Point light anchored on a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub color: Color,
    /// Falloff scale, must be positive.
    pub strength: Float,
    #[serde(with = "pixel_location")]
    pub pixel: PixelLocation,
}

impl Light {
    pub fn new(color: Color, strength: Float, x: usize, y: usize) -> Self {
        Self { color, strength, pixel: PixelLocation::new(x, y) }
    }

    pub fn is_at(&self, x: usize, y: usize) -> bool {
        self.pixel.x == x && self.pixel.y == y
    }
}

/// Contribution of `light` at (x, y) before occlusion: the light color scaled
/// by `exp(-d² / strength)`.
pub fn illuminate(light: &Light, x: usize, y: usize) -> Color {
    let dx = x as i64 - light.pixel.x as i64;
    let dy = y as i64 - light.pixel.y as i64;
    let distance_squared = (dx * dx + dy * dy) as Float;
    light.color.scale((-distance_squared / light.strength).exp())
}

mod pixel_location {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::types::PixelLocation;

    #[derive(Serialize, Deserialize)]
    struct Xy {
        x: usize,
        y: usize,
    }

    pub fn serialize<S: Serializer>(pixel: &PixelLocation, serializer: S) -> Result<S::Ok, S::Error> {
        Xy { x: pixel.x, y: pixel.y }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PixelLocation, D::Error> {
        let Xy { x, y } = Xy::deserialize(deserializer)?;
        Ok(PixelLocation::new(x, y))
    }
}
