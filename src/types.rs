use cgmath::Vector2;

pub type Float = f64;

/// Continuous 2D position, or a unit direction when used for stepping.
pub type Pair = Vector2<Float>;
/// Pixel inside an image.
pub type PixelLocation = Vector2<usize>;
/// Grid cell reached by the stepper, may lie outside the image.
pub type Cell = Vector2<i64>;

pub const EPSILON: Float = 1e-8;

pub fn cell_of(pixel: PixelLocation) -> Cell {
    Cell::new(pixel.x as i64, pixel.y as i64)
}
