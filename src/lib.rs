//! Occlusion-aware 2D lighting of raster scenes.
//!
//! Dark scene pixels are walls. Point lights sit on pixels and every other
//! pixel is lit by the lights it can see along a grid walk, fading with
//! squared distance.

pub mod bench;
pub mod codec;
pub mod color;
pub mod geometry;
pub mod image;
pub mod light;
pub mod lights_file;
pub mod occlusion;
pub mod render;
pub mod stepper;
pub mod types;

pub use color::Color;
pub use image::Image;
pub use light::Light;
pub use render::{render, render_parallel_by_light, render_parallel_by_row, render_sequential, RenderError, Strategy};
