//! Whole-image renders: sequential, parallel over lights, parallel over rows.
//!
//! Every entry point returns a fresh image of the scene's size. Obstacle
//! pixels are copied through from the scene unchanged, every other pixel is
//! the scene color multiplied by the summed unoccluded light reaching it.

mod by_light;
mod by_row;
mod partition;
mod sequential;

use std::fmt;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{
    color::{Color, BLACK},
    image::Image,
    light::{illuminate, Light},
    occlusion::occluded,
    types::PixelLocation,
};

pub use by_light::render_parallel_by_light;
pub use by_row::render_parallel_by_row;
pub use partition::split_evenly;
pub use sequential::render_sequential;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("at least one worker thread is required")]
    NoThreads,

    #[error("light {index} at ({x}, {y}) is outside the {width}x{height} scene")]
    LightOutOfBounds { index: usize, x: usize, y: usize, width: usize, height: usize },

    #[error("light {index} has strength {strength}, expected a finite positive value")]
    InvalidStrength { index: usize, strength: f64 },

    #[error("cannot start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    ByLight,
    ByRow,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Sequential => "sequential",
            Strategy::ByLight => "parallel-by-light",
            Strategy::ByRow => "parallel-by-row",
        })
    }
}

/// Dispatches to one of the three renderers. `max_threads` is ignored by the
/// sequential one.
pub fn render(scene: &Image, lights: &[Light], strategy: Strategy, max_threads: usize) -> Result<Image, RenderError> {
    match strategy {
        Strategy::Sequential => render_sequential(scene, lights),
        Strategy::ByLight => render_parallel_by_light(scene, lights, max_threads),
        Strategy::ByRow => render_parallel_by_row(scene, lights, max_threads),
    }
}

fn check_threads(max_threads: usize) -> Result<(), RenderError> {
    if max_threads == 0 {
        return Err(RenderError::NoThreads);
    }
    Ok(())
}

fn check_lights(scene: &Image, lights: &[Light]) -> Result<(), RenderError> {
    for (index, light) in lights.iter().enumerate() {
        if !scene.contains(light.pixel) {
            return Err(RenderError::LightOutOfBounds {
                index,
                x: light.pixel.x,
                y: light.pixel.y,
                width: scene.width,
                height: scene.height,
            });
        }
        if !(light.strength.is_finite() && light.strength > 0.0) {
            return Err(RenderError::InvalidStrength { index, strength: light.strength });
        }
    }
    Ok(())
}

fn worker_pool(threads: usize, role: &'static str) -> Result<ThreadPool, RenderError> {
    Ok(ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(move |i| format!("{}-worker-{}", role, i))
        .build()?)
}

/// Sum of the unoccluded contributions of `lights` at a non-obstacle pixel.
fn illumination_at(scene: &Image, lights: &[Light], x: usize, y: usize) -> Color {
    let pixel = PixelLocation::new(x, y);
    lights
        .iter()
        .filter(|light| light.is_at(x, y) || !occluded(scene, pixel, light))
        .fold(BLACK, |total, light| total.add(illuminate(light, x, y)))
}

/// Obstacles are copied through, anything else is lit by `illumination`,
/// which is only evaluated for non-obstacle pixels.
fn compose(original: Color, illumination: impl FnOnce() -> Color) -> Color {
    if original.is_obstacle() {
        original
    } else {
        illumination().mul(original)
    }
}

/// Final color of one pixel, shared by the sequential and row renderers.
fn shade(scene: &Image, lights: &[Light], x: usize, y: usize, original: Color) -> Color {
    compose(original, || illumination_at(scene, lights, x, y))
}
