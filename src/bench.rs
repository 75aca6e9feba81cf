use std::time::{Duration, Instant};

use log::info;

use crate::{
    color::WHITE,
    image::Image,
    light::Light,
    render::{render, RenderError, Strategy},
    types::Float,
};

/// Places `count` white lights regularly over a `width` x `height` scene:
/// one in the middle for a single light, otherwise two columns at a quarter
/// and three quarters of the width, one row per pair, with an odd light
/// centered below the last pair.
pub fn grid_lights(width: usize, height: usize, count: usize, strength: Float) -> Vec<Light> {
    if count == 0 {
        return vec![];
    }
    if count == 1 {
        return vec![Light::new(WHITE, strength, width / 2, height / 2)];
    }

    let pairs = count / 2;
    let band = height / count.div_ceil(2);
    let mut lights = Vec::with_capacity(count);
    for i in 0..pairs {
        let row = i * band + band / 2;
        lights.push(Light::new(WHITE, strength, width / 4, row));
        lights.push(Light::new(WHITE, strength, 3 * width / 4, row));
    }
    if count % 2 == 1 {
        lights.push(Light::new(WHITE, strength, width / 2, pairs * band + band / 2));
    }
    lights
}

/// Mean wall-clock time of `iterations` renders.
pub fn time_render(
    scene: &Image,
    lights: &[Light],
    strategy: Strategy,
    max_threads: usize,
    iterations: u32,
) -> Result<Duration, RenderError> {
    let mut total = Duration::ZERO;
    for iteration in 0..iterations {
        let start = Instant::now();
        render(scene, lights, strategy, max_threads)?;
        let elapsed = start.elapsed();
        info!("iteration {}: {:?}", iteration, elapsed);
        total += elapsed;
    }
    Ok(total / iterations.max(1))
}
