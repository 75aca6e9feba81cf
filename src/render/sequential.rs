use log::debug;

use crate::{image::Image, light::Light};

use super::{check_lights, shade, RenderError};

/// Single-threaded render, row by row.
pub fn render_sequential(scene: &Image, lights: &[Light]) -> Result<Image, RenderError> {
    check_lights(scene, lights)?;
    let mut cast = Image::new(scene.width, scene.height);
    if lights.is_empty() {
        return Ok(cast);
    }
    debug!("sequential render of {}x{} scene with {} lights", scene.width, scene.height, lights.len());

    for (index, (original, pixel)) in scene.pixels().iter().zip(cast.pixels_mut()).enumerate() {
        let x = index % scene.width;
        let y = index / scene.width;
        *pixel = shade(scene, lights, x, y, *original);
    }
    Ok(cast)
}
