use log::{debug, trace};

use crate::{image::Image, light::Light};

use super::{check_lights, check_threads, shade, split_evenly, worker_pool, RenderError};

/// Renders disjoint bands of rows on up to `max_threads` workers, each writing
/// straight into its own slice of the output. Identical to
/// [`render_sequential`](super::render_sequential) for any thread count.
pub fn render_parallel_by_row(scene: &Image, lights: &[Light], max_threads: usize) -> Result<Image, RenderError> {
    check_threads(max_threads)?;
    check_lights(scene, lights)?;
    let mut result = Image::new(scene.width, scene.height);
    if lights.is_empty() || scene.height == 0 {
        return Ok(result);
    }

    let workers = max_threads.min(scene.height);
    let bands = split_evenly(scene.height, workers);
    debug!(
        "row-parallel render of {}x{} scene with {} lights on {} workers",
        scene.width,
        scene.height,
        lights.len(),
        workers
    );

    let pool = worker_pool(workers, "row")?;
    let width = scene.width;
    let slices = result.rows_mut(&bands);
    pool.scope(|s| {
        for (rows, band) in bands.iter().cloned().zip(slices) {
            let originals = &scene.pixels()[rows.start * width..rows.end * width];
            s.spawn(move |_| {
                trace!("rows {:?}", rows);
                for (offset, (original, pixel)) in originals.iter().zip(band.iter_mut()).enumerate() {
                    let x = offset % width;
                    let y = rows.start + offset / width;
                    *pixel = shade(scene, lights, x, y, *original);
                }
            });
        }
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use crate::{
        color::{Color, WHITE},
        render::render_sequential,
    };

    use super::*;

    #[test]
    fn every_band_pixel_is_shaded() {
        let mut scene = Image::filled(4, 3, WHITE);
        scene.set(3, 2, Color::new(0, 1, 0));
        let lights = [Light::new(WHITE, 40.0, 0, 0)];
        let expected = render_sequential(&scene, &lights).unwrap();
        for threads in [1, 2, 3, 8] {
            let out = render_parallel_by_row(&scene, &lights, threads).unwrap();
            assert_eq!(out, expected, "{} threads", threads);
            assert_eq!(out.get(3, 2), Some(Color::new(0, 1, 0)));
            assert!(out.pixels().iter().all(|pixel| *pixel != crate::color::BLACK));
        }
    }
}
