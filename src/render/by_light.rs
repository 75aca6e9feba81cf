use log::{debug, trace};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use crate::{color::BLACK, image::Image, light::Light};

use super::{check_lights, check_threads, compose, illumination_at, split_evenly, worker_pool, RenderError};

/// Splits the lights into contiguous groups, one per worker. Each worker
/// builds an illumination-only image from its group, then the partial images
/// are summed and multiplied by the scene.
pub fn render_parallel_by_light(scene: &Image, lights: &[Light], max_threads: usize) -> Result<Image, RenderError> {
    check_threads(max_threads)?;
    check_lights(scene, lights)?;
    if lights.is_empty() {
        return Ok(Image::new(scene.width, scene.height));
    }

    let workers = max_threads.min(lights.len());
    let groups = split_evenly(lights.len(), workers);
    debug!(
        "light-parallel render of {}x{} scene with {} lights on {} workers",
        scene.width,
        scene.height,
        lights.len(),
        workers
    );

    let pool = worker_pool(workers, "light")?;
    let mut partials: Vec<Image> = groups.iter().map(|_| Image::new(scene.width, scene.height)).collect();
    pool.scope(|s| {
        for (group, partial) in groups.iter().zip(partials.iter_mut()) {
            let subset = &lights[group.clone()];
            s.spawn(move |_| {
                trace!("lights {:?}", group);
                partial_illumination(scene, subset, partial);
            });
        }
    });

    let mut result = Image::new(scene.width, scene.height);
    pool.install(|| {
        result.pixels_mut().par_iter_mut().enumerate().for_each(|(index, pixel)| {
            *pixel = compose(scene.pixels()[index], || {
                partials.iter().fold(BLACK, |total, partial| total.add(partial.pixels()[index]))
            });
        });
    });
    Ok(result)
}

/// Obstacle pixels stay black, every other pixel receives the summed
/// unoccluded light of `lights`.
fn partial_illumination(scene: &Image, lights: &[Light], partial: &mut Image) {
    let width = scene.width;
    for (index, (original, pixel)) in scene.pixels().iter().zip(partial.pixels_mut()).enumerate() {
        if !original.is_obstacle() {
            *pixel = illumination_at(scene, lights, index % width, index / width);
        }
    }
}
