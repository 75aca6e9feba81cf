use crate::{
    geometry::direction_pair,
    image::Image,
    light::Light,
    stepper::step,
    types::{cell_of, Cell, Float, Pair, PixelLocation},
};

/// Walks the grid from `from` toward the light and reports whether an
/// obstacle pixel of `scene` lies in between. Neither endpoint is tested.
pub fn occluded(scene: &Image, from: PixelLocation, light: &Light) -> bool {
    if from == light.pixel {
        return false;
    }
    let direction = direction_pair(from, light.pixel);
    let target = cell_of(light.pixel);
    let mut pos = Pair::new(from.x as Float, from.y as Float);
    loop {
        let cell = step(&mut pos, direction);
        if reached(cell, target, direction) {
            return false;
        }
        match scene.get_cell(cell) {
            Some(color) if color.is_obstacle() => return true,
            Some(_) => {}
            None => return false,
        }
    }
}

fn reached(cell: Cell, target: Cell, direction: Pair) -> bool {
    cell == target
        || (direction.x > 0.0 && cell.x > target.x)
        || (direction.x < 0.0 && cell.x < target.x)
        || (direction.y > 0.0 && cell.y > target.y)
        || (direction.y < 0.0 && cell.y < target.y)
}
