use std::ops::Range;

use crate::{color::{Color, BLACK}, types::{Cell, PixelLocation}};

/// Row-major RGB buffer, pixel (x, y) lives at `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Color>,
}

impl Image {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![BLACK; width * height] }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Option<Self> {
        if pixels.len() != width * height {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn contains(&self, pixel: PixelLocation) -> bool {
        self.index(pixel.x, pixel.y).is_some()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn get_cell(&self, cell: Cell) -> Option<Color> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        self.get(x, y)
    }

    /// Returns false when (x, y) is outside the image.
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Splits the buffer into one band per row range. Ranges must be
    /// contiguous, ascending and start at row 0.
    pub fn rows_mut(&mut self, ranges: &[Range<usize>]) -> Vec<&mut [Color]> {
        let mut bands = Vec::with_capacity(ranges.len());
        let mut remaining = self.pixels.as_mut_slice();
        let mut next_row = 0;
        for range in ranges {
            assert_eq!(range.start, next_row, "row ranges must be contiguous");
            let (band, rest) = std::mem::take(&mut remaining).split_at_mut(range.len() * self.width);
            bands.push(band);
            remaining = rest;
            next_row = range.end;
        }
        bands
    }
}

#[cfg(test)]
mod tests {
    use crate::color::WHITE;

    use super::*;

    #[test]
    fn row_major_index() {
        let img = Image::new(3, 2);
        assert_eq!(img.index(0, 0), Some(0));
        assert_eq!(img.index(2, 0), Some(2));
        assert_eq!(img.index(1, 1), Some(4));
        assert_eq!(img.index(3, 0), None);
        assert_eq!(img.index(0, 2), None);
    }

    #[test]
    fn get_set() {
        let mut img = Image::new(2, 2);
        assert!(img.set(1, 0, WHITE));
        assert!(!img.set(2, 0, WHITE));
        assert_eq!(img.get(1, 0), Some(WHITE));
        assert_eq!(img.get(0, 0), Some(BLACK));
        assert_eq!(img.pixels()[1], WHITE);
    }

    #[test]
    fn signed_cells() {
        let img = Image::filled(2, 2, WHITE);
        assert_eq!(img.get_cell(Cell::new(1, 1)), Some(WHITE));
        assert_eq!(img.get_cell(Cell::new(-1, 0)), None);
        assert_eq!(img.get_cell(Cell::new(0, 2)), None);
    }

    #[test]
    fn from_pixels_checks_length() {
        assert!(Image::from_pixels(2, 2, vec![BLACK; 3]).is_none());
        assert!(Image::from_pixels(2, 2, vec![BLACK; 4]).is_some());
    }

    #[test]
    fn bands_are_disjoint_rows() {
        let mut img = Image::new(4, 5);
        {
            let bands = img.rows_mut(&[0..2, 2..4, 4..5]);
            assert_eq!(bands.iter().map(|b| b.len()).collect::<Vec<_>>(), vec![8, 8, 4]);
            for (i, band) in bands.into_iter().enumerate() {
                band.fill(Color::new(i as u8 + 10, 0, 0));
            }
        }
        assert_eq!(img.get(3, 1), Some(Color::new(10, 0, 0)));
        assert_eq!(img.get(0, 2), Some(Color::new(11, 0, 0)));
        assert_eq!(img.get(3, 4), Some(Color::new(12, 0, 0)));
    }
}
