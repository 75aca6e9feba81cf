use std::{fs::File, io::{self, BufWriter, Write}, path::Path};

use image::{ImageBuffer, Rgb};

use crate::{color::Color, image::Image};

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("decoded buffer does not match its {width}x{height} dimensions")]
    SizeMismatch { width: usize, height: usize },

    #[error("{width}x{height} image is too large to encode")]
    TooLarge { width: usize, height: usize },
}

/// Loads any raster the `image` crate understands, dropping alpha.
pub fn decode(path: impl AsRef<Path>) -> Result<Image, CodecError> {
    let rgb = image::open(path)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb.pixels().map(|p| Color::from(p.0)).collect();
    let (width, height) = (width as usize, height as usize);
    Image::from_pixels(width, height, pixels).ok_or(CodecError::SizeMismatch { width, height })
}

/// Writes `image` in the format picked by the extension of `path`. `.ppm`
/// goes through [`save_to_ppm`].
pub fn encode(path: impl AsRef<Path>, image: &Image) -> Result<(), CodecError> {
    let path = path.as_ref();
    let is_ppm = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));
    if is_ppm {
        return Ok(save_to_ppm(image, BufWriter::new(File::create(path)?))?);
    }

    let too_large = || CodecError::TooLarge { width: image.width, height: image.height };
    let width = u32::try_from(image.width).map_err(|_| too_large())?;
    let height = u32::try_from(image.height).map_err(|_| too_large())?;
    let bytes: Vec<u8> = image.pixels().iter().flat_map(|&c| <[u8; 3]>::from(c)).collect();
    let buffer = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, bytes).ok_or_else(too_large)?;
    buffer.save(path)?;
    Ok(())
}

/// Binary (P6) PPM.
pub fn save_to_ppm(image: &Image, mut out: impl Write) -> io::Result<()> {
    out.write_all(b"P6\n")?;
    out.write_fmt(format_args!("{} {}\n", image.width, image.height))?;
    out.write_all(b"255\n")?;
    for &color in image.pixels() {
        out.write_all(&<[u8; 3]>::from(color))?;
    }
    out.flush()
}
