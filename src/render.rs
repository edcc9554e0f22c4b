use std::path::Path;

use image::RgbaImage;

use crate::{colormap::ColorTable, mode::Mask, DrumError};

/// Maps a boolean mask through the color table.
///
/// A boolean image normalized against an n-entry table only ever samples the
/// two end entries: `false` takes index 0, `true` takes index n-1. The
/// intermediate ramp entries are deliberately left unsampled to match the
/// original rendering.
pub fn render(mask: &Mask, table: &ColorTable) -> RgbaImage {
    let resolution = mask.resolution() as u32;
    let mut image = RgbaImage::new(resolution, resolution);

    for iy in 0..resolution {
        for ix in 0..resolution {
            let color = if mask.get(ix as usize, iy as usize) {
                table.last()
            } else {
                table.first()
            };
            image.put_pixel(ix, iy, color);
        }
    }

    image
}

/// Renders the mask and writes it as an RGBA PNG, overwriting any existing
/// file at `path`.
pub fn write_png<P: AsRef<Path>>(mask: &Mask, table: &ColorTable, path: P) -> Result<(), DrumError> {
    let image = render(mask, table);
    image.save(path.as_ref())?;
    Ok(())
}
