use std::{fs, io::Cursor, path::Path};

use crate::error::{PlotError, PlotResult};
use crate::graph::ImageRGBA;

/// Encode a raster as PNG bytes.
pub fn encode_png(image: &ImageRGBA) -> PlotResult<Vec<u8>> {
    let mut straight = image.data.clone();
    if image.premultiplied {
        unpremultiply_in_place(&mut straight);
    }

    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        &straight,
        image.width,
        image.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| PlotError::encode(e.to_string()))?;
    Ok(out.into_inner())
}

/// Encode and write a raster to `path`, creating or truncating the file.
pub fn write_png(path: &Path, image: &ImageRGBA) -> PlotResult<()> {
    let bytes = encode_png(image)?;
    fs::write(path, bytes).map_err(|e| PlotError::file_create(format!("{}: {e}", path.display())))
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}
