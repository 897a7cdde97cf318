//! Image header probing
//!
//! Only the pixel dimensions are read here; pixel data is decoded later,
//! when the image is embedded into the document.

use crate::types::{ComposeError, PixelDimensions, Result, SourceImage};
use image::ImageReader;
use std::io::Cursor;

/// Read the pixel dimensions of an encoded image.
///
/// Decoding is CPU-bound, so the work runs on the blocking pool.
pub async fn probe_dimensions(image: &SourceImage) -> Result<PixelDimensions> {
    let bytes = image.bytes.clone();
    let name = image.display_name.clone();
    tokio::task::spawn_blocking(move || probe_sync(&bytes, &name)).await?
}

fn probe_sync(bytes: &[u8], name: &str) -> Result<PixelDimensions> {
    let format = image::guess_format(bytes).map_err(|_| ComposeError::UnsupportedFormat {
        name: name.to_string(),
    })?;

    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .map_err(|e| ComposeError::Decode {
            name: name.to_string(),
            detail: e.to_string(),
        })?;

    if width == 0 || height == 0 {
        return Err(ComposeError::Decode {
            name: name.to_string(),
            detail: "image has a zero dimension".to_string(),
        });
    }

    Ok(PixelDimensions { width, height })
}
