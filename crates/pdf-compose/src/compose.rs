//! The conversion pipeline
//!
//! Drives one conversion end to end: probe each image in input order,
//! resolve its page geometry, and append it to the document. Images are
//! processed strictly sequentially because pages must land in input order
//! and the document accepts pages only at the end.

use crate::builder::DocumentBuilder;
use crate::layout::plan_page;
use crate::options::ComposeOptions;
use crate::probe::probe_dimensions;
use crate::types::{ComposeError, Result, SourceImage};

/// Compose the ordered images into a single PDF.
///
/// Every image becomes exactly one page. Any probe, layout, or embed
/// failure aborts the whole conversion; no partial document is produced
/// and nothing is retried.
pub async fn compose(images: &[SourceImage], options: &ComposeOptions) -> Result<Vec<u8>> {
    let (first, rest) = match images.split_first() {
        Some(split) => split,
        None => return Err(ComposeError::EmptyInput),
    };

    // The document fixes its first page's size at creation, so the first
    // image is probed before the document exists.
    let px = probe_dimensions(first).await?;
    let placement = plan_page(px, options)?;
    let mut builder = DocumentBuilder::begin(
        options.output_filename.as_str(),
        placement.page_width_mm,
        placement.page_height_mm,
    );
    builder.place_image(&first.bytes, &placement).await?;

    for image in rest {
        let px = probe_dimensions(image).await?;
        let placement = plan_page(px, options)?;
        builder.add_page(placement.page_width_mm, placement.page_height_mm);
        builder.place_image(&image.bytes, &placement).await?;
    }

    builder.finalize().await
}
