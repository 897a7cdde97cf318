//! Page geometry for image placement
//!
//! Pure calculations that map a decoded image onto a page:
//! - Resolving page dimensions for the active page-size policy
//! - Scaling the image to fit inside the margins (aspect ratio preserved)
//! - Centering the scaled image on both axes

use crate::constants::px_to_mm;
use crate::options::ComposeOptions;
use crate::types::{ComposeError, Orientation, PageSize, PixelDimensions, Result};

/// Computed size and position of one image on one page, in millimetres.
///
/// Recomputed fresh for every image; never cached across conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub render_width_mm: f32,
    pub render_height_mm: f32,
    pub offset_x_mm: f32,
    pub offset_y_mm: f32,
}

/// Resolve the page dimensions for one image.
///
/// Fixed formats are constant for the whole document under the chosen
/// orientation. `Auto` wraps each image in a page exactly large enough for
/// it plus the uniform margin; orientation is implied by the image.
pub fn page_dimensions_mm(
    page_size: PageSize,
    orientation: Orientation,
    margin_mm: f32,
    image_width_mm: f32,
    image_height_mm: f32,
) -> (f32, f32) {
    match page_size.dimensions_with_orientation(orientation) {
        Some(dims) => dims,
        None => (
            image_width_mm + 2.0 * margin_mm,
            image_height_mm + 2.0 * margin_mm,
        ),
    }
}

/// Scale an image to fit the page's printable area and center it.
///
/// The scale is uniform and may exceed 1.0: images smaller than the
/// printable area are scaled up to fill it.
pub fn fit_and_center(
    image_width_mm: f32,
    image_height_mm: f32,
    page_width_mm: f32,
    page_height_mm: f32,
    margin_mm: f32,
) -> Result<Placement> {
    let max_width = page_width_mm - 2.0 * margin_mm;
    let max_height = page_height_mm - 2.0 * margin_mm;

    if max_width <= 0.0 || max_height <= 0.0 {
        return Err(ComposeError::InvalidLayout {
            margin_mm,
            page_width_mm,
            page_height_mm,
        });
    }

    let scale = (max_width / image_width_mm).min(max_height / image_height_mm);
    let render_width_mm = image_width_mm * scale;
    let render_height_mm = image_height_mm * scale;

    Ok(Placement {
        page_width_mm,
        page_height_mm,
        render_width_mm,
        render_height_mm,
        offset_x_mm: (page_width_mm - render_width_mm) / 2.0,
        offset_y_mm: (page_height_mm - render_height_mm) / 2.0,
    })
}

/// Plan the placement for a single decoded image
pub fn plan_page(px: PixelDimensions, options: &ComposeOptions) -> Result<Placement> {
    let image_width_mm = px_to_mm(px.width);
    let image_height_mm = px_to_mm(px.height);
    let margin_mm = options.margin.mm();

    let (page_width_mm, page_height_mm) = page_dimensions_mm(
        options.page_size,
        options.orientation,
        margin_mm,
        image_width_mm,
        image_height_mm,
    );

    fit_and_center(
        image_width_mm,
        image_height_mm,
        page_width_mm,
        page_height_mm,
        margin_mm,
    )
}

/// Plan the whole document without building it.
///
/// One placement per image, in input order. Useful for previewing the
/// layout before committing to a full composition.
pub fn plan_pages(
    dimensions: &[PixelDimensions],
    options: &ComposeOptions,
) -> Result<Vec<Placement>> {
    if dimensions.is_empty() {
        return Err(ComposeError::EmptyInput);
    }
    dimensions.iter().map(|&px| plan_page(px, options)).collect()
}
