//! Paginated PDF assembly
//!
//! Wraps an in-progress printpdf document. The first page's dimensions are
//! fixed at construction; every later page is appended with its own size.
//! A builder has exactly one owner for the lifetime of one conversion.

use crate::layout::Placement;
use crate::types::{ComposeError, Result};
use printpdf::{Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, RawImage, XObjectTransform};

pub struct DocumentBuilder {
    doc: PdfDocument,
    page_width_mm: f32,
    page_height_mm: f32,
    ops: Vec<Op>,
}

impl DocumentBuilder {
    /// Start a document whose first page has the given dimensions
    pub fn begin(title: &str, page_width_mm: f32, page_height_mm: f32) -> Self {
        Self {
            doc: PdfDocument::new(title),
            page_width_mm,
            page_height_mm,
            ops: Vec::new(),
        }
    }

    /// Commit the current page and start a new one of the given dimensions
    pub fn add_page(&mut self, page_width_mm: f32, page_height_mm: f32) {
        self.flush_page();
        self.page_width_mm = page_width_mm;
        self.page_height_mm = page_height_mm;
    }

    /// Pages in the document so far, including the one being assembled
    pub fn page_count(&self) -> usize {
        self.doc.pages.len() + 1
    }

    /// Embed an image on the current page at the placement's offset and size.
    ///
    /// The raster is decoded on the blocking pool and embedded as-is; no
    /// transcoding to another compression format takes place.
    pub async fn place_image(&mut self, bytes: &[u8], placement: &Placement) -> Result<()> {
        let bytes = bytes.to_vec();
        let raw = tokio::task::spawn_blocking(move || {
            let mut warnings = Vec::new();
            RawImage::decode_from_bytes(&bytes, &mut warnings)
                .map_err(|e| ComposeError::Pdf(e.to_string()))
        })
        .await??;

        // With dpi pinned to 72 the image's natural size equals its pixel
        // count in points; scale from there to the placement size.
        let scale_x = Mm(placement.render_width_mm).into_pt().0 / raw.width as f32;
        let scale_y = Mm(placement.render_height_mm).into_pt().0 / raw.height as f32;

        let image_id = self.doc.add_image(&raw);
        self.ops.push(Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Mm(placement.offset_x_mm).into_pt()),
                translate_y: Some(Mm(placement.offset_y_mm).into_pt()),
                scale_x: Some(scale_x),
                scale_y: Some(scale_y),
                dpi: Some(72.0),
                ..Default::default()
            },
        });
        Ok(())
    }

    /// Serialize the document to bytes; the builder is consumed
    pub async fn finalize(mut self) -> Result<Vec<u8>> {
        self.flush_page();
        let doc = self.doc;

        // PdfDocument holds Rc-based font data and is not Send, so it cannot
        // cross a spawn_blocking boundary; serialize it in place.
        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

        Ok(bytes)
    }

    fn flush_page(&mut self) {
        let ops = std::mem::take(&mut self.ops);
        self.doc.pages.push(PdfPage::new(
            Mm(self.page_width_mm),
            Mm(self.page_height_mm),
            ops,
        ));
    }
}
