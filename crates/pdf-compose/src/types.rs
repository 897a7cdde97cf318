use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("No images to compose")]
    EmptyInput,
    #[error("Unsupported image format: {name}")]
    UnsupportedFormat { name: String },
    #[error("Failed to decode '{name}': {detail}")]
    Decode { name: String, detail: String },
    #[error(
        "Margin of {margin_mm}mm leaves no printable area on a {page_width_mm}x{page_height_mm}mm page"
    )]
    InvalidLayout {
        margin_mm: f32,
        page_width_mm: f32,
        page_height_mm: f32,
    },
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ComposeError>;

/// Caller-assigned handle for a queued image, stable while its list lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

/// One encoded raster image queued for composition.
///
/// Read exactly once per conversion; never mutated by the library.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub id: ImageId,
    pub bytes: Vec<u8>,
    pub display_name: String,
}

/// Decoded image size in pixels (both dimensions are non-zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelDimensions {
    pub width: u32,
    pub height: u32,
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Page size policy for the output document
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    /// Each page is sized to its image plus the uniform margin, so pages
    /// may differ in size across one document
    Auto,
}

impl PageSize {
    /// Base dimensions in mm (always portrait: width < height).
    /// `None` for [`PageSize::Auto`], which has no fixed dimensions.
    pub fn dimensions_mm(self) -> Option<(f32, f32)> {
        match self {
            PageSize::A4 => Some((210.0, 297.0)),
            PageSize::Letter => Some((215.9, 279.4)),
            PageSize::Auto => None,
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> Option<(f32, f32)> {
        let (w, h) = self.dimensions_mm()?;
        match orientation {
            Orientation::Portrait => Some((w, h)),
            Orientation::Landscape => Some((h, w)),
        }
    }
}

/// Uniform margin applied to all four sides of every page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Margin {
    None,
    #[default]
    Small,
    Large,
    Custom {
        mm: f32,
    },
}

impl Margin {
    pub fn mm(self) -> f32 {
        match self {
            Margin::None => 0.0,
            Margin::Small => 10.0,
            Margin::Large => 20.0,
            Margin::Custom { mm } => mm,
        }
    }
}
