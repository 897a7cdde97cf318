use crate::types::{Margin, Orientation, PageSize};

#[cfg(feature = "serde")]
use crate::types::{ComposeError, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-conversion settings, immutable for the duration of one `compose` call
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComposeOptions {
    pub page_size: PageSize,
    /// Meaningful for fixed page sizes only; `Auto` pages take their
    /// aspect ratio from the image
    pub orientation: Orientation,
    pub margin: Margin,
    pub output_filename: String,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            margin: Margin::Small,
            output_filename: "converted_images.pdf".to_string(),
        }
    }
}

impl ComposeOptions {
    /// Suggested filename for the produced blob, with `.pdf` appended when
    /// the configured name does not already carry it
    pub fn resolved_filename(&self) -> String {
        if self.output_filename.to_lowercase().ends_with(".pdf") {
            self.output_filename.clone()
        } else {
            format!("{}.pdf", self.output_filename)
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ComposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ComposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
