//! Shared constants for image composition
//!
//! This module centralizes the unit-conversion factors that determine the
//! visual scale of the output. They are fixed by design, not configurable.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimetres per source pixel (source rasters are treated as 96 px/inch)
pub const MM_PER_PIXEL: f32 = 25.4 / 96.0; // ≈ 0.264583

/// Convert a pixel length to millimetres
#[inline]
pub fn px_to_mm(px: u32) -> f32 {
    px as f32 * MM_PER_PIXEL
}
