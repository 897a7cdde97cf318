pub mod compose;
mod builder;
mod constants;
mod layout;
mod options;
mod probe;
mod types;

pub use builder::DocumentBuilder;
pub use compose::compose;
pub use constants::{MM_PER_PIXEL, px_to_mm};
pub use layout::{Placement, fit_and_center, page_dimensions_mm, plan_page, plan_pages};
pub use options::ComposeOptions;
pub use probe::probe_dimensions;
pub use types::*;
