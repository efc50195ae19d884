// Document layout core: pagination planning and the canonical coordinate model.

pub mod handlers;
pub mod planner;
pub mod transform;

// Re-export the public API consumed by other modules (interaction, export).
pub use planner::{page_count, plan, PageIndex, PageLayout, SectionId};
pub use transform::{CanonicalPoint, CanonicalSize, ViewContext, PAGE_HEIGHT, PAGE_WIDTH};
