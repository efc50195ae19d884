// Multi-page export: capture the live surface at full scale, rasterize each
// logical page, and assemble the pages into a single PDF artifact.

pub mod assembler;
pub mod handlers;
pub mod pipeline;

pub use assembler::{ArtifactAssembler, PdfAssembler};
pub use pipeline::{export_document, ExportError, ExportOptions};
