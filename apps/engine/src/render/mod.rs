//! Render seams — the view surface and the external collaborator traits.
//!
//! The engine never draws the resume itself; it consumes a `ViewRenderer`
//! (page switching, preview drawing) and a `Rasterizer` (surface → bitmap)
//! behind trait objects, the same seam pattern the rest of the app uses for
//! pluggable collaborators. `headless` provides the in-process
//! implementations that power the HTTP export route and the test suite.

pub mod headless;
pub mod surface;

use async_trait::async_trait;
use image::RgbaImage;
use thiserror::Error;

use crate::layout::planner::PageIndex;
use crate::models::document::Document;
use crate::render::surface::ViewHandle;

// ────────────────────────────────────────────────────────────────────────────
// Bitmap
// ────────────────────────────────────────────────────────────────────────────

/// A rasterized page capture.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pub pixels: RgbaImage,
}

impl Bitmap {
    pub fn width_px(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height_px(&self) -> u32 {
        self.pixels.height()
    }

    /// PNG-encodes the bitmap (the interchange format the PDF assembler
    /// embeds).
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .map_err(|e| RenderError::Rasterize(format!("png encode failed: {e}")))?;
        Ok(bytes)
    }
}

/// Options for a rasterization call.
#[derive(Debug, Clone, Copy)]
pub struct RasterOptions {
    /// Output pixels per canonical unit (the export pipeline passes the fixed
    /// 2× oversampling factor).
    pub scale: f32,
    /// Background fill, RGB.
    pub background: [u8; 3],
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render surface is not attached")]
    SurfaceUnavailable,

    #[error("rasterization failed: {0}")]
    Rasterize(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Collaborator traits
// ────────────────────────────────────────────────────────────────────────────

/// Draws a logical page onto a surface and switches the displayed page.
///
/// `show_page` is a cooperative content swap with no completion signal — the
/// export pipeline waits a fixed settle delay after requesting a swap.
#[async_trait]
pub trait ViewRenderer: Send + Sync {
    async fn render(
        &self,
        document: &Document,
        page: PageIndex,
        handle: &ViewHandle,
    ) -> Result<(), RenderError>;

    async fn show_page(&self, handle: &ViewHandle, page: PageIndex) -> Result<(), RenderError>;
}

/// Captures the current surface contents into a bitmap.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn rasterize(
        &self,
        handle: &ViewHandle,
        document: &Document,
        options: &RasterOptions,
    ) -> Result<Bitmap, RenderError>;
}
