//! Headless renderer and rasterizer — in-process collaborators.
#![allow(dead_code)]
//!
//! The production wizard renders the preview in a browser; the engine ships a
//! headless pair so the export route works end-to-end without one. The
//! renderer is page-switching only; the rasterizer paints the canonical page
//! with decorations as solid blocks. Both honor the surface properties the
//! capture session controls, which is what the pipeline tests exercise.

use async_trait::async_trait;
use image::{Rgba, RgbaImage};

use crate::layout::planner::{plan, PageIndex};
use crate::layout::transform::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::models::decoration::DecorationKind;
use crate::models::document::Document;
use crate::render::surface::ViewHandle;
use crate::render::{Bitmap, RasterOptions, RenderError, Rasterizer, ViewRenderer};

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct HeadlessRenderer;

#[async_trait]
impl ViewRenderer for HeadlessRenderer {
    async fn render(
        &self,
        document: &Document,
        page: PageIndex,
        handle: &ViewHandle,
    ) -> Result<(), RenderError> {
        // Clamp the request to the planned page count, as the preview does.
        let layout = plan(document);
        let page = if layout.page_count < 2 {
            PageIndex::One
        } else {
            page
        };
        handle.set_current_page(page);
        Ok(())
    }

    async fn show_page(&self, handle: &ViewHandle, page: PageIndex) -> Result<(), RenderError> {
        handle.set_current_page(page);
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rasterizer
// ────────────────────────────────────────────────────────────────────────────

const HEADER_BAND_HEIGHT_MM: f32 = 28.0;
const HEADER_FILL: Rgba<u8> = Rgba([52, 73, 94, 255]);
const DECORATION_FILL: Rgba<u8> = Rgba([120, 144, 156, 255]);

/// Paints the surface contents at `style.scale * options.scale` pixels per
/// canonical unit: background, a header band on page 1, and every decoration
/// as a filled block.
#[derive(Debug, Default)]
pub struct BlockRasterizer;

#[async_trait]
impl Rasterizer for BlockRasterizer {
    async fn rasterize(
        &self,
        handle: &ViewHandle,
        document: &Document,
        options: &RasterOptions,
    ) -> Result<Bitmap, RenderError> {
        if !handle.is_attached() {
            return Err(RenderError::SurfaceUnavailable);
        }
        let style = handle.style();
        let px_per_unit = style.scale * options.scale;
        if !px_per_unit.is_finite() || px_per_unit <= 0.0 {
            return Err(RenderError::Rasterize(format!(
                "degenerate pixel density {px_per_unit}"
            )));
        }

        let width = (PAGE_WIDTH * px_per_unit).round().max(1.0) as u32;
        let height = (PAGE_HEIGHT * px_per_unit).round().max(1.0) as u32;
        let [r, g, b] = options.background;
        let mut canvas = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]));

        if handle.current_page() == PageIndex::One {
            fill_rect(
                &mut canvas,
                0.0,
                0.0,
                PAGE_WIDTH * px_per_unit,
                HEADER_BAND_HEIGHT_MM * px_per_unit,
                HEADER_FILL,
            );
        }

        for deco in &document.decorations {
            let fill = match &deco.kind {
                DecorationKind::Line { .. } | DecorationKind::Separator { .. } => {
                    Rgba([84, 110, 122, 255])
                }
                _ => DECORATION_FILL,
            };
            fill_rect(
                &mut canvas,
                deco.position.x * px_per_unit,
                deco.position.y * px_per_unit,
                deco.size.width * px_per_unit,
                deco.size.height * px_per_unit,
                fill,
            );
        }

        Ok(Bitmap { pixels: canvas })
    }
}

fn fill_rect(canvas: &mut RgbaImage, x: f32, y: f32, w: f32, h: f32, fill: Rgba<u8>) {
    let x0 = x.max(0.0) as u32;
    let y0 = y.max(0.0) as u32;
    let x1 = ((x + w).max(0.0) as u32).min(canvas.width());
    let y1 = ((y + h).max(0.0) as u32).min(canvas.height());
    for py in y0..y1 {
        for px in x0..x1 {
            canvas.put_pixel(px, py, fill);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
