//! Export pipeline — temporary full-scale capture of every logical page.
#![allow(dead_code)]
//!
//! # Phases
//! 1. Precondition: a live surface must be attached (abort, no mutation).
//! 2. `CaptureSession::begin` — records the surface style, forces export mode.
//! 3. Per page, ascending: cooperative page swap (settle delay — the renderer
//!    has no completion signal), rasterize at fixed 2× oversampling, fit the
//!    bitmap onto the canonical page centered and aspect-preserved.
//! 4. Switch the renderer back to page 1.
//! 5. The session drop restores every recorded property on every exit path.
//! 6. Save under `First_Last_Resume.pdf` (whitespace collapsed).
//!
//! All work runs on one logical thread; the only suspension points are the
//! settle delay and the rasterize call. Pages are captured strictly in
//! ascending order and the artifact's page order matches capture order. There
//! is no mid-flight cancellation.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::export::assembler::{ArtifactAssembler, AssemblyError};
use crate::layout::planner::{plan, PageIndex, PageLayout};
use crate::layout::transform::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::models::document::{Document, PersonalInfo};
use crate::render::surface::{CaptureSession, ViewHandle};
use crate::render::{RasterOptions, RenderError, Rasterizer, ViewRenderer};

/// Fixed oversampling factor for output sharpness.
pub const OVERSAMPLE: f32 = 2.0;

// ────────────────────────────────────────────────────────────────────────────
// Options and errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    /// Wait after requesting a page swap before rasterizing.
    pub settle_delay: Duration,
}

impl ExportOptions {
    pub fn new(output_dir: impl Into<PathBuf>, settle_delay: Duration) -> Self {
        ExportOptions {
            output_dir: output_dir.into(),
            settle_delay,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("render surface is not available")]
    SurfaceUnavailable,

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Exports the document as a paginated PDF and returns the artifact path.
///
/// On failure the surface style and the document are exactly as they were
/// before the call, aside from normal page-1 selection.
pub async fn export_document(
    document: &Document,
    handle: &ViewHandle,
    renderer: &dyn ViewRenderer,
    rasterizer: &dyn Rasterizer,
    mut assembler: Box<dyn ArtifactAssembler>,
    options: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    if !handle.is_attached() {
        return Err(ExportError::SurfaceUnavailable);
    }

    let layout = plan(document);
    info!(pages = layout.page_count, "starting export capture");

    let session = CaptureSession::begin(handle);
    let capture_result = capture_pages(
        document,
        &layout,
        handle,
        renderer,
        rasterizer,
        assembler.as_mut(),
        options,
    )
    .await;

    // Back to page 1 whether capture succeeded or failed; restoration itself
    // is the session's job and happens on drop.
    if let Err(e) = renderer.show_page(handle, PageIndex::One).await {
        warn!("could not restore page selection after export: {e}");
    }
    drop(session);
    capture_result?;

    let path = options.output_dir.join(artifact_filename(&document.personal));
    assembler.save(&path)?;
    info!(path = %path.display(), "export artifact saved");
    Ok(path)
}

async fn capture_pages(
    document: &Document,
    layout: &PageLayout,
    handle: &ViewHandle,
    renderer: &dyn ViewRenderer,
    rasterizer: &dyn Rasterizer,
    assembler: &mut dyn ArtifactAssembler,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let raster_options = RasterOptions {
        scale: OVERSAMPLE,
        background: [255, 255, 255],
    };

    for page_number in 1..=layout.page_count {
        if page_number > 1 {
            renderer.show_page(handle, PageIndex::Two).await?;
            // Cooperative swap with no completion signal; wait a fixed settle
            // delay before capturing.
            tokio::time::sleep(options.settle_delay).await;
            assembler.add_page();
        }

        let bitmap = rasterizer.rasterize(handle, document, &raster_options).await?;
        let (x, y, w, h) = fit_to_page(bitmap.width_px(), bitmap.height_px(), OVERSAMPLE);
        assembler.add_image(&bitmap, x, y, w, h)?;
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Placement math
// ────────────────────────────────────────────────────────────────────────────

/// Fits a captured bitmap onto the canonical page: scaled by
/// `min(page_w / bitmap_w, page_h / bitmap_h)` so the whole bitmap stays on
/// one page, aspect preserved, centered on both axes. Returns
/// `(x, y, width, height)` in millimetres.
pub fn fit_to_page(width_px: u32, height_px: u32, oversample: f32) -> (f32, f32, f32, f32) {
    let bitmap_w_mm = width_px as f32 / oversample;
    let bitmap_h_mm = height_px as f32 / oversample;
    let scale = (PAGE_WIDTH / bitmap_w_mm).min(PAGE_HEIGHT / bitmap_h_mm);
    let w = bitmap_w_mm * scale;
    let h = bitmap_h_mm * scale;
    ((PAGE_WIDTH - w) / 2.0, (PAGE_HEIGHT - h) / 2.0, w, h)
}

/// `${first}_${last}_Resume.pdf`, with every whitespace run collapsed to a
/// single underscore.
pub fn artifact_filename(personal: &PersonalInfo) -> String {
    let full = format!("{} {}", personal.first_name, personal.last_name);
    let joined = full.split_whitespace().collect::<Vec<_>>().join("_");
    if joined.is_empty() {
        "Resume.pdf".to_string()
    } else {
        format!("{joined}_Resume.pdf")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
