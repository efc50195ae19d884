//! Artifact assembly — paginated PDF output behind a narrow trait.
#![allow(dead_code)]
//!
//! The pipeline talks to `ArtifactAssembler` only (`add_page`, `add_image`,
//! `save`); `PdfAssembler` is the printpdf-backed implementation. Images are
//! placed in millimetres on A4-equivalent pages, converted to PDF points at
//! assembly time.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::ops::Op;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, XObjectId};
use thiserror::Error;

use crate::layout::transform::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::render::Bitmap;

// ────────────────────────────────────────────────────────────────────────────
// Trait
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("image embedding failed: {0}")]
    Image(String),

    #[error("artifact write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The output-side collaborator of the export pipeline. One page exists after
/// construction; `add_page` appends further pages; placement coordinates are
/// millimetres from the page's top-left corner.
pub trait ArtifactAssembler: Send {
    fn add_page(&mut self);

    fn add_image(
        &mut self,
        bitmap: &Bitmap,
        x_mm: f32,
        y_mm: f32,
        width_mm: f32,
        height_mm: f32,
    ) -> Result<(), AssemblyError>;

    fn save(self: Box<Self>, path: &Path) -> Result<(), AssemblyError>;
}

// ────────────────────────────────────────────────────────────────────────────
// printpdf implementation
// ────────────────────────────────────────────────────────────────────────────

pub struct PdfAssembler {
    document: PdfDocument,
    /// Op lists per output page, in page order.
    pages: Vec<Vec<Op>>,
}

impl PdfAssembler {
    pub fn new(title: &str) -> Self {
        PdfAssembler {
            document: PdfDocument::new(title),
            pages: vec![Vec::new()],
        }
    }
}

impl ArtifactAssembler for PdfAssembler {
    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn add_image(
        &mut self,
        bitmap: &Bitmap,
        x_mm: f32,
        y_mm: f32,
        width_mm: f32,
        height_mm: f32,
    ) -> Result<(), AssemblyError> {
        let png = bitmap
            .to_png_bytes()
            .map_err(|e| AssemblyError::Image(e.to_string()))?;
        let mut warnings = Vec::new();
        let raw_image = printpdf::image::RawImage::decode_from_bytes(&png, &mut warnings)
            .map_err(|e| AssemblyError::Image(format!("decode failed: {e}")))?;

        let xobj_id = XObjectId::new();
        self.document
            .resources
            .xobjects
            .map
            .insert(xobj_id.clone(), XObject::Image(raw_image));

        // PDF origin is bottom-left; placement coordinates are top-left.
        let page_height_pt = Mm(PAGE_HEIGHT).into_pt().0;
        let x_pt = Mm(x_mm).into_pt().0;
        let y_pt = page_height_pt - Mm(y_mm + height_mm).into_pt().0;
        let width_pt = Mm(width_mm).into_pt().0;
        let height_pt = Mm(height_mm).into_pt().0;

        let transform = XObjectTransform {
            translate_x: Some(Pt(x_pt)),
            translate_y: Some(Pt(y_pt)),
            scale_x: Some(width_pt / bitmap.width_px() as f32),
            scale_y: Some(height_pt / bitmap.height_px() as f32),
            rotate: None,
            dpi: Some(72.0),
        };

        // add_image always targets the most recently added page.
        if let Some(ops) = self.pages.last_mut() {
            ops.push(Op::UseXobject {
                id: xobj_id,
                transform,
            });
        }
        Ok(())
    }

    fn save(self: Box<Self>, path: &Path) -> Result<(), AssemblyError> {
        let mut document = self.document;
        for ops in self.pages {
            document
                .pages
                .push(PdfPage::new(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), ops));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        let mut warnings = Vec::new();
        document.save_writer(&mut writer, &PdfSaveOptions::default(), &mut warnings);
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
