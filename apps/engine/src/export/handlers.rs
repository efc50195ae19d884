use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::export::assembler::{ArtifactAssembler, PdfAssembler};
use crate::export::pipeline::{export_document, ExportError, ExportOptions};
use crate::layout::planner::PageIndex;
use crate::models::document::Document;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ExportResponse {
    pub filename: String,
}

/// POST /api/v1/export
///
/// Runs the full capture pipeline against the live preview surface and
/// returns the artifact filename. Failures surface as one generic message;
/// the surface and document are left exactly as they were.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(document): Json<Document>,
) -> Result<Json<ExportResponse>, AppError> {
    // Bring the preview surface up to date with the posted document before
    // capturing it.
    state
        .renderer
        .render(&document, PageIndex::One, &state.preview)
        .await
        .map_err(|e| AppError::Export(ExportError::Render(e)))?;

    let assembler: Box<dyn ArtifactAssembler> = Box::new(PdfAssembler::new("Resume"));
    let options = ExportOptions::new(
        state.config.export_dir.clone(),
        state.config.export_settle_delay,
    );

    let path = export_document(
        &document,
        &state.preview,
        state.renderer.as_ref(),
        state.rasterizer.as_ref(),
        assembler,
        &options,
    )
    .await?;

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Json(ExportResponse { filename }))
}
