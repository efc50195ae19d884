use axum::{extract::Path, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interaction::controller::{nudge_decoration, ElementController, NudgeDirection};
use crate::layout::transform::{ViewContext, ViewPoint};
use crate::models::document::Document;

#[derive(Deserialize)]
pub struct NudgeRequest {
    pub document: Document,
    pub direction: NudgeDirection,
    #[serde(default)]
    pub fast: bool,
}

#[derive(Deserialize)]
pub struct GestureRequest {
    pub document: Document,
    pub scale_factor: f32,
    /// Pointer samples in view pixels: the first is pointer-down, the rest
    /// are moves; pointer-up is implicit after the last sample.
    pub samples: Vec<ViewPoint>,
}

/// POST /api/v1/decorations/:id/nudge
///
/// Stateless application of an arrow-key nudge; returns the updated document.
pub async fn handle_nudge(
    Path(id): Path<Uuid>,
    Json(req): Json<NudgeRequest>,
) -> Result<Json<Document>, AppError> {
    let mut document = req.document;
    nudge_decoration(&mut document, id, req.direction, req.fast);
    Ok(Json(document))
}

/// POST /api/v1/decorations/:id/gesture
///
/// Replays a pointer gesture (down, moves, up) through the element controller
/// in the caller's view scale and returns the updated document. A gesture on
/// a since-deleted decoration returns the document unchanged.
pub async fn handle_gesture(
    Path(id): Path<Uuid>,
    Json(req): Json<GestureRequest>,
) -> Result<Json<Document>, AppError> {
    let Some((first, moves)) = req.samples.split_first() else {
        return Err(AppError::Validation(
            "gesture requires at least one pointer sample".to_string(),
        ));
    };

    let ctx = ViewContext::new(req.scale_factor);
    let mut document = req.document;
    let mut controller = ElementController::new();

    controller.begin_gesture(&document, id, *first, &ctx);
    for sample in moves {
        controller.update_gesture(&mut document, *sample, &ctx);
    }
    controller.end_gesture();

    Ok(Json(document))
}
