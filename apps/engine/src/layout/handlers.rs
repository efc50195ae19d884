use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::layout::planner::{page_count, plan, PageLayout};
use crate::models::document::Document;

#[derive(Serialize)]
pub struct PageCountResponse {
    pub page_count: u8,
}

/// POST /api/v1/layout/plan
pub async fn handle_plan(Json(document): Json<Document>) -> Result<Json<PageLayout>, AppError> {
    Ok(Json(plan(&document)))
}

/// POST /api/v1/layout/pages
///
/// The preview navigator's page count. Same predicate as the planner.
pub async fn handle_page_count(
    Json(document): Json<Document>,
) -> Result<Json<PageCountResponse>, AppError> {
    Ok(Json(PageCountResponse {
        page_count: page_count(&document),
    }))
}
