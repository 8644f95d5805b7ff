use axum::{extract::rejection::JsonRejection, routing::post, Extension, Json, Router};
use serde::Serialize;

use super::scripting_service::{GenerateRequest, ImproveRequest, TranslateRequest};
use crate::{app_module::AppState, shared::api_error::ApiError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveResponse {
    pub improved_script: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub generated_script: String,
}

pub fn scripting_router() -> Router {
    Router::new()
        .route("/translate", post(translate))
        .route("/improve-script", post(improve_script))
        .route("/generate-script", post(generate_script))
}

/// Type errors name the offending field; syntax and content-type problems
/// get a fixed message.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::JsonDataError(err)) => Err(ApiError::invalid(err.body_text())),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            Err(ApiError::invalid("Request body must be a JSON object"))
        }
    }
}

pub async fn translate(
    Extension(ctx): Extension<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let request = json_body(payload)?;
    let translated_text = ctx.service.scripting_service.translate(request).await?;
    Ok(Json(TranslateResponse { translated_text }))
}

pub async fn improve_script(
    Extension(ctx): Extension<AppState>,
    payload: Result<Json<ImproveRequest>, JsonRejection>,
) -> Result<Json<ImproveResponse>, ApiError> {
    let request = json_body(payload)?;
    let improved_script = ctx.service.scripting_service.improve(request).await?;
    Ok(Json(ImproveResponse { improved_script }))
}

pub async fn generate_script(
    Extension(ctx): Extension<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request = json_body(payload)?;
    let generated_script = ctx.service.scripting_service.generate(request).await?;
    Ok(Json(GenerateResponse { generated_script }))
}
