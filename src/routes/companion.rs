//! Companion form page routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use tracing::{error, warn};

use crate::companion::{Category, CompanionValues};
use crate::form::{CompanionFormView, Field, FieldErrors, FormMode, SubmitOutcome, render};
use crate::services::page::{self, PageError};
use crate::services::submit;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionPageResponse {
    pub companion_id: String,
    pub mode: FormMode,
    pub values: CompanionValues,
    pub categories: Vec<Category>,
    pub form: CompanionFormView,
}

#[derive(Serialize)]
pub struct InvalidSubmissionResponse {
    pub errors: FieldErrors,
    pub form: CompanionFormView,
}

#[derive(Serialize)]
pub struct SubmittedResponse {
    pub ok: bool,
    pub mode: FormMode,
    pub persisted: bool,
}

/// `GET /api/companion/:companion_id` — load the form, pre-filled when the
/// companion exists.
pub async fn get_companion_page(
    State(state): State<AppState>,
    Path(companion_id): Path<String>,
) -> Result<Json<CompanionPageResponse>, StatusCode> {
    let page = page::load_companion_page(state.store.as_ref(), &companion_id)
        .await
        .map_err(page_error_to_status)?;

    let form = page.form();
    let view = render(&form, &page.categories);

    Ok(Json(CompanionPageResponse {
        companion_id: page.companion_id,
        mode: form.mode(),
        values: form.values().clone(),
        categories: page.categories,
        form: view,
    }))
}

/// `POST /api/companion/:companion_id` — validate a draft and hand it to the
/// submit handler.
pub async fn submit_companion(
    State(state): State<AppState>,
    Path(companion_id): Path<String>,
    Json(values): Json<CompanionValues>,
) -> Result<Response, StatusCode> {
    let page = page::load_companion_page(state.store.as_ref(), &companion_id)
        .await
        .map_err(page_error_to_status)?;

    let mut form = page.form();
    form.set_values(values);

    let outcome = form
        .handle_submit(|values| submit::log_submission(companion_id.clone(), values))
        .await;

    match outcome {
        SubmitOutcome::Submitted => {
            let body = SubmittedResponse { ok: true, mode: form.mode(), persisted: false };
            Ok(Json(body).into_response())
        }
        SubmitOutcome::Invalid(errors) => {
            let fields: Vec<&str> = errors.fields().map(Field::as_str).collect();
            warn!(%companion_id, ?fields, "companion submission rejected");
            let body = InvalidSubmissionResponse { form: render(&form, &page.categories), errors };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response())
        }
        SubmitOutcome::Failed(message) => {
            error!(%companion_id, error = %message, "companion submission failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub(crate) fn page_error_to_status(err: PageError) -> StatusCode {
    error!(error = %err, "companion page load failed");
    match err {
        PageError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "companion_test.rs"]
mod tests;
