use crate::{
    error::{ApiError, ApiResult},
    extract::{BakeryId, PatchForm},
    form::bakery_patch,
    response::PrettyJson,
    AppState,
};
use axum::extract::State;
use bakery_service::{Mutation, Query};
use entity::bakery;

pub async fn get_bakery(
    State(state): State<AppState>,
    BakeryId(id): BakeryId,
) -> ApiResult<PrettyJson<bakery::Model>> {
    let bakery = Query::find_bakery_by_id(&state.conn, id)
        .await?
        .ok_or(ApiError::BakeryNotFound)?;

    Ok(PrettyJson(bakery))
}

pub async fn update_bakery(
    State(state): State<AppState>,
    BakeryId(id): BakeryId,
    form: Result<PatchForm, ApiError>,
) -> ApiResult<PrettyJson<bakery::Model>> {
    let patch = match form.and_then(|PatchForm(fields)| bakery_patch(&fields)) {
        Ok(patch) => patch,
        // An unknown id reports 404 even when the form is also invalid.
        Err(err) => {
            Query::find_bakery_by_id(&state.conn, id)
                .await?
                .ok_or(ApiError::BakeryNotFound)?;
            return Err(err);
        }
    };

    let bakery = Mutation::update_bakery_by_id(&state.conn, id, patch)
        .await?
        .ok_or(ApiError::BakeryNotFound)?;
    tracing::info!(id, name = %bakery.name, "updated bakery");

    Ok(PrettyJson(bakery))
}
