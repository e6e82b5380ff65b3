use crate::{
    error::{ApiError, ApiResult},
    extract::BakedGoodId,
    form::BakedGoodForm,
    response::{Message, PrettyJson},
    AppState,
};
use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::StatusCode,
};
use bakery_service::{Mutation, NewBakedGood, Query};
use entity::baked_good;

pub async fn list_baked_goods(
    State(state): State<AppState>,
) -> ApiResult<PrettyJson<Vec<baked_good::Model>>> {
    let baked_goods = Query::find_all_baked_goods(&state.conn).await?;

    Ok(PrettyJson(baked_goods))
}

pub async fn create_baked_good(
    State(state): State<AppState>,
    form: Result<Form<BakedGoodForm>, FormRejection>,
) -> ApiResult<(StatusCode, PrettyJson<baked_good::Model>)> {
    let Form(form) = form?;
    let form = NewBakedGood::try_from(form)?;

    let baked_good = Mutation::create_baked_good(&state.conn, form).await?;
    tracing::info!(id = baked_good.id, name = %baked_good.name, "created baked good");

    Ok((StatusCode::CREATED, PrettyJson(baked_good)))
}

pub async fn delete_baked_good(
    State(state): State<AppState>,
    BakedGoodId(id): BakedGoodId,
) -> ApiResult<PrettyJson<Message>> {
    let baked_good = Mutation::delete_baked_good(&state.conn, id)
        .await?
        .ok_or(ApiError::BakedGoodNotFound)?;
    tracing::info!(id, name = %baked_good.name, "deleted baked good");

    Ok(PrettyJson(Message::new(format!(
        "Baked good '{}' with ID {} was successfully deleted.",
        baked_good.name, id
    ))))
}
