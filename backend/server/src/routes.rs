use std::sync::Arc;

use atlas::{
    AddressLevel, AddressOptions, AddressRecord, AddressSelection, AddressType, apply_field_change,
    list_barangays, list_municipalities, list_provinces, list_regions, resolve_options,
};
use axum::{
    Json,
    extract::{Path, Query, State as Extract},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::{error::AppError, state::State, utils::session_from_headers};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Ancestors {
    region: String,
    province: String,
    municipality: String,
}

#[derive(Deserialize)]
pub struct FieldChange {
    selection: AddressSelection,
    level: AddressLevel,
    value: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAddress {
    selection: AddressSelection,
    address_type: AddressType,
}

pub async fn regions_handler(Extract(state): Extract<Arc<State>>) -> Json<Vec<String>> {
    Json(owned(list_regions(&state.tree)))
}

pub async fn provinces_handler(
    Extract(state): Extract<Arc<State>>,
    Query(query): Query<Ancestors>,
) -> Json<Vec<String>> {
    Json(owned(list_provinces(&state.tree, &query.region)))
}

pub async fn municipalities_handler(
    Extract(state): Extract<Arc<State>>,
    Query(query): Query<Ancestors>,
) -> Json<Vec<String>> {
    Json(owned(list_municipalities(
        &state.tree,
        &query.region,
        &query.province,
    )))
}

pub async fn barangays_handler(
    Extract(state): Extract<Arc<State>>,
    Query(query): Query<Ancestors>,
) -> Json<Vec<String>> {
    Json(owned(list_barangays(
        &state.tree,
        &query.region,
        &query.province,
        &query.municipality,
    )))
}

pub async fn options_handler(
    Extract(state): Extract<Arc<State>>,
    Json(selection): Json<AddressSelection>,
) -> Response {
    let options: AddressOptions = resolve_options(&state.tree, &selection);

    Json(options).into_response()
}

pub async fn change_handler(Json(change): Json<FieldChange>) -> Json<AddressSelection> {
    debug!("Field change on {}", change.level);

    Json(apply_field_change(
        &change.selection,
        change.level,
        change.value,
    ))
}

pub async fn fetch_addresses_handler(
    Extract(state): Extract<Arc<State>>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<AddressRecord>>, AppError> {
    let session = session_from_headers(&headers)?;

    Ok(Json(state.records.fetch(&session, &user_id).await?))
}

pub async fn create_address_handler(
    Extract(state): Extract<Arc<State>>,
    headers: HeaderMap,
    Json(save): Json<SaveAddress>,
) -> Result<(StatusCode, Json<AddressRecord>), AppError> {
    let session = session_from_headers(&headers)?;
    let payload = save.selection.to_payload(save.address_type);

    let record = state.records.create(&session, &payload).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_address_handler(
    Extract(state): Extract<Arc<State>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(save): Json<SaveAddress>,
) -> Result<Json<AddressRecord>, AppError> {
    let session = session_from_headers(&headers)?;
    let payload = save.selection.to_payload(save.address_type);

    Ok(Json(state.records.update(&session, &id, &payload).await?))
}

pub async fn delete_address_handler(
    Extract(state): Extract<Arc<State>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let session = session_from_headers(&headers)?;
    state.records.delete(&session, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}
