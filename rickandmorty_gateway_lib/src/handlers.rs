//! HTTP handlers for the `/characters` routes.
//!
//! Every success is `200` with a `{"data": ...}` body; failures render
//! through [`GatewayError`].

use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::Uri;
use axum::Json;
use rickandmorty_api::types::{Character, Response};

use crate::error::GatewayError;
use crate::source::CharacterSource;
use crate::validation::{first_query_value, raw_last_segment, require_param, sanitize_search_name};

/// Shared handler state: the upstream capability, nothing else.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CharacterSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        Self { source }
    }
}

/// The decoded path parameter, or the raw segment when it does not decode
/// (e.g. invalid UTF-8). Nothing is rejected at extraction time.
fn path_param(path: Result<Path<String>, PathRejection>, uri: &Uri) -> String {
    match path {
        Ok(Path(value)) => value,
        Err(e) => {
            tracing::debug!("passing raw path segment through: {}", e);
            raw_last_segment(uri.path()).to_string()
        }
    }
}

/// `GET /characters/{id}`
pub async fn get_character(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Response<Character>>, GatewayError> {
    let id = path_param(path, &uri);
    character_by_id(&state, Some(&id)).await
}

/// `GET /characters/`: the id segment is empty.
pub async fn get_character_without_id(
    State(state): State<AppState>,
) -> Result<Json<Response<Character>>, GatewayError> {
    character_by_id(&state, None).await
}

async fn character_by_id(
    state: &AppState,
    id: Option<&str>,
) -> Result<Json<Response<Character>>, GatewayError> {
    let id = require_param("id", id)?;
    let character = state.source.get_one(id).await?;
    Ok(Json(Response { data: character }))
}

/// `GET /characters/get/{ids}`
pub async fn get_characters(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Response<Vec<Character>>>, GatewayError> {
    let ids = path_param(path, &uri);
    characters_by_ids(&state, &ids).await
}

/// `GET /characters/get/`: an empty batch is still sent upstream.
pub async fn get_characters_without_ids(
    State(state): State<AppState>,
) -> Result<Json<Response<Vec<Character>>>, GatewayError> {
    characters_by_ids(&state, "").await
}

async fn characters_by_ids(
    state: &AppState,
    ids: &str,
) -> Result<Json<Response<Vec<Character>>>, GatewayError> {
    let characters = state.source.get_many(ids).await?;
    Ok(Json(Response { data: characters }))
}

/// `GET /characters/search?name=`
///
/// Only the first `name` counts when the parameter repeats.
pub async fn search_characters(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Response<Vec<Character>>>, GatewayError> {
    let name = first_query_value(query.as_deref(), "name");
    let name = require_param("name", name.as_deref())?;
    let name = sanitize_search_name(name)?;
    tracing::debug!("searching characters named {}", name);
    let characters = state.source.search(&name).await?;
    Ok(Json(Response { data: characters }))
}

/// `GET /characters/list`
pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<Response<Vec<Character>>>, GatewayError> {
    let characters = state.source.list_all().await?;
    tracing::debug!("listed {} characters", characters.len());
    Ok(Json(Response { data: characters }))
}
