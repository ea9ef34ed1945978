//! Handlers for `/groups` and `/groups/{id}`

use super::{list_query, location, path_ids};
use crate::core::entity::Record;
use crate::core::error::{EntityError, RequestError, RollcallError};
use crate::entities::Group;
use crate::query::QueryParams;
use crate::server::host::ServerHost;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{OriginalUri, Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;

fn not_found(id: i64) -> RollcallError {
    EntityError::NotFound {
        entity_type: Group::resource_name_singular(),
        id,
    }
    .into()
}

fn invalid_body(rejection: JsonRejection) -> RollcallError {
    RequestError::InvalidBody {
        entity_type: "Group",
        message: rejection.body_text(),
    }
    .into()
}

/// `GET /groups?page&limit&filter&sort`
pub async fn list_groups(
    State(host): State<Arc<ServerHost>>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<Vec<Group>>, RollcallError> {
    let query = list_query(params, host.group_limit())?;
    let groups = host.service.find_groups(&query).await?;
    Ok(Json(groups))
}

/// `GET /groups/{id}`
pub async fn get_group(
    State(host): State<Arc<ServerHost>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Group>, RollcallError> {
    let id = path_ids(path)?;
    let group = host.service.find_one(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(group))
}

/// `POST /groups`
///
/// Any id in the body is ignored; the store assigns a fresh one.
pub async fn create_group(
    State(host): State<Arc<ServerHost>>,
    uri: OriginalUri,
    body: Result<Json<Group>, JsonRejection>,
) -> Result<impl IntoResponse, RollcallError> {
    let Json(mut group) = body.map_err(invalid_body)?;
    group.id = None;

    let saved = host.service.save(group).await?;
    tracing::info!(id = ?saved.id, "group created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(&uri, saved.id))],
        Json(saved),
    ))
}

/// `PUT /groups/{id}`
///
/// Full replacement. The target must exist and the body must carry the
/// same id as the path.
pub async fn update_group(
    State(host): State<Arc<ServerHost>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Group>, JsonRejection>,
) -> Result<StatusCode, RollcallError> {
    let id = path_ids(path)?;
    if host.service.find_one(id).await?.is_none() {
        return Err(not_found(id));
    }

    let Json(group) = body.map_err(invalid_body)?;
    if group.id != Some(id) {
        return Err(RequestError::IdMismatch {
            entity_type: Group::resource_name_singular(),
            path_id: id,
            body_id: group.id,
        }
        .into());
    }

    host.service.save(group).await?;
    Ok(StatusCode::OK)
}

/// `DELETE /groups/{id}`
///
/// Members of the group are not removed.
pub async fn delete_group(
    State(host): State<Arc<ServerHost>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, RollcallError> {
    let id = path_ids(path)?;
    match host.service.delete(id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(not_found(id)),
    }
}
