//! Handlers for `/groups/{id}/members` and `/groups/{id}/members/{member_id}`

use super::{list_query, location, path_ids};
use crate::core::entity::Record;
use crate::core::error::{EntityError, RequestError, RollcallError};
use crate::entities::{Group, Member};
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

fn invalid_body(rejection: JsonRejection) -> RollcallError {
    RequestError::InvalidBody {
        entity_type: "Member",
        message: rejection.body_text(),
    }
    .into()
}

fn member_not_found(group_id: i64, member_id: i64) -> RollcallError {
    EntityError::MemberNotFound {
        group_id,
        member_id,
    }
    .into()
}

/// `GET /groups/{id}/members?page&limit&filter&sort`
///
/// The group must exist. A group that never had members lists as `[]`.
pub async fn list_members(
    State(host): State<Arc<ServerHost>>,
    path: Result<Path<i64>, PathRejection>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<Vec<Member>>, RollcallError> {
    let group_id = path_ids(path)?;
    if host.service.find_one(group_id).await?.is_none() {
        return Err(EntityError::GroupNotFound { id: group_id }.into());
    }

    let query = list_query(params, host.member_limit())?;
    let members = host
        .service
        .find_members(group_id, &query)
        .await?
        .unwrap_or_default();
    Ok(Json(members))
}

/// `GET /groups/{id}/members/{member_id}`
pub async fn get_member(
    State(host): State<Arc<ServerHost>>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Json<Member>, RollcallError> {
    let (group_id, member_id) = path_ids(path)?;
    let member = host
        .service
        .find_member(group_id, member_id)
        .await?
        .ok_or_else(|| member_not_found(group_id, member_id))?;
    Ok(Json(member))
}

/// `POST /groups/{id}/members`
///
/// The member partition is created on first use. Any id in the body is
/// ignored.
pub async fn create_member(
    State(host): State<Arc<ServerHost>>,
    path: Result<Path<i64>, PathRejection>,
    uri: OriginalUri,
    body: Result<Json<Member>, JsonRejection>,
) -> Result<impl IntoResponse, RollcallError> {
    let group_id = path_ids(path)?;
    let Json(mut member) = body.map_err(invalid_body)?;
    member.id = None;

    let saved = host.service.save_member(group_id, member).await?;
    tracing::info!(group_id, id = ?saved.id, "member created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(&uri, saved.id))],
        Json(saved),
    ))
}

/// `PUT /groups/{id}/members/{member_id}`
pub async fn update_member(
    State(host): State<Arc<ServerHost>>,
    path: Result<Path<(i64, i64)>, PathRejection>,
    body: Result<Json<Member>, JsonRejection>,
) -> Result<StatusCode, RollcallError> {
    let (group_id, member_id) = path_ids(path)?;
    if host.service.find_one(group_id).await?.is_none() {
        return Err(EntityError::NotFound {
            entity_type: Group::resource_name_singular(),
            id: group_id,
        }
        .into());
    }
    if host.service.find_member(group_id, member_id).await?.is_none() {
        return Err(member_not_found(group_id, member_id));
    }

    let Json(member) = body.map_err(invalid_body)?;
    if member.id != Some(member_id) {
        return Err(RequestError::IdMismatch {
            entity_type: Member::resource_name_singular(),
            path_id: member_id,
            body_id: member.id,
        }
        .into());
    }

    host.service.save_member(group_id, member).await?;
    Ok(StatusCode::OK)
}

/// `DELETE /groups/{id}/members/{member_id}`
pub async fn delete_member(
    State(host): State<Arc<ServerHost>>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<StatusCode, RollcallError> {
    let (group_id, member_id) = path_ids(path)?;
    match host.service.delete_member(group_id, member_id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(member_not_found(group_id, member_id)),
    }
}
