//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router` with the group and
//! member routes mounted under the configured base path.

pub mod groups;
pub mod members;

use super::super::host::ServerHost;
use crate::core::error::{RequestError, RollcallError};
use crate::query::{QueryParams, RecordQuery};
use anyhow::Result;
use axum::extract::OriginalUri;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes at the root
    /// - Group and member routes under `server.base_path`
    /// - A `TraceLayer` around everything
    pub fn build_router(host: Arc<ServerHost>) -> Result<Router> {
        let api = Self::group_routes().with_state(host.clone());
        let health = Self::health_routes();

        // Nesting at the root is not allowed by axum
        let app = match host.base_path() {
            "" => health.merge(api),
            base => health.nest(base, api),
        };

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Group and member routes, relative to the base path
    fn group_routes() -> Router<Arc<ServerHost>> {
        Router::new()
            .route(
                "/groups",
                get(groups::list_groups).post(groups::create_group),
            )
            .route(
                "/groups/{id}",
                get(groups::get_group)
                    .put(groups::update_group)
                    .delete(groups::delete_group),
            )
            .route(
                "/groups/{id}/members",
                get(members::list_members).post(members::create_member),
            )
            .route(
                "/groups/{id}/members/{member_id}",
                get(members::get_member)
                    .put(members::update_member)
                    .delete(members::delete_member),
            )
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "rollcall"
        }))
    }
}

/// Map an extractor rejection to a 400
pub(crate) fn malformed(rejection: impl std::fmt::Display) -> RollcallError {
    RequestError::Malformed {
        message: rejection.to_string(),
    }
    .into()
}

/// Unwrap a path extraction, rejecting undecodable ids with a 400
pub(crate) fn path_ids<T>(path: Result<Path<T>, PathRejection>) -> Result<T, RollcallError> {
    path.map(|Path(ids)| ids).map_err(malformed)
}

/// Turn raw list parameters into a query, applying the endpoint's default limit
pub(crate) fn list_query(
    params: Result<Query<QueryParams>, QueryRejection>,
    default_limit: usize,
) -> Result<RecordQuery, RollcallError> {
    let Query(params) = params.map_err(malformed)?;
    Ok(params.into_query(default_limit)?)
}

/// `Location` of a freshly created child of the requested collection
pub(crate) fn location(uri: &OriginalUri, id: Option<i64>) -> String {
    let collection = uri.0.path().trim_end_matches('/');
    match id {
        Some(id) => format!("{}/{}", collection, id),
        None => collection.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::storage::InMemoryGroupService;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, Uri};
    use tower::ServiceExt;

    fn router(base_path: &str) -> Router {
        let mut config = AppConfig::default();
        config.server.base_path = base_path.to_string();
        let host = ServerHost::new(config, Arc::new(InMemoryGroupService::new())).unwrap();
        RestExposure::build_router(Arc::new(host)).unwrap()
    }

    async fn status(app: Router, uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_routes_mounted_under_base_path() {
        assert_eq!(status(router("/api/v2"), "/api/v2/groups").await, StatusCode::OK);
        assert_eq!(status(router("/api/v2"), "/groups").await, StatusCode::NOT_FOUND);
        assert_eq!(status(router("/api/v2"), "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_base_path_mounts_at_root() {
        assert_eq!(status(router(""), "/groups").await, StatusCode::OK);
        assert_eq!(status(router(""), "/healthz").await, StatusCode::OK);
    }

    #[test]
    fn test_location_appends_id() {
        let uri = OriginalUri(Uri::from_static("/api/v2/groups?page=1"));
        assert_eq!(location(&uri, Some(12)), "/api/v2/groups/12");

        let uri = OriginalUri(Uri::from_static("/groups/3/members/"));
        assert_eq!(location(&uri, Some(4)), "/groups/3/members/4");
    }

    #[test]
    fn test_malformed_is_bad_request() {
        let err = malformed("Cannot parse `abc` to a `i64`");
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "BAD_REQUEST");
    }
}
