use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use configs::PaginationConfig;
use service::settings::domain::{SettingsCreate, SettingsList, SettingsResponse, SettingsUpdate};

use crate::{errors::JsonApiError, state::AppState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page index, default 1
    pub page: Option<i64>,
    /// Items per page, default 10
    pub page_size: Option<i64>,
}

impl ListQuery {
    /// Resolve defaults and reject values outside `page >= 1`, `1 <= page_size <= max`.
    pub fn resolve(&self, cfg: &PaginationConfig) -> Result<(u64, u64), JsonApiError> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(cfg.default_page_size as i64);
        if page < 1 {
            return Err(JsonApiError::bad_request("page must be >= 1"));
        }
        if page_size < 1 || page_size as u64 > cfg.max_page_size {
            return Err(JsonApiError::bad_request(format!(
                "page_size must be between 1 and {}",
                cfg.max_page_size
            )));
        }
        Ok((page as u64, page_size as u64))
    }
}

#[utoipa::path(
    post, path = "/settings", tag = "Settings",
    request_body = crate::openapi::SettingsPayloadDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SettingsResponseDoc),
        (status = 400, description = "Malformed JSON", body = crate::openapi::ErrorBodyDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<SettingsCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<SettingsResponse>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.settings.create_settings(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/settings", tag = "Settings",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of settings", body = crate::openapi::SettingsListDoc),
        (status = 400, description = "Invalid paging", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<SettingsList>, JsonApiError> {
    let Query(q) = query?;
    let (page, page_size) = q.resolve(&state.pagination)?;
    let list = state.settings.get_all_settings(page, page_size).await?;
    info!(count = list.items.len(), total = list.total, page, page_size, "list settings");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/settings/{id}", tag = "Settings",
    params(("id" = String, Path, description = "Settings ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SettingsResponseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SettingsResponse>, JsonApiError> {
    state
        .settings
        .get_settings_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(JsonApiError::not_found)
}

#[utoipa::path(
    put, path = "/settings/{id}", tag = "Settings",
    params(("id" = String, Path, description = "Settings ID")),
    request_body = crate::openapi::SettingsPayloadDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::SettingsResponseDoc),
        (status = 400, description = "Malformed JSON", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SettingsUpdate>, JsonRejection>,
) -> Result<Json<SettingsResponse>, JsonApiError> {
    let Json(input) = payload?;
    state
        .settings
        .update_settings(&id, input)
        .await?
        .map(Json)
        .ok_or_else(JsonApiError::not_found)
}

#[utoipa::path(
    delete, path = "/settings/{id}", tag = "Settings",
    params(("id" = String, Path, description = "Settings ID")),
    responses(
        (status = 204, description = "Deleted, or already absent"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.settings.delete_settings(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> PaginationConfig { PaginationConfig::default() }

    #[test]
    fn defaults_apply_when_omitted() {
        assert_eq!(ListQuery::default().resolve(&cfg()).unwrap(), (1, 10));
    }

    #[test]
    fn rejects_non_positive_page() {
        let q = ListQuery { page: Some(0), page_size: None };
        assert_eq!(q.resolve(&cfg()).unwrap_err().status, StatusCode::BAD_REQUEST);
        let q = ListQuery { page: Some(-3), page_size: None };
        assert!(q.resolve(&cfg()).is_err());
    }

    #[test]
    fn rejects_page_size_out_of_bounds() {
        let q = ListQuery { page: None, page_size: Some(0) };
        assert!(q.resolve(&cfg()).is_err());
        let q = ListQuery { page: None, page_size: Some(101) };
        assert!(q.resolve(&cfg()).is_err());
        let q = ListQuery { page: Some(3), page_size: Some(100) };
        assert_eq!(q.resolve(&cfg()).unwrap(), (3, 100));
    }
}
