use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RootResponse { pub message: String }

/// Create/replace body. `data` may be any JSON value except `null`.
#[derive(ToSchema)]
pub struct SettingsPayloadDoc {
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[derive(ToSchema)]
pub struct SettingsResponseDoc {
    pub id: String,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[derive(ToSchema)]
pub struct SettingsListDoc {
    pub items: Vec<SettingsResponseDoc>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    pub error: String,
    pub detail: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Settings Management System", version = "1.0.0"),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::settings::create,
        crate::routes::settings::list,
        crate::routes::settings::get,
        crate::routes::settings::update,
        crate::routes::settings::delete,
    ),
    components(
        schemas(
            HealthResponse,
            RootResponse,
            SettingsPayloadDoc,
            SettingsResponseDoc,
            SettingsListDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "Settings")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_settings_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.contains(&"/settings".to_string()));
        assert!(paths.contains(&"/settings/{id}".to_string()));
        assert!(paths.contains(&"/health".to_string()));
    }
}
