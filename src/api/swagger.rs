use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookmarker Service API",
        version = "1.0.0",
        description = "User resource backing the Bookmarker UI.\n\nUser documents are schema-less apart from a string `id`; any other attributes are stored and returned verbatim."
    ),
    paths(
        // Users
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::create_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::UserSchema,
            crate::models::CreateUserSchema,
            crate::models::CreateUserResponse,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "List, fetch and create user documents."),
        (name = "Health", description = "Health check and request counters."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/user"));
        assert!(doc.paths.paths.contains_key("/user/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
