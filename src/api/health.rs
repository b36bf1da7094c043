use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::database::UserRepository;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
    /// `up` or `down`, from a ping of the user store.
    pub storage: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running; `status` is `degraded` when storage is down", body = HealthResponse)
    )
)]
pub async fn health_check(users: web::Data<dyn UserRepository>) -> HttpResponse {
    let (status, storage) = match users.ping().await {
        Ok(()) => ("healthy", "up"),
        Err(e) => {
            log::warn!("⚠️  Storage ping failed: {}", e);
            ("degraded", "down")
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        storage: storage.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::testing::UnavailableUserRepository;
    use crate::database::InMemoryUserRepository;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    async fn call_health(repo: Arc<dyn UserRepository>) -> (StatusCode, HealthResponse) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(repo))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_health_reports_storage() {
        let (status, body) = call_health(Arc::new(InMemoryUserRepository::new())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "healthy");
        assert_eq!(body.storage, "up");
        assert_eq!(body.service, "bookmarker-service");
    }

    #[actix_web::test]
    async fn test_health_degraded_when_storage_down() {
        let (status, body) = call_health(Arc::new(UnavailableUserRepository)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.storage, "down");
    }
}
