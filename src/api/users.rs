use actix_web::{web, HttpResponse, ResponseError};
use serde_json::{Map, Value};

use crate::database::UserRepository;
use crate::models::{CreateUserResponse, NewUser};
use crate::utils::AppError;

/// Mounts the user resource on the scope it is given (`/user` by default).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_users))
        .route("", web::post().to(create_user))
        .route("/", web::get().to(list_users))
        .route("/", web::post().to(create_user))
        .route("/{id}", web::get().to(get_user));
}

/// Malformed bodies get the same JSON error shape as storage failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into())
}

#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    responses(
        (status = 200, description = "All user documents", body = [crate::models::UserSchema]),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn list_users(users: web::Data<dyn UserRepository>) -> HttpResponse {
    log::info!("📋 GET /user - Listing users");

    match users.find_all().await {
        Ok(found) => {
            log::info!("✅ Listed {} users", found.len());
            HttpResponse::Ok().json(found)
        }
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "Value of the document's `id` field")
    ),
    responses(
        (status = 200, description = "Matching user document, or null", body = Option<crate::models::UserSchema>),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn get_user(
    users: web::Data<dyn UserRepository>,
    id: web::Path<String>,
) -> HttpResponse {
    log::info!("🔍 GET /user/{} - Fetching user", id);

    match users.find_by_id(&id).await {
        Ok(Some(user)) => {
            log::info!("✅ User found: {}", id);
            HttpResponse::Ok().json(user)
        }
        Ok(None) => {
            log::info!("ℹ️  No user with id {}", id);
            HttpResponse::Ok().json(Value::Null)
        }
        Err(e) => {
            log::error!("❌ Error fetching user {}: {}", id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = crate::models::CreateUserSchema,
    responses(
        (status = 200, description = "User stored", body = CreateUserResponse),
        (status = 400, description = "Body is not an object with a string or numeric id"),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn create_user(
    users: web::Data<dyn UserRepository>,
    body: web::Json<Map<String, Value>>,
) -> HttpResponse {
    let new_user = match NewUser::try_from(body.into_inner()) {
        Ok(new_user) => new_user,
        Err(e) => {
            log::warn!("⚠️  Rejected user body: {}", e);
            return e.error_response();
        }
    };

    log::info!("📝 POST /user - Creating user {}", new_user.id);

    match users.insert(new_user).await {
        Ok(user) => {
            log::info!("✅ User created: {}", user.id().unwrap_or_default());
            HttpResponse::Ok().json(CreateUserResponse { success: true })
        }
        Err(e) => {
            log::error!("❌ Error creating user: {}", e);
            e.error_response()
        }
    }
}
