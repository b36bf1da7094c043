mod api;
mod config;
mod database;
mod middleware;
mod models;
mod ui;
mod utils;

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServiceConfig;
use crate::database::{InMemoryUserRepository, MongoDB, MongoUserRepository, UserRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServiceConfig::from_env().context("Invalid configuration")?;

    log::info!("🚀 Starting Bookmarker Service...");

    let users: Arc<dyn UserRepository> = match &config.database_url {
        Some(url) => {
            log::info!("📊 Database: MongoDB, collection '{}'", config.users_collection);
            let db = MongoDB::new(url, &config.users_collection)
                .await
                .context("Failed to connect to MongoDB")?;
            log::info!("✅ MongoDB connected successfully");
            Arc::new(MongoUserRepository::new(&db, &config.users_collection))
        }
        None => {
            log::warn!("⚠️  DATABASE_URL not set, users are kept in memory only");
            Arc::new(InMemoryUserRepository::new())
        }
    };
    let users_data: web::Data<dyn UserRepository> = web::Data::from(users);

    // Route table is built once here and handed to every worker
    let routes = web::Data::new(ui::bookmarker_routes());

    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    log::info!("👤 User resource mounted at {}", config.user_route_prefix);
    if config.ui_enabled {
        log::info!("🧭 UI routes: {}", routes.entries().len());
    }
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    let server_config = config.clone();

    HttpServer::new(move || {
        let cors = server_config
            .cors_allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .expose_headers(vec![header::CONTENT_TYPE])
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();
        let ui_enabled = server_config.ui_enabled;
        let routes = routes.clone();

        App::new()
            .app_data(users_data.clone())
            .app_data(api::users::json_config())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Metrics
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Users
            .service(
                web::scope(&server_config.user_route_prefix)
                    .configure(api::users::configure),
            )
            // UI navigation
            .configure(move |cfg| {
                if ui_enabled {
                    ui::configure(cfg, routes);
                }
            })
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
