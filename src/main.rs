mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::AppConfig::from_env().expect("Invalid configuration");

    log::info!("🚀 Starting Learning Hub Server...");
    log::info!("📊 Database: {}", config.database_name);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&config.mongo_uri, &config.database_name)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db);

    log::info!("✅ Connected to MongoDB");

    let bind_address = config.bind_address();
    log::info!("🌐 Server starting on http://{}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);

    let openapi = api::swagger::ApiDoc::openapi();

    // Start HTTP server
    HttpServer::new(move || {
        // Frontend is served from arbitrary origins; no credentials are involved
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            .configure(api::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
