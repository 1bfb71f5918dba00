mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use services::completion_service::CompletionClient;
use services::mail_service::Mailer;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let smtp_relay = env::var("SMTP_RELAY").unwrap_or_else(|_| "smtp.gmail.com".to_string());
    let smtp_user = env::var("SMTP_USER").expect("SMTP_USER must be set");
    let smtp_pass = env::var("SMTP_PASS").expect("SMTP_PASS must be set");
    let completion_api_key = env::var("COMPLETION_API_KEY").unwrap_or_else(|_| {
        log::warn!("⚠️  COMPLETION_API_KEY not set - chat fallback will use the apology reply");
        String::new()
    });
    let public_dir = env::var("PUBLIC_DIR").unwrap_or_else(|_| "./public".to_string());

    log::info!("🚀 Starting FitLife Service...");

    // Initialize MongoDB connection - no degraded mode without a database
    let db = database::MongoDb::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");

    let mailer = Mailer::new(&smtp_relay, &smtp_user, &smtp_pass)
        .expect("Failed to configure mail transport");
    let mailer_data = web::Data::new(mailer);

    let completion_data = web::Data::new(CompletionClient::new(completion_api_key));

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:5500")
            .allowed_origin("http://127.0.0.1:5500")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        let index_path = format!("{}/index.html", public_dir);

        App::new()
            .app_data(db_data.clone())
            .app_data(mailer_data.clone())
            .app_data(completion_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Form and chat endpoints
            .route("/chat", web::post().to(api::chat::chat))
            .route("/api/subscribe", web::post().to(api::subscribe::subscribe))
            .route("/send-diet-plan", web::post().to(api::diet_plan::send_diet_plan))
            .route(
                "/book-appointment",
                web::post().to(api::appointments::book_appointment),
            )
            .route("/get-started", web::post().to(api::auth::get_started))
            .route("/signin", web::post().to(api::auth::signin))
            // Static frontend shell; unmatched GETs fall through to the
            // SPA index so client-side routing keeps working
            .service(
                Files::new("/", public_dir.clone())
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index_path = index_path.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(&index_path).await?;
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
