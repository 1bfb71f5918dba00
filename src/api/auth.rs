use crate::database::MongoDb;
use crate::models::{SignInRequest, SignUpRequest};
use crate::services::auth_service;
use crate::services::mail_service::Mailer;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/get-started",
    tag = "Auth",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "Account created and welcome email sent"),
        (status = 500, description = "Storage or email failure")
    )
)]
pub async fn get_started(
    db: web::Data<MongoDb>,
    mailer: web::Data<Mailer>,
    request: web::Json<SignUpRequest>,
) -> HttpResponse {
    log::info!("📝 POST /get-started - email: {}", request.email);

    let user = match auth_service::sign_up(&db, &request).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("❌ Sign-up failed: {} - {}", request.email, e);
            return e.to_response();
        }
    };

    // The account exists either way; a failed welcome email reports 500
    // without removing it.
    let body = auth_service::welcome_email(&user.first_name);
    if let Err(e) = mailer.send(&user.email, "Welcome to FitLife!", &body).await {
        log::error!("❌ Failed to send welcome email: {}", e);
        return e.to_response();
    }

    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}

#[utoipa::path(
    post,
    path = "/signin",
    tag = "Auth",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in; returns the stored user record"),
        (status = 401, description = "Invalid credentials"),
        (status = 404, description = "Unknown email"),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn signin(db: web::Data<MongoDb>, request: web::Json<SignInRequest>) -> HttpResponse {
    log::info!("🔐 POST /signin - email: {}", request.email);

    match auth_service::sign_in(&db, &request).await {
        Ok(user) => {
            log::info!("✅ Sign-in successful: {}", request.email);
            // Returns the stored record as-is, hashed password included.
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "user": user,
            }))
        }
        Err(e) => {
            log::warn!("❌ Sign-in failed: {} - {}", request.email, e);
            e.to_response()
        }
    }
}
