use crate::database::MongoDb;
use crate::models::SubscribeRequest;
use crate::services::subscription_service;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/subscribe",
    tag = "Subscriptions",
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscribed"),
        (status = 400, description = "Email already subscribed"),
        (status = 500, description = "Storage unavailable")
    )
)]
pub async fn subscribe(
    db: web::Data<MongoDb>,
    request: web::Json<SubscribeRequest>,
) -> HttpResponse {
    log::info!("📰 POST /api/subscribe - email: {}", request.email);

    match subscription_service::subscribe(&db, &request.email).await {
        Ok(()) => HttpResponse::Created().json(serde_json::json!({ "success": true })),
        Err(e) => {
            log::warn!("❌ Subscription failed: {} - {}", request.email, e);
            e.to_response()
        }
    }
}
