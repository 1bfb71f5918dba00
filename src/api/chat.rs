use crate::database::MongoDb;
use crate::models::{ChatRequest, ChatResponse};
use crate::services::chat_service;
use crate::services::completion_service::CompletionClient;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/chat",
    tag = "Chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Bot response", body = ChatResponse)
    )
)]
pub async fn chat(
    db: web::Data<MongoDb>,
    completion: web::Data<CompletionClient>,
    request: web::Json<ChatRequest>,
) -> HttpResponse {
    log::info!("💬 POST /chat");

    // This route never fails from the caller's point of view; internal
    // failures degrade to the fallback reply inside the service.
    let message = chat_service::respond(&db, &completion, &request.message).await;

    HttpResponse::Ok().json(ChatResponse { message })
}
