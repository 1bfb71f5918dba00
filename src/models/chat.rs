use mongodb::bson::DateTime as BsonDateTime;
use serde::{Deserialize, Serialize};

/// One chat turn, appended to the chatHistory collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: BsonDateTime,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ChatResponse {
    pub message: String,
}
