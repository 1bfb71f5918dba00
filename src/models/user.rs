use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored user document. Field names stay camelCase to match the
/// documents the frontend was built against.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// bcrypt hash, never the plaintext password.
    pub password: String,
    pub goals: Vec<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub goals: Vec<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}
