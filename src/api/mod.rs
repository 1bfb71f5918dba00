pub mod appointments;
pub mod auth;
pub mod chat;
pub mod diet_plan;
pub mod health;
pub mod subscribe;
pub mod swagger;
