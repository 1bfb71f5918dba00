pub mod appointment_service;
pub mod auth_service;
pub mod chat_service;
pub mod completion_service;
pub mod diet_plan_service;
pub mod mail_service;
pub mod subscription_service;

pub use completion_service::*;
pub use mail_service::*;
