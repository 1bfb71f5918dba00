pub mod appointment;
pub mod chat;
pub mod diet_plan;
pub mod subscription;
pub mod user;

pub use appointment::*;
pub use chat::*;
pub use diet_plan::*;
pub use subscription::*;
pub use user::*;
