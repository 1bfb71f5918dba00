use serde::{Deserialize, Serialize};

/// Booking request body doubles as the stored document; date and time
/// arrive as the strings the booking form produced and are stored as-is.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct Appointment {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
}
