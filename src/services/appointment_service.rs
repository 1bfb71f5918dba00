use crate::database::{MongoDb, APPOINTMENTS};
use crate::models::Appointment;
use crate::utils::AppError;

pub async fn book(db: &MongoDb, appointment: &Appointment) -> Result<(), AppError> {
    db.collection::<Appointment>(APPOINTMENTS)
        .insert_one(appointment)
        .await
        .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;

    log::info!(
        "✅ Appointment booked: {} on {} at {}",
        appointment.email,
        appointment.date,
        appointment.time
    );

    Ok(())
}

pub fn confirmation_email(appointment: &Appointment) -> String {
    format!(
        "<div style=\"font-family:sans-serif\">\
         <h2>Appointment Confirmed</h2>\
         <p>Hi {},</p>\
         <p>Your appointment is booked for <b>{}</b> at <b>{}</b>.</p>\
         <p>If you need to reschedule, just reply to this email.</p>\
         <p>- The FitLife Team</p></div>",
        appointment.name, appointment.date, appointment.time
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_email_includes_slot() {
        let appointment = Appointment {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            phone: "555-0100".to_string(),
            date: "2026-09-01".to_string(),
            time: "10:30".to_string(),
        };
        let body = confirmation_email(&appointment);
        assert!(body.contains("Hi Sam"));
        assert!(body.contains("2026-09-01"));
        assert!(body.contains("10:30"));
    }
}
