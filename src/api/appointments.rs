use crate::database::MongoDb;
use crate::models::Appointment;
use crate::services::appointment_service;
use crate::services::mail_service::Mailer;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/book-appointment",
    tag = "Appointments",
    request_body = Appointment,
    responses(
        (status = 200, description = "Appointment booked and confirmation emailed"),
        (status = 500, description = "Storage or email failure")
    )
)]
pub async fn book_appointment(
    db: web::Data<MongoDb>,
    mailer: web::Data<Mailer>,
    request: web::Json<Appointment>,
) -> HttpResponse {
    log::info!(
        "📅 POST /book-appointment - email: {}, date: {}",
        request.email,
        request.date
    );

    if let Err(e) = appointment_service::book(&db, &request).await {
        log::error!("❌ Failed to book appointment: {}", e);
        return e.to_response();
    }

    // Booking is committed; a failed confirmation email reports 500
    // without undoing it.
    let body = appointment_service::confirmation_email(&request);
    if let Err(e) = mailer
        .send(&request.email, "Your FitLife Appointment", &body)
        .await
    {
        log::error!("❌ Failed to send confirmation email: {}", e);
        return e.to_response();
    }

    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}
