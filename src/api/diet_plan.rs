use crate::database::MongoDb;
use crate::models::DietPlanRequest;
use crate::services::diet_plan_service;
use crate::services::mail_service::Mailer;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/send-diet-plan",
    tag = "Diet Plans",
    request_body = DietPlanRequest,
    responses(
        (status = 200, description = "Plan stored and emailed"),
        (status = 500, description = "Storage or email failure")
    )
)]
pub async fn send_diet_plan(
    db: web::Data<MongoDb>,
    mailer: web::Data<Mailer>,
    request: web::Json<DietPlanRequest>,
) -> HttpResponse {
    log::info!(
        "🥗 POST /send-diet-plan - email: {}, goal: {:?}",
        request.email,
        request.goal
    );

    // Persistence first; a storage failure short-circuits before any mail
    // goes out.
    let diet_plan = match diet_plan_service::create_diet_plan(&db, &request).await {
        Ok(plan) => plan,
        Err(e) => {
            log::error!("❌ Failed to store diet plan: {}", e);
            return e.to_response();
        }
    };

    // The record is already committed; an email failure reports 500 but
    // nothing is rolled back.
    let body = diet_plan_service::diet_plan_email(&request.name, &diet_plan);
    if let Err(e) = mailer
        .send(&request.email, "Your FitLife Diet Plan", &body)
        .await
    {
        log::error!("❌ Failed to email diet plan: {}", e);
        return e.to_response();
    }

    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}
