use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FitLife Service API",
        version = "1.0.0",
        description = "Backend API for the FitLife fitness web product.\n\n**Features:**\n- Sign-up and sign-in\n- Appointment booking with email confirmation\n- Personalized diet plans delivered by email\n- Newsletter subscriptions\n- Chat assistant with completion-API fallback",
        contact(
            name = "FitLife Team",
            email = "support@fitlife.example"
        )
    ),
    paths(
        crate::api::auth::get_started,
        crate::api::auth::signin,
        crate::api::subscribe::subscribe,
        crate::api::diet_plan::send_diet_plan,
        crate::api::appointments::book_appointment,
        crate::api::chat::chat,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::SignUpRequest,
            crate::models::SignInRequest,
            crate::models::SubscribeRequest,
            crate::models::DietPlanRequest,
            crate::models::Goal,
            crate::models::DietPreference,
            crate::models::Appointment,
            crate::models::ChatRequest,
            crate::models::ChatResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Sign-up and sign-in endpoints."),
        (name = "Subscriptions", description = "Newsletter subscription endpoint."),
        (name = "Diet Plans", description = "Diet plan generation and delivery."),
        (name = "Appointments", description = "Appointment booking."),
        (name = "Chat", description = "Chat assistant endpoint."),
        (name = "Health", description = "Health check endpoint for monitoring."),
    )
)]
pub struct ApiDoc;
