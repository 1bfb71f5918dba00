use serde::{Deserialize, Serialize};

/// Fitness goal selected on the diet-plan form. Unknown values are
/// rejected at deserialization.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    MaintainWeight,
    Other,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    Vegetarian,
    Other,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanRequest {
    pub name: String,
    pub email: String,
    pub goal: Goal,
    pub height: String,
    pub weight: String,
    pub exercise_level: String,
    pub diet_preference: DietPreference,
}

/// Stored record: the request plus the generated plan, denormalized.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanRecord {
    pub name: String,
    pub email: String,
    pub goal: Goal,
    pub height: String,
    pub weight: String,
    pub exercise_level: String,
    pub diet_preference: DietPreference,
    pub diet_plan: String,
}
