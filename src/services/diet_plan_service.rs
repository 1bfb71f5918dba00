use crate::database::{MongoDb, DIET_PLANS};
use crate::models::{DietPlanRecord, DietPlanRequest, DietPreference, Goal};
use crate::utils::AppError;

const WEIGHT_LOSS_VEGETARIAN: &str = "<h3>Weight Loss - Vegetarian Plan</h3>\
<ul><li><b>Breakfast:</b> Oats with skim milk, berries and chia seeds</li>\
<li><b>Lunch:</b> Lentil soup, quinoa salad and steamed vegetables</li>\
<li><b>Dinner:</b> Grilled paneer with saut&eacute;ed greens</li>\
<li><b>Snacks:</b> Fruit, roasted chickpeas, green tea</li></ul>";

const WEIGHT_LOSS_STANDARD: &str = "<h3>Weight Loss Plan</h3>\
<ul><li><b>Breakfast:</b> Egg-white omelette with spinach and whole-grain toast</li>\
<li><b>Lunch:</b> Grilled chicken breast with brown rice and broccoli</li>\
<li><b>Dinner:</b> Baked fish with a large mixed salad</li>\
<li><b>Snacks:</b> Greek yogurt, almonds, green tea</li></ul>";

const MUSCLE_GAIN_VEGETARIAN: &str = "<h3>Muscle Gain - Vegetarian Plan</h3>\
<ul><li><b>Breakfast:</b> Peanut-butter oatmeal with banana and whole milk</li>\
<li><b>Lunch:</b> Chickpea curry with rice and a side of cottage cheese</li>\
<li><b>Dinner:</b> Tofu stir-fry with noodles and mixed vegetables</li>\
<li><b>Snacks:</b> Protein shake, trail mix, hummus with pita</li></ul>";

const MUSCLE_GAIN_STANDARD: &str = "<h3>Muscle Gain Plan</h3>\
<ul><li><b>Breakfast:</b> Four-egg scramble, oatmeal and orange juice</li>\
<li><b>Lunch:</b> Lean beef with sweet potatoes and green beans</li>\
<li><b>Dinner:</b> Grilled salmon with pasta and asparagus</li>\
<li><b>Snacks:</b> Protein shake, cottage cheese, mixed nuts</li></ul>";

const MAINTAIN_VEGETARIAN: &str = "<h3>Maintenance - Vegetarian Plan</h3>\
<ul><li><b>Breakfast:</b> Greek yogurt parfait with granola and fruit</li>\
<li><b>Lunch:</b> Bean burrito bowl with avocado</li>\
<li><b>Dinner:</b> Vegetable curry with basmati rice</li>\
<li><b>Snacks:</b> Fruit, cheese, whole-grain crackers</li></ul>";

const MAINTAIN_STANDARD: &str = "<h3>Maintenance Plan</h3>\
<ul><li><b>Breakfast:</b> Scrambled eggs with toast and fruit</li>\
<li><b>Lunch:</b> Turkey sandwich on whole grain with a side salad</li>\
<li><b>Dinner:</b> Chicken stir-fry with rice</li>\
<li><b>Snacks:</b> Yogurt, nuts, dark chocolate</li></ul>";

const DEFAULT_PLAN: &str = "<h3>Balanced Plan</h3>\
<ul><li>Eat a variety of whole foods across all food groups</li>\
<li>Prioritize lean protein, vegetables and whole grains at each meal</li>\
<li>Stay hydrated and limit processed sugar</li></ul>";

/// Pure (goal, preference) -> HTML fragment mapping. Total: every
/// combination resolves, with an unrecognized goal falling through to
/// the balanced default.
pub fn generate_plan(goal: Goal, preference: DietPreference) -> &'static str {
    match (goal, preference) {
        (Goal::WeightLoss, DietPreference::Vegetarian) => WEIGHT_LOSS_VEGETARIAN,
        (Goal::WeightLoss, DietPreference::Other) => WEIGHT_LOSS_STANDARD,
        (Goal::MuscleGain, DietPreference::Vegetarian) => MUSCLE_GAIN_VEGETARIAN,
        (Goal::MuscleGain, DietPreference::Other) => MUSCLE_GAIN_STANDARD,
        (Goal::MaintainWeight, DietPreference::Vegetarian) => MAINTAIN_VEGETARIAN,
        (Goal::MaintainWeight, DietPreference::Other) => MAINTAIN_STANDARD,
        (Goal::Other, _) => DEFAULT_PLAN,
    }
}

/// Generates the plan for the request and persists the denormalized
/// record. Returns the generated HTML so the caller can email it.
pub async fn create_diet_plan(db: &MongoDb, request: &DietPlanRequest) -> Result<String, AppError> {
    let diet_plan = generate_plan(request.goal, request.diet_preference).to_string();

    let record = DietPlanRecord {
        name: request.name.clone(),
        email: request.email.clone(),
        goal: request.goal,
        height: request.height.clone(),
        weight: request.weight.clone(),
        exercise_level: request.exercise_level.clone(),
        diet_preference: request.diet_preference,
        diet_plan: diet_plan.clone(),
    };

    db.collection::<DietPlanRecord>(DIET_PLANS)
        .insert_one(&record)
        .await
        .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;

    Ok(diet_plan)
}

pub fn diet_plan_email(name: &str, diet_plan: &str) -> String {
    format!(
        "<div style=\"font-family:sans-serif\">\
         <h2>Your Personalized Diet Plan</h2>\
         <p>Hi {},</p>\
         <p>Thanks for reaching out to FitLife! Here is the plan we put together for you:</p>\
         {}\
         <p>Stay consistent and check in with us anytime.</p>\
         <p>- The FitLife Team</p></div>",
        name, diet_plan
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_six_combinations_distinct_and_non_empty() {
        let goals = [Goal::WeightLoss, Goal::MuscleGain, Goal::MaintainWeight];
        let preferences = [DietPreference::Vegetarian, DietPreference::Other];

        let mut seen = HashSet::new();
        for goal in goals {
            for preference in preferences {
                let plan = generate_plan(goal, preference);
                assert!(!plan.is_empty());
                assert!(plan.starts_with("<h3>"));
                assert!(seen.insert(plan), "duplicate plan for {:?}/{:?}", goal, preference);
            }
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_unrecognized_goal_returns_default() {
        let veg = generate_plan(Goal::Other, DietPreference::Vegetarian);
        let std = generate_plan(Goal::Other, DietPreference::Other);
        assert_eq!(veg, std);
        assert!(veg.contains("Balanced Plan"));
    }

    #[test]
    fn test_email_wraps_plan_and_addresses_recipient() {
        let plan = generate_plan(Goal::WeightLoss, DietPreference::Other);
        let body = diet_plan_email("Alex", plan);
        assert!(body.contains("Hi Alex"));
        assert!(body.contains(plan));
    }
}
