use crate::models::{ActivityLevel, GoalType};

/// Rough basal estimate: kcal per kg of body weight per day.
pub const BASE_KCAL_PER_KG: f64 = 24.0;

/// Energy density of each macronutrient, kcal per gram.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Share of the calorie target assigned to fat.
pub const FAT_CALORIE_SHARE: f64 = 0.25;

// ─────────────────────────────────────────────────────────────────────────────
// Goal adjustments
// ─────────────────────────────────────────────────────────────────────────────

/// Surplus added on a bulk, kcal.
pub const BULK_SURPLUS_KCAL: f64 = 300.0;

/// Deficit applied on a cut, kcal.
pub const CUT_DEFICIT_KCAL: f64 = 500.0;

/// Protein per kg of body weight, by goal.
pub const PROTEIN_G_PER_KG_BULK: f64 = 2.2;
pub const PROTEIN_G_PER_KG_CUT: f64 = 2.5;
pub const PROTEIN_G_PER_KG_MAINTAIN: f64 = 2.0;

// ─────────────────────────────────────────────────────────────────────────────
// Body metrics
// ─────────────────────────────────────────────────────────────────────────────

/// Upper BMI bounds (exclusive) for underweight, normal and overweight.
pub const BMI_UNDERWEIGHT_MAX: f64 = 18.5;
pub const BMI_NORMAL_MAX: f64 = 25.0;
pub const BMI_OVERWEIGHT_MAX: f64 = 30.0;

/// Multiplier applied to the basal estimate for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Calorie adjustment for a goal (positive = surplus).
pub fn goal_calorie_adjustment(goal: GoalType) -> f64 {
    match goal {
        GoalType::Bulk => BULK_SURPLUS_KCAL,
        GoalType::Cut => -CUT_DEFICIT_KCAL,
        GoalType::Maintain => 0.0,
    }
}

/// Protein grams per kg of body weight for a goal.
pub fn protein_factor(goal: GoalType) -> f64 {
    match goal {
        GoalType::Bulk => PROTEIN_G_PER_KG_BULK,
        GoalType::Cut => PROTEIN_G_PER_KG_CUT,
        GoalType::Maintain => PROTEIN_G_PER_KG_MAINTAIN,
    }
}
