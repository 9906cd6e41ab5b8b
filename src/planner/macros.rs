use tracing::{debug, warn};

use crate::error::{NutriError, Result};
use crate::models::{ActivityLevel, GoalType, MacroTargets};
use crate::planner::constants::*;

/// Unrounded macro split, before clamping.
#[derive(Debug, Clone, Copy)]
pub struct RawMacros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Compute the unrounded daily targets.
///
/// Carbohydrates take whatever energy protein and fat leave, so they go
/// negative when protein and fat alone exceed the calorie target.
pub fn raw_macros(weight: f64, goal: GoalType, activity: ActivityLevel) -> Result<RawMacros> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "weight must be a positive number of kg, got {}",
            weight
        )));
    }

    let base = weight * BASE_KCAL_PER_KG;
    let maintenance = base * activity_multiplier(activity);
    let calories = maintenance + goal_calorie_adjustment(goal);

    let protein = weight * protein_factor(goal);
    let fat = calories * FAT_CALORIE_SHARE / KCAL_PER_G_FAT;
    let carbs =
        (calories - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT) / KCAL_PER_G_CARBS;

    debug!(
        weight,
        %goal,
        %activity,
        base,
        maintenance,
        calories,
        "Computed raw macro split"
    );

    Ok(RawMacros {
        calories,
        protein,
        carbs,
        fat,
    })
}

/// Daily calorie and macro targets for a body weight (kg), goal and activity level.
///
/// All outputs are rounded half-up. A negative carbohydrate remainder (very light
/// bodies on a cut) is clamped to 0 g and logged.
pub fn plan_macros(weight: f64, goal: GoalType, activity: ActivityLevel) -> Result<MacroTargets> {
    let raw = raw_macros(weight, goal, activity)?;

    if raw.carbs < 0.0 {
        warn!(
            weight,
            %goal,
            deficit_g = -raw.carbs,
            "Protein and fat exceed the calorie target; carbohydrates clamped to 0"
        );
    }

    Ok(MacroTargets {
        calories: round_non_negative(raw.calories),
        protein: round_non_negative(raw.protein),
        carbs: round_non_negative(raw.carbs),
        fat: round_non_negative(raw.fat),
    })
}

fn round_non_negative(value: f64) -> u32 {
    value.max(0.0).round() as u32
}
