use dialoguer::{Input, Select};

use crate::error::{NutriError, Result};
use crate::models::{ActivityLevel, GoalType};

fn prompt_positive(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "{} must be positive, got {}",
            prompt, value
        )));
    }

    Ok(value)
}

/// Prompt for body weight in kg.
pub fn prompt_weight() -> Result<f64> {
    prompt_positive("Body weight (kg)", "70")
}

/// Prompt for height in cm.
pub fn prompt_height() -> Result<f64> {
    prompt_positive("Height (cm)", "170")
}

/// Prompt for a fitness goal.
pub fn prompt_goal() -> Result<GoalType> {
    let options: Vec<String> = GoalType::ALL
        .iter()
        .map(|g| format!("{} ({})", g, g.label()))
        .collect();

    let selection = Select::new()
        .with_prompt("What is your goal?")
        .items(&options)
        .default(2) // maintain
        .interact()?;

    Ok(GoalType::ALL[selection])
}

/// Prompt for an activity level, defaulting to moderate.
pub fn prompt_activity() -> Result<ActivityLevel> {
    let options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|a| format!("{} ({})", a, a.label()))
        .collect();

    let default_idx = ActivityLevel::ALL
        .iter()
        .position(|a| *a == ActivityLevel::default())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("How active are you?")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}
