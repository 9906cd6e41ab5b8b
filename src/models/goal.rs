use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};

/// Fitness goal: caloric surplus, deficit, or maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Bulk,
    Cut,
    Maintain,
}

impl GoalType {
    pub const ALL: [GoalType; 3] = [GoalType::Bulk, GoalType::Cut, GoalType::Maintain];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Bulk => "bulk",
            GoalType::Cut => "cut",
            GoalType::Maintain => "maintain",
        }
    }

    /// Human-readable goal, as used in recommendations.
    pub fn label(&self) -> &'static str {
        match self {
            GoalType::Bulk => "muscle gain",
            GoalType::Cut => "weight loss",
            GoalType::Maintain => "maintenance",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        GoalType::ALL
            .into_iter()
            .find(|g| g.as_str() == key)
            .ok_or_else(|| unknown_choice("goal", &key, &GoalType::ALL.map(|g| g.as_str())))
    }
}

/// Exercise frequency tier.
///
/// The default is explicit; unrecognised names are rejected rather than
/// silently mapped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly active",
            ActivityLevel::Moderate => "Moderately active",
            ActivityLevel::Active => "Very active",
            ActivityLevel::VeryActive => "Extremely active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        ActivityLevel::ALL
            .into_iter()
            .find(|a| a.as_str() == key)
            .ok_or_else(|| {
                unknown_choice(
                    "activity level",
                    &key,
                    &ActivityLevel::ALL.map(|a| a.as_str()),
                )
            })
    }
}

/// Build an `InvalidInput` error, naming the closest valid choice when one is near.
fn unknown_choice(what: &str, input: &str, choices: &[&str]) -> NutriError {
    let closest = choices
        .iter()
        .map(|c| (*c, jaro_winkler(c, input)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let message = match closest {
        Some((choice, _)) => format!(
            "unknown {} '{}' (did you mean '{}'?)",
            what, input, choice
        ),
        None => format!(
            "unknown {} '{}' (expected one of: {})",
            what,
            input,
            choices.join(", ")
        ),
    };
    NutriError::InvalidInput(message)
}

/// Daily calorie and macronutrient targets, rounded to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// kcal per day.
    pub calories: u32,
    /// Grams per day.
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl MacroTargets {
    /// Energy of the macro split (4/4/9 kcal per gram).
    pub fn macro_calories(&self) -> u32 {
        self.protein * 4 + self.carbs * 4 + self.fat * 9
    }
}

/// A user's goal with its daily targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGoal {
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub daily_calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl UserGoal {
    pub fn from_targets(goal_type: GoalType, targets: &MacroTargets) -> Self {
        Self {
            goal_type,
            daily_calories: targets.calories as f64,
            protein: targets.protein as f64,
            carbs: targets.carbs as f64,
            fat: targets.fat as f64,
        }
    }
}

/// Goal-aware score of a food with its recommendation text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalEvaluation {
    /// Always within [0, 100].
    pub score: f64,
    pub recommendation: String,
}
