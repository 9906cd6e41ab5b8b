use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{NutriError, Result};
use crate::models::GoalEvaluation;
use crate::models::GoalType;

/// Semantic key of a nutrient, assigned by the analysis provider.
///
/// Scoring looks nutrients up by kind, never by display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKind {
    Protein,
    Carbohydrate,
    Fat,
    Fiber,
    Sugar,
    #[default]
    Other,
}

/// One nutrient's quantity within a food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientInfo {
    pub name: String,

    #[serde(default)]
    pub kind: NutrientKind,

    pub amount: f64,

    pub unit: String,

    /// Presentational weight, clamped to 0 to 100 on load.
    #[serde(deserialize_with = "deserialize_percent")]
    pub percentage: f64,

    #[serde(default)]
    pub color_tag: String,
}

impl NutrientInfo {
    /// Build a nutrient entry, clamping `percentage` into [0, 100].
    pub fn new(
        name: &str,
        kind: NutrientKind,
        amount: f64,
        unit: &str,
        percentage: f64,
        color_tag: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            amount,
            unit: unit.to_string(),
            percentage: percentage.clamp(0.0, 100.0),
            color_tag: color_tag.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceStatus {
    Cheap,
    Average,
    Expensive,
}

/// Where an analysis came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisSource {
    Barcode(String),
    ImageRef(String),
}

/// Nutrition analysis of one product or dish, as produced by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysis {
    pub id: String,

    pub name: String,

    pub calories: f64,

    /// Insertion-ordered; duplicate kinds are allowed.
    pub nutrients: Vec<NutrientInfo>,

    /// Clamped to 0 to 100 on load.
    #[serde(deserialize_with = "deserialize_percent")]
    pub health_score: f64,

    pub price_status: PriceStatus,

    pub price: f64,

    pub goal: GoalType,

    pub recommendation: String,

    #[serde(default)]
    pub alternatives: Vec<String>,

    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<AnalysisSource>,
}

impl FoodAnalysis {
    /// First nutrient of the given kind, in insertion order.
    pub fn nutrient(&self, kind: NutrientKind) -> Option<&NutrientInfo> {
        self.nutrients.iter().find(|n| n.kind == kind)
    }

    /// Amount of the first nutrient of the given kind.
    pub fn nutrient_amount(&self, kind: NutrientKind) -> Option<f64> {
        self.nutrient(kind).map(|n| n.amount)
    }

    /// Check that the record is complete and its quantities are sane.
    ///
    /// Missing identity fields are a provider fault; bad numbers are invalid input.
    /// Deserialized scores are already clamped; one set in code outside
    /// [0, 100] is accepted and clamped by the evaluator.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(NutriError::Provider("analysis has no id".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(NutriError::Provider(format!(
                "analysis {} has no product name",
                self.id
            )));
        }

        check_quantity("calories", self.calories)?;
        check_quantity("price", self.price)?;
        if !self.health_score.is_finite() {
            return Err(NutriError::InvalidInput(format!(
                "health score of '{}' is not a number",
                self.name
            )));
        }

        for nutrient in &self.nutrients {
            check_quantity(&format!("amount of {}", nutrient.name), nutrient.amount)?;
            if !nutrient.percentage.is_finite() {
                return Err(NutriError::InvalidInput(format!(
                    "percentage of {} is not a number",
                    nutrient.name
                )));
            }
        }

        Ok(())
    }

    /// Copy of this analysis carrying the evaluated score and recommendation.
    pub fn with_evaluation(&self, evaluation: &GoalEvaluation) -> Self {
        Self {
            health_score: evaluation.score,
            recommendation: evaluation.recommendation.clone(),
            ..self.clone()
        }
    }
}

fn deserialize_percent<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.clamp(0.0, 100.0))
}

fn check_quantity(what: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            what, value
        )));
    }
    Ok(())
}
