use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};
use crate::planner::constants::{BMI_NORMAL_MAX, BMI_OVERWEIGHT_MAX, BMI_UNDERWEIGHT_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_UNDERWEIGHT_MAX {
            BmiCategory::Underweight
        } else if bmi < BMI_NORMAL_MAX {
            BmiCategory::Normal
        } else if bmi < BMI_OVERWEIGHT_MAX {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// Body mass index from weight (kg) and height (cm).
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "weight must be positive, got {}",
            weight_kg
        )));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "height must be positive, got {}",
            height_cm
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Percentage of `target` reached by `current`, clamped to [0, 100].
pub fn calculate_progress(current: f64, target: f64) -> f64 {
    if target <= 0.0 || !target.is_finite() {
        return 0.0;
    }
    let pct = current / target * 100.0;
    if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(70.0, 175.0).unwrap();
        assert_float_absolute_eq!(bmi, 22.857, 0.001);
        assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_category_bounds() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_rejects_zero_height() {
        assert!(calculate_bmi(70.0, 0.0).is_err());
        assert!(calculate_bmi(-1.0, 170.0).is_err());
    }

    #[test]
    fn test_progress_clamped() {
        assert_float_absolute_eq!(calculate_progress(1250.0, 2500.0), 50.0, 1e-9);
        assert_eq!(calculate_progress(3000.0, 2500.0), 100.0);
        assert_eq!(calculate_progress(-10.0, 2500.0), 0.0);
        assert_eq!(calculate_progress(100.0, 0.0), 0.0);
    }
}
