use tracing::debug;

use crate::advisor::constants::*;
use crate::error::Result;
use crate::models::{FoodAnalysis, GoalEvaluation, GoalType, NutrientKind};

/// Heuristic adjustment to the baseline health score for a goal, before clamping.
///
/// Absent nutrients never trigger a bonus or penalty.
pub fn goal_adjustment(analysis: &FoodAnalysis, goal: GoalType) -> f64 {
    let exceeds = |kind: NutrientKind, min: f64| {
        analysis
            .nutrient_amount(kind)
            .is_some_and(|amount| amount > min)
    };

    let mut delta = 0.0;

    match goal {
        GoalType::Bulk => {
            if exceeds(NutrientKind::Protein, BULK_PROTEIN_MIN_G) {
                delta += BULK_PROTEIN_BONUS;
            }
            if analysis.calories > BULK_CALORIES_MIN {
                delta += BULK_CALORIES_BONUS;
            }
            if exceeds(NutrientKind::Carbohydrate, BULK_CARBS_MIN_G) {
                delta += BULK_CARBS_BONUS;
            }
        }
        GoalType::Cut => {
            if analysis.calories < CUT_CALORIES_MAX {
                delta += CUT_CALORIES_BONUS;
            }
            if exceeds(NutrientKind::Protein, CUT_PROTEIN_MIN_G) {
                delta += CUT_PROTEIN_BONUS;
            }
            if exceeds(NutrientKind::Fiber, CUT_FIBER_MIN_G) {
                delta += CUT_FIBER_BONUS;
            }
        }
        GoalType::Maintain => {}
    }

    if exceeds(NutrientKind::Sugar, SUGAR_MAX_G) {
        delta -= SUGAR_PENALTY;
    }

    delta
}

/// Recommendation text for a clamped score.
pub fn recommendation_for(score: f64, goal: GoalType) -> String {
    if score >= EXCELLENT_SCORE {
        format!("Excellent choice for {}!", goal.label())
    } else if score >= MODERATE_SCORE {
        match goal {
            GoalType::Bulk => "Moderate option. Can be included occasionally.".to_string(),
            _ => "Moderate option. Consume in moderation.".to_string(),
        }
    } else {
        match goal {
            GoalType::Cut => {
                "Avoid or limit consumption. Works against weight loss.".to_string()
            }
            _ => "Avoid or limit consumption. Does not contribute to your goals.".to_string(),
        }
    }
}

/// Score how well a food suits a goal.
///
/// Starts from the analysis health score, applies the goal heuristics and clamps
/// to [0, 100]. The analysis is left untouched.
pub fn evaluate_for_goal(analysis: &FoodAnalysis, goal: GoalType) -> Result<GoalEvaluation> {
    analysis.validate()?;

    let delta = goal_adjustment(analysis, goal);
    let score = (analysis.health_score + delta).clamp(SCORE_MIN, SCORE_MAX);

    debug!(
        food = %analysis.name,
        %goal,
        baseline = analysis.health_score,
        delta,
        score,
        "Evaluated food for goal"
    );

    Ok(GoalEvaluation {
        score,
        recommendation: recommendation_for(score, goal),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutrientInfo, PriceStatus};
    use chrono::Utc;

    fn analysis(calories: f64, health_score: f64, nutrients: Vec<NutrientInfo>) -> FoodAnalysis {
        FoodAnalysis {
            id: "analysis_test".to_string(),
            name: "Test dish".to_string(),
            calories,
            nutrients,
            health_score,
            price_status: PriceStatus::Average,
            price: 10.0,
            goal: GoalType::Maintain,
            recommendation: String::new(),
            alternatives: vec![],
            timestamp: Utc::now(),
            source: None,
        }
    }

    fn nutrient(kind: NutrientKind, amount: f64) -> NutrientInfo {
        NutrientInfo::new("n", kind, amount, "g", 10.0, "")
    }

    #[test]
    fn test_bulk_bonuses() {
        let a = analysis(
            420.0,
            60.0,
            vec![
                nutrient(NutrientKind::Protein, 35.0),
                nutrient(NutrientKind::Carbohydrate, 45.0),
            ],
        );
        assert_eq!(goal_adjustment(&a, GoalType::Bulk), 20.0);
        let eval = evaluate_for_goal(&a, GoalType::Bulk).unwrap();
        assert_eq!(eval.score, 80.0);
        assert_eq!(eval.recommendation, "Excellent choice for muscle gain!");
    }

    #[test]
    fn test_cut_bonuses() {
        let a = analysis(
            150.0,
            50.0,
            vec![
                nutrient(NutrientKind::Protein, 16.0),
                nutrient(NutrientKind::Fiber, 6.0),
            ],
        );
        assert_eq!(goal_adjustment(&a, GoalType::Cut), 25.0);
        assert_eq!(goal_adjustment(&a, GoalType::Maintain), 0.0);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let a = analysis(
            300.0,
            50.0,
            vec![
                nutrient(NutrientKind::Protein, 20.0),
                nutrient(NutrientKind::Carbohydrate, 30.0),
                nutrient(NutrientKind::Sugar, 20.0),
            ],
        );
        assert_eq!(goal_adjustment(&a, GoalType::Bulk), 0.0);
    }

    #[test]
    fn test_bands() {
        assert_eq!(
            recommendation_for(79.9, GoalType::Bulk),
            "Moderate option. Can be included occasionally."
        );
        assert_eq!(
            recommendation_for(60.0, GoalType::Maintain),
            "Moderate option. Consume in moderation."
        );
        assert_eq!(
            recommendation_for(59.0, GoalType::Cut),
            "Avoid or limit consumption. Works against weight loss."
        );
        assert_eq!(
            recommendation_for(10.0, GoalType::Bulk),
            "Avoid or limit consumption. Does not contribute to your goals."
        );
    }

    #[test]
    fn test_score_clamped() {
        let high = analysis(100.0, 150.0, vec![]);
        assert_eq!(evaluate_for_goal(&high, GoalType::Cut).unwrap().score, 100.0);

        let low = analysis(100.0, -50.0, vec![nutrient(NutrientKind::Sugar, 40.0)]);
        assert_eq!(evaluate_for_goal(&low, GoalType::Bulk).unwrap().score, 0.0);
    }

    #[test]
    fn test_invalid_analysis_rejected() {
        let a = analysis(-1.0, 50.0, vec![]);
        assert!(evaluate_for_goal(&a, GoalType::Bulk).is_err());
    }
}
