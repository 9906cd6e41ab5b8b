use tracing::debug;

use crate::advisor::constants::*;
use crate::error::Result;
use crate::models::{
    Availability, FoodAnalysis, NutrientKind, PriceStatus, Suggestion, SuggestionKind,
};

/// Derive substitution and complement suggestions from an analysis.
///
/// Rules are checked independently and emitted in a fixed order:
/// 1. low health score: healthier substitute
/// 2. expensive: generic-brand substitute
/// 3. low protein: protein complement
pub fn generate_suggestions(analysis: &FoodAnalysis) -> Result<Vec<Suggestion>> {
    analysis.validate()?;

    let expensive = analysis.price_status == PriceStatus::Expensive;
    let mut suggestions = Vec::new();

    if analysis.health_score < SUBSTITUTE_SCORE_THRESHOLD {
        let target = analysis
            .alternatives
            .first()
            .map(String::as_str)
            .unwrap_or(HEALTHIER_PLACEHOLDER);

        suggestions.push(Suggestion::new(
            SuggestionKind::Substitute,
            &analysis.name,
            target,
            "Low nutritional quality",
            HEALTHIER_SUBSTITUTE_IMPROVEMENT,
            if expensive {
                HEALTHIER_SUBSTITUTE_SAVING_IF_EXPENSIVE
            } else {
                0.0
            },
            Availability::High,
        ));
    }

    if expensive {
        suggestions.push(Suggestion::new(
            SuggestionKind::Substitute,
            &analysis.name,
            GENERIC_BRAND_PRODUCT,
            "Priced above average",
            0.0,
            GENERIC_BRAND_SAVING,
            Availability::High,
        ));
    }

    let low_protein = analysis
        .nutrient_amount(NutrientKind::Protein)
        .is_some_and(|amount| amount < LOW_PROTEIN_G);
    if low_protein {
        suggestions.push(Suggestion::new(
            SuggestionKind::Complement,
            &analysis.name,
            PROTEIN_SOURCE_PRODUCT,
            "Low protein content for your goals",
            PROTEIN_COMPLEMENT_IMPROVEMENT,
            0.0,
            Availability::High,
        ));
    }

    debug!(
        food = %analysis.name,
        count = suggestions.len(),
        "Generated suggestions"
    );

    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalType, NutrientInfo};
    use chrono::Utc;

    fn analysis(health_score: f64, price_status: PriceStatus, protein: Option<f64>) -> FoodAnalysis {
        FoodAnalysis {
            id: "analysis_s".to_string(),
            name: "Cookie".to_string(),
            calories: 465.0,
            nutrients: protein
                .map(|p| vec![NutrientInfo::new("Protein", NutrientKind::Protein, p, "g", 9.0, "")])
                .unwrap_or_default(),
            health_score,
            price_status,
            price: 3.79,
            goal: GoalType::Maintain,
            recommendation: String::new(),
            alternatives: vec![],
            timestamp: Utc::now(),
            source: None,
        }
    }

    #[test]
    fn test_no_rules_fire() {
        let a = analysis(90.0, PriceStatus::Cheap, Some(25.0));
        assert!(generate_suggestions(&a).unwrap().is_empty());
    }

    #[test]
    fn test_placeholder_without_alternatives() {
        let a = analysis(40.0, PriceStatus::Average, None);
        let s = generate_suggestions(&a).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].suggested_product, HEALTHIER_PLACEHOLDER);
        assert_eq!(s[0].cost_saving, 0.0);
        assert_eq!(s[0].original_product, "Cookie");
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let mut a = analysis(25.0, PriceStatus::Expensive, Some(6.0));
        a.alternatives = vec!["Whole grain biscuit".to_string()];
        let s = generate_suggestions(&a).unwrap();

        assert_eq!(s.len(), 3);
        assert_eq!(s[0].suggested_product, "Whole grain biscuit");
        assert_eq!(s[0].cost_saving, 15.0);
        assert_eq!(s[1].suggested_product, GENERIC_BRAND_PRODUCT);
        assert_eq!(s[2].kind, SuggestionKind::Complement);
        assert_eq!(s[2].health_improvement, 20.0);
    }

    #[test]
    fn test_protein_at_threshold_is_not_low() {
        let a = analysis(90.0, PriceStatus::Cheap, Some(10.0));
        assert!(generate_suggestions(&a).unwrap().is_empty());
    }
}
