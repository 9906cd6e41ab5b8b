use chrono::Utc;

use crate::interface::format::{
    ScoreBand, capitalize, format_nutrient_value, format_price, price_status_label, time_ago,
    truncate_text,
};
use crate::models::{
    ActivityLevel, FoodAnalysis, GoalEvaluation, GoalType, MacroTargets, NutrientInfo,
    Suggestion, SuggestionKind,
};
use crate::planner::BmiCategory;
use crate::provider::PriceComparison;

/// Longest product name shown in a suggestion line.
const SUGGESTION_NAME_MAX: usize = 48;

/// Display daily macro targets.
pub fn display_macro_targets(
    targets: &MacroTargets,
    weight: f64,
    goal: GoalType,
    activity: ActivityLevel,
) {
    println!();
    println!("=== Daily Targets ===");
    println!(
        "{:.1} kg, goal: {}, activity: {}",
        weight,
        goal.label(),
        activity.label()
    );
    println!();
    println!("  Calories: {:>5} kcal", targets.calories);
    println!("  Protein:  {:>5} g", targets.protein);
    println!("  Carbs:    {:>5} g", targets.carbs);
    println!("  Fat:      {:>5} g", targets.fat);
    println!();
}

/// Display an analysis with its nutrient table.
pub fn display_analysis(analysis: &FoodAnalysis) {
    let health_score = analysis.health_score.clamp(0.0, 100.0);

    println!();
    println!("=== {} ===", analysis.name);
    println!(
        "{:.0} kcal | health score {:.0} ({}) | {} ({})",
        analysis.calories,
        health_score,
        ScoreBand::from_score(health_score),
        format_price(analysis.price),
        price_status_label(analysis.price_status)
    );
    println!("Analysed {}", time_ago(&analysis.timestamp, &Utc::now()));
    println!();

    let max_name_len = name_column_width(&analysis.nutrients);

    for nutrient in &analysis.nutrients {
        println!(
            "  {:<width$}  {:>9}  {:>3.0}%",
            nutrient.name,
            format_nutrient_value(nutrient.amount, &nutrient.unit),
            nutrient.percentage.clamp(0.0, 100.0),
            width = max_name_len
        );
    }

    if !analysis.recommendation.is_empty() {
        println!();
        println!("{}", analysis.recommendation);
    }

    if !analysis.alternatives.is_empty() {
        println!("Alternatives: {}", analysis.alternatives.join(", "));
    }
    println!();
}

/// Widest nutrient name in characters, which is what `{:<width$}` pads by.
fn name_column_width(nutrients: &[NutrientInfo]) -> usize {
    nutrients
        .iter()
        .map(|n| n.name.chars().count())
        .max()
        .unwrap_or(10)
}

/// Display a goal evaluation.
pub fn display_evaluation(evaluation: &GoalEvaluation, goal: GoalType) {
    println!(
        "Score for {}: {:.0}/100 ({})",
        goal.label(),
        evaluation.score,
        capitalize(&ScoreBand::from_score(evaluation.score).to_string())
    );
    println!("{}", evaluation.recommendation);
    println!();
}

/// Display suggestions in generation order.
pub fn display_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("No suggestions: this product already fits well.");
        return;
    }

    println!("=== Suggestions ({}) ===", suggestions.len());
    for (i, s) in suggestions.iter().enumerate() {
        let verb = match s.kind {
            SuggestionKind::Substitute => "Swap for",
            SuggestionKind::Complement => "Add",
            SuggestionKind::Avoid => "Avoid",
        };

        let mut tags = Vec::new();
        if s.health_improvement > 0.0 {
            tags.push(format!("health +{:.0}", s.health_improvement));
        }
        if s.cost_saving > 0.0 {
            tags.push(format!("save {}", format_price(s.cost_saving)));
        }
        let tags_str = if tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", tags.join(", "))
        };

        println!(
            "{:>3}. {} {} - {}{}",
            i + 1,
            verb,
            truncate_text(&s.suggested_product, SUGGESTION_NAME_MAX),
            s.reason,
            tags_str
        );
    }
    println!();
}

/// Display a price comparison, cheapest store flagged.
pub fn display_price_comparison(comparison: &PriceComparison) {
    println!();
    println!("=== Prices: {} ===", comparison.product);
    println!(
        "Current {} | average {} | range {} - {} | trend: {:?}",
        format_price(comparison.current_price),
        format_price(comparison.average_price),
        format_price(comparison.lowest_price),
        format_price(comparison.highest_price),
        comparison.trend
    );
    println!();

    let cheapest = comparison.cheapest_store().map(|s| s.name.as_str());
    for store in &comparison.stores {
        let distance = store
            .distance_km
            .map(|d| format!("{:.1} km", d))
            .unwrap_or_else(|| "-".to_string());
        let marker = if Some(store.name.as_str()) == cheapest {
            "  <- cheapest"
        } else {
            ""
        };
        println!(
            "  {:<14} {:>12} {:>8}{}",
            store.name,
            format_price(store.price),
            distance,
            marker
        );
    }
    println!();
}

/// Display a BMI reading.
pub fn display_bmi(bmi: f64) {
    println!("BMI: {:.1} ({})", bmi, BmiCategory::from_bmi(bmi));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientKind;

    #[test]
    fn test_name_column_counts_chars() {
        let nutrients = vec![
            NutrientInfo::new("Proteína", NutrientKind::Protein, 3.2, "g", 20.0, "blue"),
            NutrientInfo::new("Fat", NutrientKind::Fat, 3.5, "g", 52.0, "yellow"),
        ];
        assert_eq!(name_column_width(&nutrients), 8);
        assert_eq!(name_column_width(&[]), 10);
    }
}
