use chrono::Utc;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{NutriError, Result};
use crate::models::{
    AnalysisSource, FoodAnalysis, GoalType, NutrientInfo, NutrientKind, PriceStatus,
};
use crate::provider::is_valid_barcode;

/// Catalogue entry before it is stamped with an id, goal and source.
#[derive(Debug, Clone)]
struct ProductEntry {
    name: &'static str,
    calories: f64,
    nutrients: Vec<NutrientInfo>,
    health_score: f64,
    price_status: PriceStatus,
    price: f64,
    recommendation: &'static str,
    alternatives: &'static [&'static str],
}

impl ProductEntry {
    fn into_analysis(self, goal: GoalType, source: AnalysisSource) -> FoodAnalysis {
        FoodAnalysis {
            id: format!("analysis_{}", Uuid::new_v4()),
            name: self.name.to_string(),
            calories: self.calories,
            nutrients: self.nutrients,
            health_score: self.health_score,
            price_status: self.price_status,
            price: self.price,
            goal,
            recommendation: self.recommendation.to_string(),
            alternatives: self.alternatives.iter().map(|s| s.to_string()).collect(),
            timestamp: Utc::now(),
            source: Some(source),
        }
    }
}

fn protein(amount: f64, pct: f64) -> NutrientInfo {
    NutrientInfo::new("Protein", NutrientKind::Protein, amount, "g", pct, "blue")
}

fn carbs(amount: f64, pct: f64) -> NutrientInfo {
    NutrientInfo::new("Carbohydrates", NutrientKind::Carbohydrate, amount, "g", pct, "orange")
}

fn fat(amount: f64, pct: f64) -> NutrientInfo {
    NutrientInfo::new("Fat", NutrientKind::Fat, amount, "g", pct, "yellow")
}

fn barcode_entry(code: &str) -> Option<ProductEntry> {
    match code {
        "7891000100103" => Some(ProductEntry {
            name: "Whole Milk 1L",
            calories: 60.0,
            nutrients: vec![
                protein(3.2, 20.0),
                carbs(4.5, 28.0),
                fat(3.5, 52.0),
                NutrientInfo::new("Calcium", NutrientKind::Other, 125.0, "mg", 12.0, "green"),
            ],
            health_score: 75.0,
            price_status: PriceStatus::Average,
            price: 4.89,
            recommendation: "Good source of protein and calcium. Ideal after training.",
            alternatives: &["Skimmed milk", "Fortified plant drink", "Plain yogurt"],
        }),
        "7891000053508" => Some(ProductEntry {
            name: "Chocolate Sandwich Cookie",
            calories: 465.0,
            nutrients: vec![
                carbs(65.0, 56.0),
                fat(18.0, 35.0),
                NutrientInfo::new("Sugar", NutrientKind::Sugar, 28.0, "g", 43.0, "red"),
                protein(6.0, 9.0),
            ],
            health_score: 25.0,
            price_status: PriceStatus::Expensive,
            price: 3.79,
            recommendation: "High in sugar and trans fat. Avoid or eat in moderation.",
            alternatives: &[
                "Whole grain biscuit",
                "Dried fruit",
                "Mixed nuts",
                "70% dark chocolate",
            ],
        }),
        _ => None,
    }
}

fn unknown_product() -> ProductEntry {
    ProductEntry {
        name: "Unknown Product",
        calories: 200.0,
        nutrients: vec![carbs(30.0, 60.0), protein(8.0, 16.0), fat(5.0, 24.0)],
        health_score: 50.0,
        price_status: PriceStatus::Average,
        price: 5.99,
        recommendation: "Product not found in our database. Check the label.",
        alternatives: &[],
    }
}

fn dish_table() -> Vec<ProductEntry> {
    vec![
        ProductEntry {
            name: "Fitness Plate - Chicken, Rice and Broccoli",
            calories: 420.0,
            nutrients: vec![
                protein(35.0, 33.0),
                carbs(45.0, 43.0),
                fat(8.0, 17.0),
                NutrientInfo::new("Fiber", NutrientKind::Fiber, 6.0, "g", 7.0, "green"),
            ],
            health_score: 92.0,
            price_status: PriceStatus::Cheap,
            price: 12.50,
            recommendation: "Great combination for muscle gain: complete protein and quality carbs.",
            alternatives: &["Grilled salmon", "Sweet potato", "Asparagus"],
        },
        ProductEntry {
            name: "Margherita Pizza - 2 slices",
            calories: 580.0,
            nutrients: vec![
                carbs(68.0, 47.0),
                fat(22.0, 34.0),
                protein(24.0, 17.0),
                NutrientInfo::new("Sodium", NutrientKind::Other, 1200.0, "mg", 2.0, "red"),
            ],
            health_score: 45.0,
            price_status: PriceStatus::Expensive,
            price: 28.90,
            recommendation: "High in calories and sodium. Pair with salad and lighten other meals.",
            alternatives: &["Homemade whole wheat pizza", "Chicken wrap", "Fresh sandwich"],
        },
    ]
}

/// In-memory stand-in for a barcode/image recognition service.
///
/// Nutrients come pre-tagged with their `NutrientKind`.
#[derive(Debug, Default, Clone)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }

    /// Look a product up by barcode. Unknown codes yield a generic entry.
    pub fn analyze_barcode(&self, barcode: &str) -> Result<FoodAnalysis> {
        let code = barcode.trim();
        if !is_valid_barcode(code) {
            return Err(NutriError::InvalidInput(format!(
                "'{}' is not a valid barcode (expected 8 to 14 digits)",
                barcode
            )));
        }

        let entry = match barcode_entry(code) {
            Some(entry) => entry,
            None => {
                info!(barcode = code, "Barcode not in catalogue, using generic entry");
                unknown_product()
            }
        };

        debug!(barcode = code, product = entry.name, "Analysed barcode");
        Ok(entry.into_analysis(GoalType::Maintain, AnalysisSource::Barcode(code.to_string())))
    }

    /// Recognise a dish from an image reference by drawing from the dish table.
    pub fn analyze_image(&self, image_ref: &str, rng: &mut impl Rng) -> Result<FoodAnalysis> {
        if image_ref.trim().is_empty() {
            return Err(NutriError::InvalidInput(
                "image reference must not be empty".to_string(),
            ));
        }

        let entry = dish_table()
            .choose(rng)
            .cloned()
            .ok_or_else(|| NutriError::Provider("dish table is empty".to_string()))?;

        debug!(image = image_ref, dish = entry.name, "Analysed image");
        Ok(entry.into_analysis(GoalType::Bulk, AnalysisSource::ImageRef(image_ref.to_string())))
    }
}
