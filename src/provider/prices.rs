use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};

/// Direction of a product's recent price movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    Falling,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePrice {
    pub name: String,
    pub price: f64,
    /// Kilometres from the user, when known.
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceComparison {
    pub product: String,
    pub current_price: f64,
    pub average_price: f64,
    pub lowest_price: f64,
    pub highest_price: f64,
    pub trend: PriceTrend,
    pub stores: Vec<StorePrice>,
}

impl PriceComparison {
    /// Store with the lowest listed price.
    pub fn cheapest_store(&self) -> Option<&StorePrice> {
        self.stores
            .iter()
            .min_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(std::cmp::Ordering::Equal))
    }
}

/// Base price range of the mock market, currency units.
const BASE_PRICE_MIN: f64 = 5.0;
const BASE_PRICE_MAX: f64 = 25.0;

/// Store name, price factor relative to the base price, distance.
const STORES: [(&str, f64, f64); 4] = [
    ("Supermarket A", 0.85, 1.2),
    ("Supermarket B", 1.1, 2.5),
    ("Supermarket C", 0.95, 0.8),
    ("Wholesale D", 0.75, 5.2),
];

/// Mock price comparison for a product across nearby stores.
///
/// The trend is drawn from the closed `PriceTrend` set with the caller's rng,
/// so a seeded rng gives reproducible comparisons.
pub fn compare_prices(product: &str, rng: &mut impl Rng) -> Result<PriceComparison> {
    let product = product.trim();
    if product.is_empty() {
        return Err(NutriError::InvalidInput(
            "product name must not be empty".to_string(),
        ));
    }

    let base = rng.gen_range(BASE_PRICE_MIN..BASE_PRICE_MAX);
    let trend = match rng.gen_range(0..3) {
        0 => PriceTrend::Rising,
        1 => PriceTrend::Falling,
        _ => PriceTrend::Stable,
    };

    let stores = STORES
        .iter()
        .map(|(name, factor, distance)| StorePrice {
            name: name.to_string(),
            price: base * factor,
            distance_km: Some(*distance),
        })
        .collect();

    Ok(PriceComparison {
        product: product.to_string(),
        current_price: base,
        average_price: base * 0.9,
        lowest_price: base * 0.7,
        highest_price: base * 1.3,
        trend,
        stores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_price_relationships() {
        let mut rng = StdRng::seed_from_u64(42);
        let cmp = compare_prices("Whole Milk 1L", &mut rng).unwrap();

        assert!(cmp.current_price >= BASE_PRICE_MIN && cmp.current_price < BASE_PRICE_MAX);
        assert!(cmp.lowest_price < cmp.average_price);
        assert!(cmp.average_price < cmp.current_price);
        assert!(cmp.current_price < cmp.highest_price);
        assert_eq!(cmp.stores.len(), 4);
        assert_eq!(cmp.cheapest_store().unwrap().name, "Wholesale D");
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = compare_prices("Rice", &mut StdRng::seed_from_u64(9)).unwrap();
        let b = compare_prices("Rice", &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_is_camel_case_throughout() {
        let cmp = compare_prices("Rice", &mut StdRng::seed_from_u64(3)).unwrap();
        let json = serde_json::to_value(&cmp).unwrap();

        assert!(json.get("currentPrice").is_some());
        assert_eq!(json["stores"][0]["distanceKm"], 1.2);
        assert!(json["stores"][0].get("distance_km").is_none());
    }

    #[test]
    fn test_empty_product_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(compare_prices("  ", &mut rng).is_err());
    }
}
