mod mock;
mod prices;

pub use mock::MockProvider;
pub use prices::{compare_prices, PriceComparison, PriceTrend, StorePrice};

/// EAN/UPC-style barcode: 8 to 14 ASCII digits.
pub fn is_valid_barcode(code: &str) -> bool {
    (8..=14).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_digit())
}
