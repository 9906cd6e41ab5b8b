use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Substitute,
    Complement,
    Avoid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    High,
    Medium,
    Low,
}

/// An actionable substitution or complement for an analysed food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,

    pub kind: SuggestionKind,

    pub original_product: String,

    pub suggested_product: String,

    pub reason: String,

    /// Estimated health score gain, 0 to 100.
    pub health_improvement: f64,

    /// Estimated saving in currency units.
    pub cost_saving: f64,

    pub availability: Availability,
}

impl Suggestion {
    /// Create a suggestion with a fresh identifier.
    pub fn new(
        kind: SuggestionKind,
        original_product: &str,
        suggested_product: &str,
        reason: &str,
        health_improvement: f64,
        cost_saving: f64,
        availability: Availability,
    ) -> Self {
        Self {
            id: format!("suggestion_{}", Uuid::new_v4()),
            kind,
            original_product: original_product.to_string(),
            suggested_product: suggested_product.to_string(),
            reason: reason.to_string(),
            health_improvement,
            cost_saving,
            availability,
        }
    }

    /// Equality ignoring the generated identifier.
    pub fn same_content(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.original_product == other.original_product
            && self.suggested_product == other.suggested_product
            && self.reason == other.reason
            && self.health_improvement == other.health_improvement
            && self.cost_saving == other.cost_saving
            && self.availability == other.availability
    }
}
