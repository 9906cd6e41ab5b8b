/// Score at or above which a food is an excellent fit for the goal.
pub const EXCELLENT_SCORE: f64 = 80.0;

/// Score at or above which a food is a moderate fit.
pub const MODERATE_SCORE: f64 = 60.0;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Bulk heuristics
// ─────────────────────────────────────────────────────────────────────────────

pub const BULK_PROTEIN_MIN_G: f64 = 20.0;
pub const BULK_PROTEIN_BONUS: f64 = 10.0;

pub const BULK_CALORIES_MIN: f64 = 300.0;
pub const BULK_CALORIES_BONUS: f64 = 5.0;

pub const BULK_CARBS_MIN_G: f64 = 30.0;
pub const BULK_CARBS_BONUS: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Cut heuristics
// ─────────────────────────────────────────────────────────────────────────────

pub const CUT_CALORIES_MAX: f64 = 200.0;
pub const CUT_CALORIES_BONUS: f64 = 10.0;

pub const CUT_PROTEIN_MIN_G: f64 = 15.0;
pub const CUT_PROTEIN_BONUS: f64 = 10.0;

pub const CUT_FIBER_MIN_G: f64 = 5.0;
pub const CUT_FIBER_BONUS: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Any goal
// ─────────────────────────────────────────────────────────────────────────────

pub const SUGAR_MAX_G: f64 = 20.0;
pub const SUGAR_PENALTY: f64 = 15.0;

// ─────────────────────────────────────────────────────────────────────────────
// Suggestions
// ─────────────────────────────────────────────────────────────────────────────

/// Health score below which a healthier substitute is suggested.
pub const SUBSTITUTE_SCORE_THRESHOLD: f64 = 60.0;

/// Protein grams below which a protein complement is suggested.
pub const LOW_PROTEIN_G: f64 = 10.0;

pub const HEALTHIER_SUBSTITUTE_IMPROVEMENT: f64 = 30.0;
pub const HEALTHIER_SUBSTITUTE_SAVING_IF_EXPENSIVE: f64 = 15.0;
pub const GENERIC_BRAND_SAVING: f64 = 25.0;
pub const PROTEIN_COMPLEMENT_IMPROVEMENT: f64 = 20.0;

pub const HEALTHIER_PLACEHOLDER: &str = "Healthier option";
pub const GENERIC_BRAND_PRODUCT: &str = "Generic or store-brand version";
pub const PROTEIN_SOURCE_PRODUCT: &str = "Protein source (eggs, chicken, legumes)";
