mod food;
mod goal;
mod suggestion;

pub use food::{AnalysisSource, FoodAnalysis, NutrientInfo, NutrientKind, PriceStatus};
pub use goal::{ActivityLevel, GoalEvaluation, GoalType, MacroTargets, UserGoal};
pub use suggestion::{Availability, Suggestion, SuggestionKind};
