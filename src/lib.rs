pub mod advisor;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod provider;
pub mod state;

pub use advisor::{assess_for_goal, evaluate_for_goal, generate_suggestions};
pub use error::{NutriError, Result};
pub use models::{FoodAnalysis, GoalType, MacroTargets, Suggestion};
pub use planner::plan_macros;
