pub mod assessment;
pub mod constants;
pub mod evaluator;
pub mod suggestions;

pub use assessment::{Assessment, assess_for_goal};
pub use evaluator::{evaluate_for_goal, goal_adjustment, recommendation_for};
pub use suggestions::generate_suggestions;
