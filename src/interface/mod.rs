pub mod format;
pub mod prompts;
pub mod render;

pub use prompts::{prompt_activity, prompt_goal, prompt_height, prompt_weight};
pub use render::{
    display_analysis, display_bmi, display_evaluation, display_macro_targets,
    display_price_comparison, display_suggestions,
};
