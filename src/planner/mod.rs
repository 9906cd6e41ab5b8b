pub mod body;
pub mod constants;
pub mod macros;

pub use body::{calculate_bmi, calculate_progress, BmiCategory};
pub use constants::*;
pub use macros::{plan_macros, raw_macros, RawMacros};
