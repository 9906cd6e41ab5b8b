use crate::advisor::{evaluate_for_goal, generate_suggestions};
use crate::error::Result;
use crate::models::{FoodAnalysis, GoalEvaluation, GoalType, Suggestion};

/// A goal evaluation together with the suggestions it leads to.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub evaluation: GoalEvaluation,

    /// Copy of the input carrying the evaluated score and recommendation.
    pub evaluated: FoodAnalysis,

    /// Derived from `evaluated`, so they agree with the recommendation.
    pub suggestions: Vec<Suggestion>,
}

/// Evaluate an analysis for a goal, then suggest from the evaluated record.
pub fn assess_for_goal(analysis: &FoodAnalysis, goal: GoalType) -> Result<Assessment> {
    let evaluation = evaluate_for_goal(analysis, goal)?;
    let evaluated = analysis.with_evaluation(&evaluation);
    let suggestions = generate_suggestions(&evaluated)?;

    Ok(Assessment {
        evaluation,
        evaluated,
        suggestions,
    })
}
