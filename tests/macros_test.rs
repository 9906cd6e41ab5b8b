use assert_float_eq::assert_float_absolute_eq;

use nutri_scan::models::{ActivityLevel, GoalType, UserGoal};
use nutri_scan::planner::{calculate_progress, plan_macros, raw_macros};

/// Worst case of rounding each term independently:
/// 0.5 kcal + 0.5 g * 4 + 0.5 g * 4 + 0.5 g * 9.
const ROUNDING_TOLERANCE_KCAL: i64 = 9;

#[test]
fn test_macro_energy_matches_calories() {
    for weight in [40.0, 55.5, 70.0, 80.0, 95.0, 120.0, 150.0] {
        for goal in GoalType::ALL {
            for activity in ActivityLevel::ALL {
                let t = plan_macros(weight, goal, activity).unwrap();
                let diff = t.macro_calories() as i64 - t.calories as i64;
                assert!(
                    diff.abs() <= ROUNDING_TOLERANCE_KCAL,
                    "{} kg {} {}: macros {} kcal vs target {}",
                    weight,
                    goal,
                    activity,
                    t.macro_calories(),
                    t.calories
                );
            }
        }
    }
}

#[test]
fn test_unrounded_split_is_exact() {
    for goal in GoalType::ALL {
        let raw = raw_macros(77.0, goal, ActivityLevel::Light).unwrap();
        let energy = raw.protein * 4.0 + raw.carbs * 4.0 + raw.fat * 9.0;
        assert_float_absolute_eq!(energy, raw.calories, 1e-9);
    }
}

#[test]
fn test_goal_offsets() {
    for weight in [50.0, 63.0, 80.0, 110.0] {
        let maintain = plan_macros(weight, GoalType::Maintain, ActivityLevel::Moderate).unwrap();
        let bulk = plan_macros(weight, GoalType::Bulk, ActivityLevel::Moderate).unwrap();
        let cut = plan_macros(weight, GoalType::Cut, ActivityLevel::Moderate).unwrap();

        assert_eq!(bulk.calories as i64 - maintain.calories as i64, 300);
        assert_eq!(cut.calories as i64 - maintain.calories as i64, -500);
    }
}

#[test]
fn test_end_to_end_example() {
    let t = plan_macros(80.0, GoalType::Bulk, ActivityLevel::Moderate).unwrap();
    assert_eq!(t.calories, 3276);
    assert_eq!(t.protein, 176);
    assert_eq!(t.fat, 91);
    assert_eq!(t.carbs, 438);
}

#[test]
fn test_repeated_calls_identical() {
    let a = plan_macros(72.4, GoalType::Cut, ActivityLevel::Active).unwrap();
    let b = plan_macros(72.4, GoalType::Cut, ActivityLevel::Active).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_default_activity_matches_moderate() {
    let explicit = plan_macros(68.0, GoalType::Maintain, ActivityLevel::Moderate).unwrap();
    let defaulted = plan_macros(68.0, GoalType::Maintain, ActivityLevel::default()).unwrap();
    assert_eq!(explicit, defaulted);
}

#[test]
fn test_goal_progress_tracking() {
    let t = plan_macros(80.0, GoalType::Bulk, ActivityLevel::Moderate).unwrap();
    let goal = UserGoal::from_targets(GoalType::Bulk, &t);

    assert_float_absolute_eq!(calculate_progress(1638.0, goal.daily_calories), 50.0, 1e-9);
    assert_eq!(calculate_progress(5000.0, goal.daily_calories), 100.0);
}
