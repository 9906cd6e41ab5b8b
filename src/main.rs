use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nutri_scan::advisor::{assess_for_goal, evaluate_for_goal, generate_suggestions};
use nutri_scan::cli::{Cli, Command};
use nutri_scan::error::{NutriError, Result};
use nutri_scan::interface::{
    display_analysis, display_bmi, display_evaluation, display_macro_targets,
    display_price_comparison, display_suggestions, prompt_activity, prompt_goal, prompt_height,
    prompt_weight,
};
use nutri_scan::models::{ActivityLevel, GoalType};
use nutri_scan::planner::{calculate_bmi, plan_macros};
use nutri_scan::provider::{MockProvider, compare_prices};
use nutri_scan::state::{load_analyses, save_analyses, write_suggestions_csv};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Macros {
            weight,
            goal,
            activity,
        } => cmd_macros(weight, goal.as_deref(), activity.as_deref()),
        Command::Evaluate { file, goal } => cmd_evaluate(&file, &goal),
        Command::Suggest { file, csv } => cmd_suggest(&file, csv.as_deref()),
        Command::Scan {
            barcode,
            image,
            goal,
            seed,
            save,
        } => cmd_scan(barcode, image, goal.as_deref(), seed, save.as_deref()),
        Command::Prices { product, seed } => cmd_prices(&product, seed),
        Command::Bmi { weight, height } => cmd_bmi(weight, height),
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Compute and show daily targets, prompting for missing biometrics.
fn cmd_macros(weight: Option<f64>, goal: Option<&str>, activity: Option<&str>) -> Result<()> {
    let weight = match weight {
        Some(w) => w,
        None => prompt_weight()?,
    };
    let goal = match goal {
        Some(g) => g.parse::<GoalType>()?,
        None => prompt_goal()?,
    };
    let activity = match activity {
        Some(a) => a.parse::<ActivityLevel>()?,
        None => prompt_activity()?,
    };

    let targets = plan_macros(weight, goal, activity)?;
    display_macro_targets(&targets, weight, goal, activity);
    Ok(())
}

/// Score every analysis in a file for a goal.
fn cmd_evaluate(file: &Path, goal: &str) -> Result<()> {
    let goal = goal.parse::<GoalType>()?;
    let analyses = load_analyses(file)?;
    info!(count = analyses.len(), %goal, "Evaluating analyses");

    for analysis in &analyses {
        let evaluation = evaluate_for_goal(analysis, goal)?;
        display_analysis(analysis);
        display_evaluation(&evaluation, goal);
    }
    Ok(())
}

/// Show suggestions for every analysis in a file, optionally exporting them.
fn cmd_suggest(file: &Path, csv: Option<&Path>) -> Result<()> {
    let analyses = load_analyses(file)?;
    let mut all = Vec::new();

    for analysis in &analyses {
        let suggestions = generate_suggestions(analysis)?;
        println!("{}:", analysis.name);
        display_suggestions(&suggestions);
        all.extend(suggestions);
    }

    if let Some(path) = csv {
        write_suggestions_csv(path, &all)?;
        println!("Wrote {} suggestions to {}", all.len(), path.display());
    }
    Ok(())
}

/// Analyse a barcode or dish image, then evaluate it and suggest alternatives.
fn cmd_scan(
    barcode: Option<String>,
    image: Option<String>,
    goal: Option<&str>,
    seed: Option<u64>,
    save: Option<&Path>,
) -> Result<()> {
    let provider = MockProvider::new();
    let analysis = match (barcode, image) {
        (Some(code), _) => provider.analyze_barcode(&code)?,
        (None, Some(image_ref)) => provider.analyze_image(&image_ref, &mut seeded_rng(seed))?,
        (None, None) => {
            return Err(NutriError::InvalidInput(
                "either --barcode or --image is required".to_string(),
            ));
        }
    };

    let goal = match goal {
        Some(g) => g.parse::<GoalType>()?,
        None => analysis.goal,
    };

    display_analysis(&analysis);

    let assessment = assess_for_goal(&analysis, goal)?;
    display_evaluation(&assessment.evaluation, goal);
    display_suggestions(&assessment.suggestions);

    if let Some(path) = save {
        save_analyses(path, std::slice::from_ref(&assessment.evaluated))?;
        println!("Saved analysis to {}", path.display());
    }
    Ok(())
}

fn cmd_prices(product: &str, seed: Option<u64>) -> Result<()> {
    let comparison = compare_prices(product, &mut seeded_rng(seed))?;
    display_price_comparison(&comparison);
    Ok(())
}

fn cmd_bmi(weight: Option<f64>, height: Option<f64>) -> Result<()> {
    let weight = match weight {
        Some(w) => w,
        None => prompt_weight()?,
    };
    let height = match height {
        Some(h) => h,
        None => prompt_height()?,
    };

    let bmi = calculate_bmi(weight, height)?;
    display_bmi(bmi);
    Ok(())
}
