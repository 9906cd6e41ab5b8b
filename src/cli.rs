use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// NutriScan — nutrition scoring, macro planning and food suggestions.
#[derive(Parser, Debug)]
#[command(name = "nutri_scan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log scoring details (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute daily calorie and macro targets.
    Macros {
        /// Body weight in kg (prompted when omitted).
        #[arg(short, long)]
        weight: Option<f64>,

        /// Goal: bulk, cut or maintain (prompted when omitted).
        #[arg(short, long)]
        goal: Option<String>,

        /// Activity level: sedentary, light, moderate, active, very_active
        /// (prompted when omitted, moderate preselected).
        #[arg(short, long)]
        activity: Option<String>,
    },

    /// Score the analyses in a JSON file for a goal.
    Evaluate {
        /// Analysis JSON file (single object or array).
        file: PathBuf,

        /// Goal: bulk, cut or maintain.
        #[arg(short, long, default_value = "maintain")]
        goal: String,
    },

    /// Suggest substitutes and complements for the analyses in a JSON file.
    Suggest {
        /// Analysis JSON file (single object or array).
        file: PathBuf,

        /// Also write the suggestions to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Analyse a product with the mock provider.
    Scan {
        /// Product barcode (8 to 14 digits).
        #[arg(long, conflicts_with = "image", required_unless_present = "image")]
        barcode: Option<String>,

        /// Image reference of a dish.
        #[arg(long)]
        image: Option<String>,

        /// Goal to evaluate against (defaults to the analysis goal).
        #[arg(short, long)]
        goal: Option<String>,

        /// Seed for the dish recogniser.
        #[arg(long)]
        seed: Option<u64>,

        /// Save the evaluated analysis to this JSON file.
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Compare prices for a product across nearby stores.
    Prices {
        /// Product name.
        product: String,

        /// Random seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compute body mass index.
    Bmi {
        /// Body weight in kg (prompted when omitted).
        #[arg(short, long)]
        weight: Option<f64>,

        /// Height in cm (prompted when omitted).
        #[arg(long)]
        height: Option<f64>,
    },
}
