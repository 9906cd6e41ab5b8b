use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{FoodAnalysis, Suggestion};

/// A provider file holds either one analysis or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum AnalysisFile {
    Many(Vec<FoodAnalysis>),
    One(Box<FoodAnalysis>),
}

/// Load analyses from a JSON file.
///
/// Accepts a single object or an array. Deduplicates by id (last occurrence
/// wins) while keeping first-seen order.
pub fn load_analyses<P: AsRef<Path>>(path: P) -> Result<Vec<FoodAnalysis>> {
    let content = fs::read_to_string(path.as_ref())?;
    let analyses = match serde_json::from_str(&content)? {
        AnalysisFile::Many(list) => list,
        AnalysisFile::One(single) => vec![*single],
    };

    let mut order: Vec<String> = Vec::new();
    let mut seen: HashMap<String, FoodAnalysis> = HashMap::new();
    for analysis in analyses {
        if !seen.contains_key(&analysis.id) {
            order.push(analysis.id.clone());
        }
        seen.insert(analysis.id.clone(), analysis);
    }

    debug!(path = %path.as_ref().display(), count = order.len(), "Loaded analyses");
    Ok(order
        .into_iter()
        .filter_map(|id| seen.remove(&id))
        .collect())
}

/// Save analyses to a JSON file as a pretty-printed array.
pub fn save_analyses<P: AsRef<Path>>(path: P, analyses: &[FoodAnalysis]) -> Result<()> {
    let json = serde_json::to_string_pretty(analyses)?;
    fs::write(path, json)?;
    Ok(())
}

/// Export suggestions to CSV, one row per suggestion.
pub fn write_suggestions_csv<P: AsRef<Path>>(path: P, suggestions: &[Suggestion]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for suggestion in suggestions {
        wtr.serialize(suggestion)?;
    }
    wtr.flush()?;
    Ok(())
}
