mod persistence;

pub use persistence::{load_analyses, save_analyses, write_suggestions_csv};
