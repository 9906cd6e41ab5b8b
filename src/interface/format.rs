use std::fmt;

use chrono::{DateTime, Utc};

use crate::models::PriceStatus;

/// Format a nutrient amount; sub-gram gram amounts are shown in mg.
pub fn format_nutrient_value(amount: f64, unit: &str) -> String {
    if amount < 1.0 && unit == "g" {
        return format!("{:.0}mg", amount * 1000.0);
    }
    format!("{:.1}{}", amount, unit)
}

/// Format a price as Brazilian reais, e.g. `R$ 1.234,50`.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, frac)
}

/// Format a timestamp as `dd/mm/yyyy HH:MM`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y %H:%M").to_string()
}

/// Coarse "how long ago" description, falling back to the full date after 30 days.
pub fn time_ago(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = (*now - *date).num_seconds();

    if secs < 60 {
        "Just now".to_string()
    } else if secs < 3_600 {
        format!("{} min ago", secs / 60)
    } else if secs < 86_400 {
        format!("{} h ago", secs / 3_600)
    } else if secs < 2_592_000 {
        format!("{} days ago", secs / 86_400)
    } else {
        format_date(date)
    }
}

/// Display band of a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 60.0 {
            ScoreBand::Good
        } else if score >= 40.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        };
        f.write_str(label)
    }
}

pub fn price_status_label(status: PriceStatus) -> &'static str {
    match status {
        PriceStatus::Cheap => "cheap",
        PriceStatus::Average => "average",
        PriceStatus::Expensive => "expensive",
    }
}

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_nutrient_value() {
        assert_eq!(format_nutrient_value(0.25, "g"), "250mg");
        assert_eq!(format_nutrient_value(3.2, "g"), "3.2g");
        assert_eq!(format_nutrient_value(0.5, "mg"), "0.5mg");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(4.89), "R$ 4,89");
        assert_eq!(format_price(1234.5), "R$ 1.234,50");
        assert_eq!(format_price(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_price(0.0), "R$ 0,00");
    }

    #[test]
    fn test_time_ago() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(time_ago(&(now - Duration::seconds(30)), &now), "Just now");
        assert_eq!(time_ago(&(now - Duration::minutes(5)), &now), "5 min ago");
        assert_eq!(time_ago(&(now - Duration::hours(3)), &now), "3 h ago");
        assert_eq!(time_ago(&(now - Duration::days(2)), &now), "2 days ago");
        assert_eq!(time_ago(&(now - Duration::days(40)), &now), "20/01/2026 12:00");
    }

    #[test]
    fn test_score_band() {
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(40.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(39.9), ScoreBand::Poor);
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(truncate_text("Chocolate cookie", 9), "Chocolate...");
        assert_eq!(truncate_text("Milk", 9), "Milk");
        assert_eq!(capitalize("wHOLE milk"), "Whole milk");
        assert_eq!(capitalize(""), "");
    }
}
