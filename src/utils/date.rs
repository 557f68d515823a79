// Date expression parsing relative to the anchor date

use anyhow::Result;
use chrono::{Duration, NaiveDate};

/// Parse `YYYY-MM-DD`, `today`, `yesterday`, `tomorrow`, or `+Nd` / `-Nd`
pub fn parse_date_expr(expr: &str, today: NaiveDate) -> Result<NaiveDate> {
    let expr = expr.trim();
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Ok(date);
    }

    let offset = match expr.to_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => Some(-1),
        "tomorrow" => Some(1),
        _ => expr
            .strip_suffix('d')
            .filter(|days| days.starts_with('+') || days.starts_with('-'))
            .and_then(|days| days.parse::<i64>().ok()),
    };

    if let Some(offset) = offset {
        return Duration::try_days(offset)
            .and_then(|delta| today.checked_add_signed(delta))
            .ok_or_else(|| anyhow::anyhow!("Date expression '{}' is outside the supported calendar range", expr));
    }

    anyhow::bail!("Unsupported date expression: '{}'. Use YYYY-MM-DD, today, yesterday, tomorrow, or +Nd/-Nd.", expr)
}

/// Describe `date` relative to `today` ("today", "in 3 days", "2 days ago")
pub fn format_relative_days(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (date - today).num_days();
    match diff {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 0 => format!("in {} days", d),
        d => format!("{} days ago", -d),
    }
}
