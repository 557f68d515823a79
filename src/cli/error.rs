// Error handling utilities for consistent error messages and exit codes

use std::process;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, unknown ids, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Whether an error chain bottoms out in I/O or malformed data files
pub fn is_internal(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause.is::<std::io::Error>()
            || cause.is::<serde_json::Error>()
            || cause.is::<crate::config::ConfigError>()
            || cause.is::<crate::data::DataError>()
    })
}

/// Validate that a string is not empty
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate a day count (non-negative integer)
pub fn validate_days(days_str: &str) -> Result<u32, String> {
    days_str.trim().parse::<i64>()
        .map_err(|_| format!("Invalid day count: '{}'. Days must be a number.", days_str))
        .and_then(|days| {
            if days < 0 {
                Err(format!("Invalid day count: {}. Days must be non-negative.", days))
            } else {
                u32::try_from(days).map_err(|_| format!("Invalid day count: {}. Too large.", days))
            }
        })
}
