use crate::constants::{MAX_NAME_LEN, MAX_NOTES_LEN, MAX_RATING, MAX_SESSION_MINUTES};
use crate::error::AppError;

/// Validate a practice session duration in minutes.
pub fn validate_duration_minutes(duration_minutes: i64) -> Result<i64, AppError> {
    if duration_minutes <= 0 {
        return Err(AppError::InvalidInput {
            field: "duration_minutes",
            reason: "must be positive".into(),
        });
    }
    if duration_minutes > MAX_SESSION_MINUTES {
        return Err(AppError::InvalidInput {
            field: "duration_minutes",
            reason: format!("cannot exceed {MAX_SESSION_MINUTES} minutes"),
        });
    }
    Ok(duration_minutes)
}

/// Validate a 1-5 rating (session quality, mentor relationship level).
pub fn validate_rating(field: &'static str, rating: u8) -> Result<u8, AppError> {
    if !(1..=MAX_RATING).contains(&rating) {
        return Err(AppError::InvalidInput {
            field,
            reason: format!("must be 1-{MAX_RATING}"),
        });
    }
    Ok(rating)
}

/// Validate a display name or title. Returns the trimmed value.
pub fn validate_name<'a>(field: &'static str, name: &'a str) -> Result<&'a str, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput {
            field,
            reason: "cannot be empty".into(),
        });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::InvalidInput {
            field,
            reason: format!("cannot exceed {MAX_NAME_LEN} characters"),
        });
    }
    Ok(name)
}

/// Validate free text. Empty is allowed. Returns the trimmed value.
pub fn validate_notes<'a>(field: &'static str, notes: &'a str) -> Result<&'a str, AppError> {
    let notes = notes.trim();
    if notes.chars().count() > MAX_NOTES_LEN {
        return Err(AppError::InvalidInput {
            field,
            reason: format!("cannot exceed {MAX_NOTES_LEN} characters"),
        });
    }
    Ok(notes)
}
