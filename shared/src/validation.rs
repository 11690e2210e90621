//! Input validation functions
//!
//! Pure validators for the numeric request fields. These run at the API
//! boundary, before the f64 wire values are converted for storage, so
//! NaN and infinity never survive the conversion.

/// Validate a serving multiplier
pub fn validate_quantity(quantity: f64) -> Result<(), String> {
    if quantity.is_nan() || quantity.is_infinite() {
        return Err("Quantity must be a valid number".to_string());
    }
    if quantity <= 0.0 {
        return Err("Quantity must be positive".to_string());
    }
    Ok(())
}

/// Validate a per-serving calorie value
pub fn validate_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Calories must be a valid number".to_string());
    }
    if calories < 0.0 {
        return Err("Calories cannot be negative".to_string());
    }
    Ok(())
}

/// Validate a duration in minutes
pub fn validate_duration_minutes(minutes: i32) -> Result<(), String> {
    if minutes < 0 {
        return Err("Duration cannot be negative".to_string());
    }
    if minutes > 1440 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}
