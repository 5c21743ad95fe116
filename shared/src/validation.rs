//! Validation helpers for the Travel Advisor platform
//!
//! Preference submissions are validated here, at the write boundary: the
//! scoring engine may assume any `UserPreferences` it receives has all
//! three fields populated.

use crate::types::{BudgetTier, ClimateCategory};

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Validate a declared weather preference against the recognized category
/// names
pub fn validate_weather_preference(weather: &str) -> Result<(), &'static str> {
    if ClimateCategory::parse(weather).is_some() {
        Ok(())
    } else {
        Err("Weather preference must be one of: hot, cold, moderate, tropical")
    }
}

/// Validate a budget tier name
pub fn parse_budget_tier(budget: &str) -> Result<BudgetTier, &'static str> {
    match budget {
        "affordable" => Ok(BudgetTier::Affordable),
        "moderate" => Ok(BudgetTier::Moderate),
        "luxury" => Ok(BudgetTier::Luxury),
        _ => Err("Budget must be one of: affordable, moderate, luxury"),
    }
}

/// Validate the food preference list is usable for scoring
pub fn validate_food_preferences(food_preferences: &[String]) -> Result<(), &'static str> {
    if food_preferences.is_empty() {
        return Err("At least one food preference is required");
    }
    if food_preferences.iter().any(|cuisine| cuisine.trim().is_empty()) {
        return Err("Food preferences cannot be blank");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
        assert!(validate_email("@.").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_validate_weather_preference() {
        assert!(validate_weather_preference("tropical").is_ok());
        assert!(validate_weather_preference("moderate").is_ok());
        assert!(validate_weather_preference("sunny").is_err());
        assert!(validate_weather_preference("").is_err());
    }

    #[test]
    fn test_parse_budget_tier() {
        assert_eq!(parse_budget_tier("luxury"), Ok(BudgetTier::Luxury));
        assert_eq!(parse_budget_tier("affordable"), Ok(BudgetTier::Affordable));
        assert!(parse_budget_tier("cheap").is_err());
    }

    #[test]
    fn test_validate_food_preferences() {
        assert!(validate_food_preferences(&["Italian".to_string()]).is_ok());
        assert!(validate_food_preferences(&[]).is_err());
        assert!(validate_food_preferences(&["  ".to_string()]).is_err());
    }
}
