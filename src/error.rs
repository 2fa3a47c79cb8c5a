use thiserror::Error;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Invalid user input, rejected before any computation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Boat missing from the rating table for the requested band
    #[error("Not found: {0}")]
    NotFound(String),
    /// Rating table failed construction-time validation
    #[error("Invalid rating table: {0}")]
    InvalidTable(String),
}

/// Validation functions
pub fn validate_reference_boat(boat: &str) -> Result<(), CalcError> {
    if boat.trim().is_empty() {
        return Err(CalcError::InvalidInput(
            "No reference boat selected".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_distance(distance_nm: f64) -> Result<(), CalcError> {
    if !distance_nm.is_finite() {
        return Err(CalcError::InvalidInput(format!(
            "Race length must be a finite number, got {}",
            distance_nm
        )));
    }
    if distance_nm <= 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "Race length must be positive, got {}",
            distance_nm
        )));
    }
    Ok(())
}

/// Parse a race length entered as text (the UI hands distance over as a string)
pub fn parse_distance(text: &str) -> Result<f64, CalcError> {
    let distance_nm: f64 = text.trim().parse().map_err(|_| {
        CalcError::InvalidInput(format!("Race length must be a number, got '{}'", text))
    })?;
    validate_distance(distance_nm)?;
    Ok(distance_nm)
}
