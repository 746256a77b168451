/// Parse a strictly positive number (used for quantities and prices)
pub fn parse_positive(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(format!("Value must be greater than 0, got {}", s));
    }

    Ok(value)
}
