use shortpath_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a cost bound, rejecting negative and non-finite values
pub fn parse_max_cost(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("invalid cost '{}' (expected a number)", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("cost must be finite and non-negative, got {}", s));
    }
    Ok(value)
}
