use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Simple fraction: "2/3", "1 / 4"
    static ref SIMPLE_FRACTION: Regex =
        Regex::new(r"^(?P<num>\d+)\s*/\s*(?P<den>\d+)$").unwrap();
    /// Mixed fraction: "1 1/2"
    static ref MIXED_FRACTION: Regex =
        Regex::new(r"^(?P<whole>\d+)\s+(?P<num>\d+)\s*/\s*(?P<den>\d+)$").unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Empty,
    ZeroDenominator(String),
    NotANumber(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Quantity text is empty"),
            ParseError::ZeroDenominator(s) => {
                write!(f, "Fraction '{}' has a zero denominator", s)
            }
            ParseError::NotANumber(s) => write!(f, "'{}' is not a quantity", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a quantity token into its numeric value.
///
/// The common cooking fractions map to exact constants, both as glyphs and
/// in ASCII form. General simple ("2/3") and mixed ("1 1/2") fractions are
/// accepted; anything else must be plain decimal text.
pub fn parse_quantity(text: &str) -> Result<f64, ParseError> {
    let token = text.trim();

    if token.is_empty() {
        return Err(ParseError::Empty);
    }

    match token {
        "1/4" | "¼" => return Ok(0.25),
        "1/2" | "½" => return Ok(0.5),
        "3/4" | "¾" => return Ok(0.75),
        _ => {}
    }

    if let Some(caps) = MIXED_FRACTION.captures(token) {
        let whole = parse_digits(&caps["whole"], token)?;
        let num = parse_digits(&caps["num"], token)?;
        let den = parse_digits(&caps["den"], token)?;
        if den == 0.0 {
            return Err(ParseError::ZeroDenominator(token.to_string()));
        }
        return Ok(whole + num / den);
    }

    if let Some(caps) = SIMPLE_FRACTION.captures(token) {
        let num = parse_digits(&caps["num"], token)?;
        let den = parse_digits(&caps["den"], token)?;
        if den == 0.0 {
            return Err(ParseError::ZeroDenominator(token.to_string()));
        }
        return Ok(num / den);
    }

    let value: f64 = token
        .parse()
        .map_err(|_| ParseError::NotANumber(token.to_string()))?;

    // str::parse accepts "inf" and "NaN"; neither is a usable quantity
    if !value.is_finite() {
        return Err(ParseError::NotANumber(token.to_string()));
    }

    Ok(value)
}

fn parse_digits(digits: &str, token: &str) -> Result<f64, ParseError> {
    digits
        .parse()
        .map_err(|_| ParseError::NotANumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_constants() {
        assert_eq!(parse_quantity("1/4").unwrap(), 0.25);
        assert_eq!(parse_quantity("¼").unwrap(), 0.25);
        assert_eq!(parse_quantity("1/2").unwrap(), 0.5);
        assert_eq!(parse_quantity("½").unwrap(), 0.5);
        assert_eq!(parse_quantity("3/4").unwrap(), 0.75);
        assert_eq!(parse_quantity("¾").unwrap(), 0.75);
    }

    #[test]
    fn test_general_fractions() {
        assert_eq!(parse_quantity("2/4").unwrap(), 0.5);
        assert!((parse_quantity("2/3").unwrap() - 0.6666666666666666).abs() < 1e-12);
        assert_eq!(parse_quantity("1 / 4").unwrap(), 0.25);
    }

    #[test]
    fn test_mixed_fractions() {
        assert_eq!(parse_quantity("1 1/2").unwrap(), 1.5);
        assert_eq!(parse_quantity("2 3/4").unwrap(), 2.75);
    }

    #[test]
    fn test_decimal_text() {
        assert_eq!(parse_quantity("0.75").unwrap(), 0.75);
        assert_eq!(parse_quantity("12").unwrap(), 12.0);
        assert_eq!(parse_quantity("  3.5  ").unwrap(), 3.5);
    }

    #[test]
    fn test_rejects_junk() {
        assert!(matches!(parse_quantity(""), Err(ParseError::Empty)));
        assert!(matches!(parse_quantity("   "), Err(ParseError::Empty)));
        assert!(matches!(
            parse_quantity("a pinch"),
            Err(ParseError::NotANumber(_))
        ));
        assert!(matches!(
            parse_quantity("inf"),
            Err(ParseError::NotANumber(_))
        ));
        assert!(matches!(
            parse_quantity("NaN"),
            Err(ParseError::NotANumber(_))
        ));
    }

    #[test]
    fn test_rejects_zero_denominator() {
        assert!(matches!(
            parse_quantity("3/0"),
            Err(ParseError::ZeroDenominator(_))
        ));
        assert!(matches!(
            parse_quantity("1 2/0"),
            Err(ParseError::ZeroDenominator(_))
        ));
    }
}
