use crate::value::ParseError;
use std::fmt;

/// Reasons a rescale operation aborts. Every variant is a no-op from the
/// reader's point of view: nothing on the page has been touched.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// The replacement text could not be interpreted as a quantity.
    InvalidQuantityText(ParseError),
    /// The modal was dismissed without input.
    UserCancelled,
    /// The scale factor would be undefined: the current value is zero, or
    /// the replacement is not positive.
    DegenerateScale(f64),
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleError::InvalidQuantityText(e) => write!(f, "Invalid quantity text: {}", e),
            ScaleError::UserCancelled => write!(f, "Edit cancelled"),
            ScaleError::DegenerateScale(value) => {
                write!(f, "No usable scale factor for value {}", value)
            }
        }
    }
}

impl std::error::Error for ScaleError {}

impl From<ParseError> for ScaleError {
    fn from(e: ParseError) -> Self {
        ScaleError::InvalidQuantityText(e)
    }
}
