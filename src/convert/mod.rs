use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone)]
pub enum ConvertError {
    UnknownUnit { unit: String, known: Vec<String> },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnknownUnit { unit, known } => {
                write!(
                    f,
                    "Cannot convert to or from '{}', because the unit is unknown. Known: {}",
                    unit,
                    known.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Scalar conversion within a single dimension (mass, volume, ...).
///
/// Every unit carries a coefficient relative to the table's reference
/// unit; converting divides out the source coefficient and multiplies in
/// the target's.
#[derive(Debug, Clone, Default)]
pub struct UnitConversion {
    table: HashMap<String, f64>,
}

impl UnitConversion {
    pub fn new(table: HashMap<String, f64>) -> Self {
        Self { table }
    }

    pub fn is_known(&self, unit: &str) -> bool {
        self.table.contains_key(unit)
    }

    /// Known unit names, sorted for stable error messages.
    pub fn known_units(&self) -> Vec<String> {
        let mut units: Vec<String> = self.table.keys().cloned().collect();
        units.sort();
        units
    }

    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        if from == to {
            return Ok(value);
        }
        let from_scalar = self.table.get(from).ok_or_else(|| ConvertError::UnknownUnit {
            unit: from.to_string(),
            known: self.known_units(),
        })?;
        let to_scalar = self.table.get(to).ok_or_else(|| ConvertError::UnknownUnit {
            unit: to.to_string(),
            known: self.known_units(),
        })?;
        Ok(value * from_scalar / to_scalar)
    }
}
