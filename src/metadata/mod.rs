use crate::convert::UnitConversion;
use crate::noun::NounForm;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// On-disk shape of the conversion catalog (conversion.json)
#[derive(Debug, Clone, Default, Deserialize)]
struct ConversionFile {
    #[serde(default)]
    units: ConversionUnits,

    #[serde(default)]
    ingredients: HashMap<String, IngredientPhysics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConversionUnits {
    #[serde(default)]
    mass: HashMap<String, f64>,

    #[serde(default)]
    volume: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct IngredientPhysics {
    #[serde(default)]
    density_g_per_l: Option<f64>,

    #[serde(default)]
    unit_weight_grams: Option<f64>,
}

// On-disk shape of the ingredient catalog (ingredients.json)
#[derive(Debug, Clone, Default, Deserialize)]
struct IngredientFile {
    #[serde(default)]
    ingredients: HashMap<String, IngredientEntry>,

    #[serde(default)]
    units: HashMap<String, String>,

    #[serde(default)]
    servings: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct IngredientEntry {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    prefer: Option<String>,
}

/// Display-name and unit catalogs for recipe ingredients.
///
/// Two JSON documents feed this: a conversion file (unit coefficient
/// tables plus physical data per ingredient) and an ingredient file
/// (noun-spec display names, preferred units, serving names). Identifiers
/// missing from the catalogs fall back to themselves, so an empty
/// `Metadata` is always usable.
#[derive(Debug, Clone)]
pub struct Metadata {
    conversion: ConversionFile,
    ingredient: IngredientFile,
    mass_units: UnitConversion,
    volume_units: UnitConversion,
}

impl Metadata {
    pub fn empty() -> Self {
        Self::from_parts(ConversionFile::default(), IngredientFile::default())
    }

    /// Load `conversion.json` and `ingredients.json` from a catalog
    /// directory. A missing file leaves that catalog empty.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(format!("Metadata path is not a directory: {}", dir.display()).into());
        }

        let conversion_path = dir.join("conversion.json");
        let conversion = if conversion_path.exists() {
            serde_json::from_str(&fs::read_to_string(&conversion_path)?)?
        } else {
            ConversionFile::default()
        };

        let ingredient_path = dir.join("ingredients.json");
        let ingredient = if ingredient_path.exists() {
            serde_json::from_str(&fs::read_to_string(&ingredient_path)?)?
        } else {
            IngredientFile::default()
        };

        Ok(Self::from_parts(conversion, ingredient))
    }

    /// Build from catalog file contents. Used by tests and callers that
    /// read the files themselves.
    pub fn from_json_strs(
        conversion: &str,
        ingredient: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let conversion: ConversionFile = serde_json::from_str(conversion)?;
        let ingredient: IngredientFile = serde_json::from_str(ingredient)?;
        Ok(Self::from_parts(conversion, ingredient))
    }

    fn from_parts(conversion: ConversionFile, ingredient: IngredientFile) -> Self {
        let mass_units = UnitConversion::new(conversion.units.mass.clone());
        let volume_units = UnitConversion::new(conversion.units.volume.clone());
        Self {
            conversion,
            ingredient,
            mass_units,
            volume_units,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ingredient.ingredients.is_empty()
            && self.ingredient.units.is_empty()
            && self.ingredient.servings.is_empty()
            && self.conversion.units.mass.is_empty()
            && self.conversion.units.volume.is_empty()
    }

    /// Display name of an ingredient; unknown ids name themselves.
    pub fn ingredient_name(&self, id: &str) -> NounForm {
        match self.ingredient.ingredients.get(id).and_then(|e| e.name.as_deref()) {
            Some(spec) => NounForm::from_spec(spec),
            None => NounForm::from_spec(id),
        }
    }

    /// Display name of a unit; unknown ids name themselves.
    pub fn unit_name(&self, unit_id: &str) -> NounForm {
        match self.ingredient.units.get(unit_id) {
            Some(spec) => NounForm::from_spec(spec),
            None => NounForm::from_spec(unit_id),
        }
    }

    /// Display name of a serving kind ("person|people", "piece|+s").
    pub fn serving_name(&self, serving_id: &str) -> NounForm {
        match self.ingredient.servings.get(serving_id) {
            Some(spec) => NounForm::from_spec(spec),
            None => NounForm::from_spec(serving_id),
        }
    }

    pub fn preferred_unit_of(&self, ingredient_id: &str) -> Option<&str> {
        self.ingredient
            .ingredients
            .get(ingredient_id)
            .and_then(|e| e.prefer.as_deref())
    }

    pub fn density_of(&self, ingredient_id: &str) -> Option<f64> {
        self.conversion
            .ingredients
            .get(ingredient_id)
            .and_then(|e| e.density_g_per_l)
    }

    pub fn grams_per_unit_of(&self, ingredient_id: &str) -> Option<f64> {
        self.conversion
            .ingredients
            .get(ingredient_id)
            .and_then(|e| e.unit_weight_grams)
    }

    pub fn mass_units(&self) -> &UnitConversion {
        &self.mass_units
    }

    pub fn volume_units(&self) -> &UnitConversion {
        &self.volume_units
    }

    /// True if either coefficient table or the unit name catalog knows the
    /// unit.
    pub fn knows_unit(&self, unit: &str) -> bool {
        self.mass_units.is_known(unit)
            || self.volume_units.is_known(unit)
            || self.ingredient.units.contains_key(unit)
    }

    /// Convert an (amount, unit) pair into the ingredient's preferred unit
    /// when both units live in the same coefficient table; pass the pair
    /// through unchanged otherwise.
    pub fn convert_preferred(&self, ingredient_id: &str, value: f64, unit: &str) -> (f64, String) {
        let preferred = match self.preferred_unit_of(ingredient_id) {
            Some(p) if p != unit => p.to_string(),
            _ => return (value, unit.to_string()),
        };

        let table = if self.mass_units.is_known(unit) && self.mass_units.is_known(&preferred) {
            &self.mass_units
        } else if self.volume_units.is_known(unit) && self.volume_units.is_known(&preferred) {
            &self.volume_units
        } else {
            return (value, unit.to_string());
        };

        match table.convert(value, unit, &preferred) {
            Ok(converted) => (converted, preferred),
            Err(_) => (value, unit.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONVERSION: &str = r#"{
        "units": {
            "mass": { "g": 1.0, "kg": 1000.0 },
            "volume": { "l": 1.0, "ml": 0.001 }
        },
        "ingredients": {
            "flour": { "density_g_per_l": 550.0 },
            "egg": { "unit_weight_grams": 60.0 }
        }
    }"#;

    const INGREDIENTS: &str = r#"{
        "ingredients": {
            "egg": { "name": "egg|+s" },
            "flour": { "name": "flour", "prefer": "g" }
        },
        "units": { "tbsp": "tablespoon|+s" },
        "servings": { "person": "person|people" }
    }"#;

    fn metadata() -> Metadata {
        Metadata::from_json_strs(CONVERSION, INGREDIENTS).unwrap()
    }

    #[test]
    fn test_name_lookups_with_fallback() {
        let meta = metadata();
        assert_eq!(meta.ingredient_name("egg").plural, "eggs");
        assert_eq!(meta.ingredient_name("nutmeg").singular, "nutmeg");
        assert_eq!(meta.unit_name("tbsp").plural, "tablespoons");
        assert_eq!(meta.unit_name("cup").singular, "cup");
        assert_eq!(meta.serving_name("person").plural, "people");
    }

    #[test]
    fn test_physical_data() {
        let meta = metadata();
        assert_eq!(meta.density_of("flour"), Some(550.0));
        assert_eq!(meta.grams_per_unit_of("egg"), Some(60.0));
        assert_eq!(meta.density_of("egg"), None);
    }

    #[test]
    fn test_preferred_unit_conversion() {
        let meta = metadata();
        let (value, unit) = meta.convert_preferred("flour", 0.5, "kg");
        assert_eq!(value, 500.0);
        assert_eq!(unit, "g");
        // no preference configured: untouched
        let (value, unit) = meta.convert_preferred("egg", 3.0, "kg");
        assert_eq!(value, 3.0);
        assert_eq!(unit, "kg");
        // preference in a different dimension: untouched
        let (value, unit) = meta.convert_preferred("flour", 2.0, "l");
        assert_eq!(value, 2.0);
        assert_eq!(unit, "l");
    }

    #[test]
    fn test_empty_metadata() {
        let meta = Metadata::empty();
        assert!(meta.is_empty());
        assert!(!meta.knows_unit("g"));
        assert_eq!(meta.ingredient_name("egg").singular, "egg");
    }
}
