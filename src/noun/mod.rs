use serde::{Deserialize, Serialize};

/// Singular/plural display pair for a label sitting next to a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NounForm {
    pub singular: String,
    pub plural: String,
}

impl NounForm {
    pub fn new(singular: &str, plural: &str) -> Self {
        Self {
            singular: singular.to_string(),
            plural: plural.to_string(),
        }
    }

    /// Parse the compact catalog syntax:
    /// "egg|+s" (plural is singular plus suffix), "leaf|leaves" (explicit
    /// plural), "salt" (same form for both).
    pub fn from_spec(spec: &str) -> Self {
        match spec.split_once('|') {
            Some((singular, ext)) => {
                let plural = match ext.strip_prefix('+') {
                    Some(suffix) => format!("{}{}", singular, suffix),
                    None => ext.to_string(),
                };
                Self {
                    singular: singular.to_string(),
                    plural,
                }
            }
            None => Self {
                singular: spec.to_string(),
                plural: spec.to_string(),
            },
        }
    }

    /// Exactly 1 selects the singular form; everything else is plural.
    pub fn select(&self, value: f64) -> &str {
        if value == 1.0 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

/// Pick label text for a value. Labels without a configured pair are left
/// unchanged, so absence is a no-op rather than an error.
pub fn select_label(value: f64, form: Option<&NounForm>) -> Option<&str> {
    form.map(|f| f.select(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_with_suffix() {
        let form = NounForm::from_spec("egg|+s");
        assert_eq!(form.singular, "egg");
        assert_eq!(form.plural, "eggs");
    }

    #[test]
    fn test_spec_with_explicit_plural() {
        let form = NounForm::from_spec("leaf|leaves");
        assert_eq!(form.singular, "leaf");
        assert_eq!(form.plural, "leaves");
    }

    #[test]
    fn test_spec_invariant_word() {
        let form = NounForm::from_spec("salt");
        assert_eq!(form.singular, "salt");
        assert_eq!(form.plural, "salt");
    }

    #[test]
    fn test_selection() {
        let form = NounForm::new("egg", "eggs");
        assert_eq!(form.select(1.0), "egg");
        assert_eq!(form.select(2.0), "eggs");
        assert_eq!(form.select(0.0), "eggs");
        assert_eq!(form.select(0.5), "eggs");
    }

    #[test]
    fn test_unconfigured_label_is_noop() {
        assert_eq!(select_label(1.0, None), None);
        let form = NounForm::new("cup", "cups");
        assert_eq!(select_label(2.0, Some(&form)), Some("cups"));
    }
}
