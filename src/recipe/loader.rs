use crate::metadata::Metadata;
use crate::recipe::models::Recipe;
use crate::recipe::validation::ValidationResult;
use std::fs;
use std::path::Path;

pub fn load_recipe_from_file<P: AsRef<Path>>(
    path: P,
    metadata: &Metadata,
) -> Result<(Recipe, ValidationResult), Box<dyn std::error::Error>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(format!("Recipe file does not exist: {}", path.display()).into());
    }

    let content = fs::read_to_string(path)?;
    load_recipe_from_str(&content, metadata)
}

/// Load a recipe from TOML text. Malformed TOML is a hard error; per-
/// ingredient problems are collected into the validation result instead.
pub fn load_recipe_from_str(
    content: &str,
    metadata: &Metadata,
) -> Result<(Recipe, ValidationResult), Box<dyn std::error::Error>> {
    let recipe: Recipe = toml::from_str(content)?;

    let mut validation = ValidationResult::new();
    validate_recipe(&recipe, metadata, &mut validation);

    Ok((recipe, validation))
}

fn validate_recipe(recipe: &Recipe, metadata: &Metadata, validation: &mut ValidationResult) {
    for option in &recipe.serves {
        if option.count <= 0.0 {
            validation.add_warning(
                format!("Serving count {} is not positive", option.count),
                Some(format!("serves/{}", option.unit)),
            );
        }
    }

    for group in &recipe.groups {
        if group.ingredients.is_empty() {
            validation.add_warning(
                "Ingredient group is empty".to_string(),
                Some(group.name.clone()),
            );
        }

        for ingredient in &group.ingredients {
            let location = format!("{}/{}", group.name, ingredient.name);

            match ingredient.quantity() {
                Ok(quantity) => {
                    if quantity <= 0.0 {
                        validation.add_warning(
                            format!("Quantity {} is not positive", quantity),
                            Some(location.clone()),
                        );
                    }
                }
                Err(e) => {
                    validation.add_error(
                        format!("Unusable ingredient count: {}", e),
                        Some(location.clone()),
                    );
                }
            }

            if let Some(unit) = &ingredient.unit {
                if !metadata.is_empty() && !metadata.knows_unit(unit) {
                    validation.add_warning(
                        format!("Unit '{}' is not in the metadata catalogs", unit),
                        Some(location.clone()),
                    );
                }
            }

            // named fields are consumed by serde; whatever is left over
            // was not recognized
            for key in ingredient.extra.keys() {
                validation.add_warning(
                    format!("Unrecognized ingredient property '{}'", key),
                    Some(location.clone()),
                );
            }
        }
    }
}
