use crate::host::{PageModel, QuantityId};
use crate::metadata::Metadata;
use crate::recipe::models::Recipe;

/// One row of a built page, for rendering and lookup by location.
#[derive(Debug, Clone)]
pub struct PageEntry {
    /// "group/ingredient" for ingredient rows, "serves/<unit>" for serving
    /// options.
    pub location: String,
    pub id: QuantityId,
}

/// A page model plus the locations of its rows.
pub struct RecipePage {
    pub page: PageModel,
    pub entries: Vec<PageEntry>,
}

impl RecipePage {
    pub fn find(&self, location: &str) -> Option<QuantityId> {
        self.entries
            .iter()
            .find(|e| e.location == location)
            .map(|e| e.id)
    }

    pub fn locations(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.location.as_str()).collect()
    }
}

/// Build the in-memory page for a recipe: one quantity group per serving
/// option and per ingredient, with unit and name labels wired to their
/// catalog noun forms. Amounts are converted to the ingredient's
/// preferred unit up front, the way the page generator does it.
/// Ingredients whose count failed to parse are skipped here; the loader
/// has already reported them.
pub fn page_from_recipe(recipe: &Recipe, metadata: &Metadata) -> RecipePage {
    let mut page = PageModel::new();
    let mut entries = Vec::new();

    for option in &recipe.serves {
        let id = page.add_quantity(option.count);
        page.add_label(id, Some(metadata.serving_name(&option.unit)));
        entries.push(PageEntry {
            location: format!("serves/{}", option.unit),
            id,
        });
    }

    for group in &recipe.groups {
        for ingredient in &group.ingredients {
            let amount = match ingredient.quantity() {
                Ok(amount) => amount,
                Err(_) => continue,
            };

            let (amount, unit) = match &ingredient.unit {
                Some(unit) => {
                    let (amount, unit) =
                        metadata.convert_preferred(&ingredient.name, amount, unit);
                    (amount, Some(unit))
                }
                None => (amount, None),
            };

            let id = page.add_quantity(amount);
            if let Some(unit) = &unit {
                page.add_label(id, Some(metadata.unit_name(unit)));
            }
            page.add_label(id, Some(metadata.ingredient_name(&ingredient.name)));

            entries.push(PageEntry {
                location: format!("{}/{}", group.name, ingredient.name),
                id,
            });
        }
    }

    RecipePage { page, entries }
}
