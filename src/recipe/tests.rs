#[cfg(test)]
mod tests {
    use crate::metadata::Metadata;
    use crate::recipe::loader::load_recipe_from_str;

    const PANCAKES: &str = r#"
name = "Pancakes"

[[serves]]
count = 4
unit = "person"

[[group]]
name = "Batter"

[[group.ingredient]]
name = "flour"
count = 250
unit = "g"

[[group.ingredient]]
name = "egg"
count = 2

[[group.ingredient]]
name = "milk"
count = "1/2"
unit = "l"
"#;

    #[test]
    fn test_load_recipe_counts_in_all_forms() {
        let (recipe, validation) = load_recipe_from_str(PANCAKES, &Metadata::empty()).unwrap();

        assert_eq!(recipe.name, "Pancakes");
        assert_eq!(recipe.serves.len(), 1);
        assert_eq!(recipe.serves[0].count, 4.0);
        assert_eq!(recipe.ingredient_count(), 3);

        let batter = &recipe.groups[0];
        assert_eq!(batter.ingredients[0].quantity().unwrap(), 250.0);
        assert_eq!(batter.ingredients[1].quantity().unwrap(), 2.0);
        assert_eq!(batter.ingredients[2].quantity().unwrap(), 0.5);

        assert!(validation.is_valid());
        assert!(!validation.has_issues());
    }

    #[test]
    fn test_unparseable_count_is_an_error() {
        let content = r#"
name = "Broken"

[[group]]
name = "Stuff"

[[group.ingredient]]
name = "salt"
count = "a pinch"
"#;
        let (_, validation) = load_recipe_from_str(content, &Metadata::empty()).unwrap();
        assert!(!validation.is_valid());
        let error = validation.errors().next().unwrap();
        assert_eq!(error.location.as_deref(), Some("Stuff/salt"));
    }

    #[test]
    fn test_warnings_for_oddities() {
        let content = r#"
name = "Odd"

[[group]]
name = "Empty"

[[group]]
name = "Rest"

[[group.ingredient]]
name = "flour"
count = 0
unit = "handful"
note = "sift twice"
"#;
        let meta = Metadata::from_json_strs(
            r#"{ "units": { "mass": { "g": 1.0 } } }"#,
            r#"{}"#,
        )
        .unwrap();

        let (_, validation) = load_recipe_from_str(content, &meta).unwrap();
        assert!(validation.is_valid());

        let messages: Vec<&str> = validation.warnings().map(|w| w.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("group is empty")));
        assert!(messages.iter().any(|m| m.contains("not positive")));
        assert!(messages.iter().any(|m| m.contains("'handful'")));
        assert!(messages.iter().any(|m| m.contains("'note'")));
    }

    #[test]
    fn test_malformed_toml_is_a_load_error() {
        assert!(load_recipe_from_str("name = ", &Metadata::empty()).is_err());
    }
}
